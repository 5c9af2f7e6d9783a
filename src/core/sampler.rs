//! Fester-Schritt-Abtastung der Kurve in Linien-Segmente.

use std::iter::FusedIterator;

use glam::Vec3;

use super::ControlPointChain;
use crate::shared::options::is_valid_sample_step;

/// Anzahl der Segmente für eine Schrittweite: `floor(1 / step)`, Endwert 1.0 inklusive.
///
/// Gibt 0 für Schrittweiten außerhalb von (0, 1] und für Schrittweiten mit
/// mehr als `MAX_SAMPLE_SEGMENTS` Segmenten zurück.
pub fn segment_count(step: f32) -> usize {
    if !is_valid_sample_step(step) {
        return 0;
    }
    // kleiner Zuschlag gegen Rundung (1 / 0.005 darf nicht 199.99 ergeben)
    ((1.0 / step) + 1e-4).floor() as usize
}

/// Lazy Iterator über benachbarte Kurvenpunkte `(p(t - step), p(t))`.
///
/// t läuft von `step` bis einschließlich 1.0. Der Parameter wird als
/// `k · step` berechnet, sodass aufeinanderfolgende Segmente ihren
/// gemeinsamen Punkt exakt teilen. Neustart über `Clone` oder
/// `ControlPointChain::segments`.
#[derive(Debug, Clone)]
pub struct SegmentSampler<'a> {
    chain: &'a ControlPointChain,
    step: f32,
    next: usize,
    count: usize,
}

impl<'a> SegmentSampler<'a> {
    pub(crate) fn new(chain: &'a ControlPointChain, step: f32) -> Self {
        let count = if chain.len() < 2 {
            0
        } else {
            segment_count(step)
        };
        if chain.len() >= 2 && count == 0 {
            log::warn!("Ungültige Abtast-Schrittweite {step}, keine Segmente");
        }
        Self {
            chain,
            step,
            next: 1,
            count,
        }
    }

    /// Schrittweite im Parameterraum.
    pub fn step(&self) -> f32 {
        self.step
    }

    fn param(&self, k: usize) -> f32 {
        (k as f32 * self.step).min(1.0)
    }
}

impl Iterator for SegmentSampler<'_> {
    type Item = (Vec3, Vec3);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.count {
            return None;
        }
        let k = self.next;
        self.next += 1;
        let from = self.chain.point_at(self.param(k - 1));
        let to = self.chain.point_at(self.param(k));
        Some((from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.count {
            0
        } else {
            self.count - self.next + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SegmentSampler<'_> {}

impl FusedIterator for SegmentSampler<'_> {}

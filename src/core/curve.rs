//! Kurvenfamilien: Auswertung p(t) über Positionen und Tangenten der Kette.
//!
//! Beide Varianten zerlegen die Kette in Segmente [t_i, t_{i+1}] und
//! interpolieren jeden Kontrollpunkt bei seinem Parameter t_i:
//!
//! - `Bezier`: kubisches Bézier-Segment, innere Handles aus den
//!   geschätzten Tangenten (p_i ± v_i·h/3).
//! - `CatmullRom`: uniformes Catmull-Rom-Segment über die Nachbarpositionen;
//!   die Phantom-Punkte an den Rändern erzwingen die Null-Tangente an Start und Ende.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ControlPoint;
use crate::shared::spline_geometry::{catmull_rom_point, cubic_bezier};

/// Auswahl der Kurvenfamilie, wird beim Anlegen der Kette festgelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurveKind {
    /// Stückweise kubische Bézier-Kurve
    #[default]
    Bezier,
    /// Uniforme Catmull-Rom-Kurve
    CatmullRom,
}

impl CurveKind {
    /// Anzeigename für Auswahllisten.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Bezier => "Bezier",
            CurveKind::CatmullRom => "Catmull-Rom",
        }
    }

    /// Ermittelt die Kurvenfamilie aus einem Auswahllisten-Eintrag.
    ///
    /// Alles außer "Bezier" ergibt Catmull-Rom.
    pub fn from_label(label: &str) -> Self {
        if label == CurveKind::Bezier.label() {
            CurveKind::Bezier
        } else {
            CurveKind::CatmullRom
        }
    }

    /// Alle Kurvenfamilien in Auswahl-Reihenfolge.
    pub fn all() -> [CurveKind; 2] {
        [CurveKind::Bezier, CurveKind::CatmullRom]
    }

    /// Liefert den Auswerter dieser Kurvenfamilie.
    pub fn evaluator(self) -> &'static dyn CurveEvaluator {
        match self {
            CurveKind::Bezier => &BezierCurve,
            CurveKind::CatmullRom => &CatmullRomCurve,
        }
    }
}

/// Auswertung p(t) über eine Kette mit vergebenen Parametern und Tangenten.
///
/// Vorbedingung: `points.len() >= 2`. Für t außerhalb von [0, 1] wird das
/// erste bzw. letzte Segment extrapoliert.
pub trait CurveEvaluator {
    /// Position der Kurve beim Parameter `t`.
    fn evaluate(&self, points: &[ControlPoint], t: f32) -> Vec3;
}

/// Lage eines Parameters innerhalb der Segmentfolge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SegmentLocation {
    /// Index des Segment-Startpunkts
    pub index: usize,
    /// Lokaler Parameter im Segment (0 = Start, 1 = Ende)
    pub local: f32,
    /// Parameter-Spanne des Segments (t_{i+1} - t_i)
    pub span: f32,
}

/// Sucht das Segment mit t_i ≤ t ≤ t_{i+1}, geklemmt auf erstes/letztes Segment.
pub(crate) fn locate_segment(points: &[ControlPoint], t: f32) -> SegmentLocation {
    debug_assert!(points.len() >= 2, "Segmentsuche braucht mindestens 2 Punkte");
    let last_segment = points.len() - 2;
    let index = points[1..]
        .partition_point(|p| p.t <= t)
        .min(last_segment);

    let t0 = points[index].t;
    let span = points[index + 1].t - t0;
    let local = if span > f32::EPSILON {
        (t - t0) / span
    } else {
        0.0
    };
    SegmentLocation { index, local, span }
}

/// Stückweise kubische Bézier-Kurve mit Handles aus den Tangenten.
#[derive(Debug, Clone, Copy, Default)]
pub struct BezierCurve;

impl CurveEvaluator for BezierCurve {
    fn evaluate(&self, points: &[ControlPoint], t: f32) -> Vec3 {
        let seg = locate_segment(points, t);
        let a = &points[seg.index];
        let b = &points[seg.index + 1];
        let handle = seg.span / 3.0;
        cubic_bezier(
            a.position,
            a.position + a.tangent * handle,
            b.position - b.tangent * handle,
            b.position,
            seg.local,
        )
    }
}

/// Uniforme Catmull-Rom-Kurve durch alle Kontrollpunkte.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatmullRomCurve;

impl CurveEvaluator for CatmullRomCurve {
    fn evaluate(&self, points: &[ControlPoint], t: f32) -> Vec3 {
        let seg = locate_segment(points, t);
        let i = seg.index;
        let p1 = points[i].position;
        let p2 = points[i + 1].position;
        // Phantom = Nachbar auf der Gegenseite → Tangente (p2 - p0)/2 wird 0
        let p0 = if i == 0 { p2 } else { points[i - 1].position };
        let p3 = points.get(i + 2).map_or(p1, |p| p.position);
        catmull_rom_point(p0, p1, p2, p3, seg.local)
    }
}

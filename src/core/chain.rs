//! Die zentrale Kontrollpunkt-Kette einer Straße.
//!
//! Jede strukturelle Änderung (anhängen, einfügen, entfernen) und jede
//! Attribut-Übernahme aus dem Marker-Layer endet mit `recompute()`:
//! Parameter neu vergeben, Tangenten neu schätzen. Es gibt kein Dirty-Flag,
//! die Kette ist nach jeder Mutation sofort auswertbar.

use glam::Vec3;

use super::curve::{locate_segment, CurveKind};
use super::frame::{frame_params, CurveFrame};
use super::insertion::plan_insertion;
use super::parameters::assign_parameters;
use super::sampler::SegmentSampler;
use super::tangent::estimate_tangents;
use super::{ControlPoint, ControlPointId, MarkerLayer, SplineError};
use crate::shared::options::{DEFAULT_NORMAL, DEFAULT_WIDTH};
use crate::shared::spline_geometry::{polyline_length, resample_by_distance};
use crate::shared::SplineOptions;

/// Geordnete Folge von Kontrollpunkten; Einfüge-Reihenfolge = Kurven-Reihenfolge.
#[derive(Debug, Clone)]
pub struct ControlPointChain {
    /// Kurvenfamilie, beim Anlegen festgelegt
    kind: CurveKind,
    /// Alle Kontrollpunkte in Kurven-Reihenfolge
    points: Vec<ControlPoint>,
    /// Nächste freie Kontrollpunkt-ID
    next_id: u64,
    /// Breite neuer Kontrollpunkte
    default_width: f32,
    /// Normale neuer Kontrollpunkte
    default_normal: Vec3,
}

impl ControlPointChain {
    /// Erstellt eine leere Kette mit Standard-Normale (0, 1, 0) und Breite 1.0.
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            next_id: 0,
            default_width: DEFAULT_WIDTH,
            default_normal: DEFAULT_NORMAL,
        }
    }

    /// Erstellt eine leere Kette mit Vorgaben aus den Optionen.
    pub fn with_options(kind: CurveKind, options: &SplineOptions) -> Self {
        let options = options.clone().sanitized();
        Self {
            default_width: options.default_width,
            default_normal: options.default_normal,
            ..Self::new(kind)
        }
    }

    /// Kurvenfamilie der Kette.
    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Anzahl der Kontrollpunkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kette keine Kontrollpunkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Sicht auf alle Kontrollpunkte in Kurven-Reihenfolge.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Findet einen Kontrollpunkt über seine ID.
    pub fn get(&self, id: ControlPointId) -> Option<&ControlPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Aktuelle Position eines Kontrollpunkts in der Sequenz.
    pub fn index_of(&self, id: ControlPointId) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// ID des letzten Kontrollpunkts (z.B. um dessen Marker weiter zu ziehen).
    pub fn last_id(&self) -> Option<ControlPointId> {
        self.points.last().map(|p| p.id)
    }

    /// Hängt einen Kontrollpunkt am Ende an.
    pub fn append(&mut self, position: Vec3) -> ControlPointId {
        let point = self.new_point(position);
        let id = point.id;
        self.points.push(point);
        log::debug!("Kontrollpunkt {} angehängt ({} Punkte)", id, self.points.len());
        self.recompute();
        id
    }

    /// Fügt einen Kontrollpunkt neben dem nächstgelegenen bestehenden Punkt ein.
    ///
    /// Auf einer leeren Kette wie `append`.
    pub fn insert(&mut self, position: Vec3) -> ControlPointId {
        let Some(plan) = plan_insertion(&self.points, position) else {
            return self.append(position);
        };
        let point = self.new_point(position);
        let id = point.id;
        let index = plan.insert_index();
        self.points.insert(index, point);
        log::debug!(
            "Kontrollpunkt {} an Index {} eingefügt ({:?} Anker {})",
            id,
            index,
            plan.placement,
            plan.anchor
        );
        self.recompute();
        id
    }

    /// Entfernt den letzten Kontrollpunkt. No-op auf einer leeren Kette.
    ///
    /// Mit `Some(markers)` werden die Marker des Punkts vorher freigegeben.
    pub fn remove_last(&mut self, markers: Option<&mut dyn MarkerLayer>) -> Option<ControlPoint> {
        let id = self.points.last()?.id;
        if let Some(markers) = markers {
            markers.release_marker(id);
        }
        let removed = self.points.pop();
        log::debug!("Kontrollpunkt {} entfernt ({} Punkte)", id, self.points.len());
        self.recompute();
        removed
    }

    /// Übernimmt Position, Normale und Breite aller Punkte aus dem Marker-Layer.
    ///
    /// Normalen-Marker außerhalb der Einheitskugel werden auf Länge 1 gezogen,
    /// der Breiten-Marker wird auf die x-Achse zurückgesetzt. Beides wird an
    /// den Marker-Layer zurückgeschrieben.
    pub fn update_from_markers(&mut self, markers: &mut dyn MarkerLayer) {
        for point in &mut self.points {
            let Some(mut state) = markers.marker_state(point.id) else {
                log::warn!(
                    "Keine Marker für Kontrollpunkt {} gefunden, Werte bleiben unverändert",
                    point.id
                );
                continue;
            };
            let mut write_back = false;

            if state.normal_offset.length() > 1.0 {
                state.normal_offset = state.normal_offset.normalize();
                write_back = true;
            }
            point.position = state.position;
            point.normal = state.normal_offset.try_normalize().unwrap_or(point.normal);

            let width = state.width_offset.x.max(0.0);
            point.width = width;
            let width_offset = Vec3::new(width, 0.0, 0.0);
            if state.width_offset != width_offset {
                state.width_offset = width_offset;
                write_back = true;
            }

            if write_back {
                markers.store_marker_state(point.id, state);
            }
        }
        self.recompute();
    }

    /// Blendet die Marker aller Kontrollpunkte ein oder aus.
    pub fn set_visibility(&self, visible: bool, markers: &mut dyn MarkerLayer) {
        for point in &self.points {
            markers.set_marker_visible(point.id, visible);
        }
    }

    /// Position der Kurve bei `t`.
    ///
    /// # Panics
    ///
    /// Bei weniger als 2 Kontrollpunkten (Programmierfehler, vorher `len()` prüfen
    /// oder `try_point_at` verwenden).
    pub fn point_at(&self, t: f32) -> Vec3 {
        assert!(
            self.points.len() >= 2,
            "Kurvenauswertung mit {} Kontrollpunkt(en), mindestens 2 nötig",
            self.points.len()
        );
        self.kind.evaluator().evaluate(&self.points, t)
    }

    /// Geprüfte Variante von `point_at`.
    pub fn try_point_at(&self, t: f32) -> Result<Vec3, SplineError> {
        if self.points.len() < 2 {
            return Err(SplineError::TooFewControlPoints {
                count: self.points.len(),
            });
        }
        Ok(self.point_at(t))
    }

    /// Linien-Segmente `(p(t - step), p(t))` für t = step … 1.0.
    ///
    /// Leer bei weniger als 2 Kontrollpunkten.
    pub fn segments(&self, step: f32) -> SegmentSampler<'_> {
        SegmentSampler::new(self, step)
    }

    /// Straßenquerschnitt bei `t`; `None` bei weniger als 2 Kontrollpunkten.
    ///
    /// Normale und Breite werden zwischen den Kontrollpunkten des Segments
    /// linear überblendet.
    pub fn frame_at(&self, t: f32) -> Option<CurveFrame> {
        if self.points.len() < 2 {
            return None;
        }
        let seg = locate_segment(&self.points, t);
        let a = &self.points[seg.index];
        let b = &self.points[seg.index + 1];
        let blend = seg.local.clamp(0.0, 1.0);
        let normal = a
            .normal
            .lerp(b.normal, blend)
            .try_normalize()
            .unwrap_or(a.normal);
        Some(CurveFrame {
            t,
            position: self.point_at(t),
            normal,
            width: a.width + (b.width - a.width) * blend,
        })
    }

    /// Frames im Parameter-Abstand `detail` (Start und Ende inklusive).
    pub fn frames(&self, detail: f32) -> Vec<CurveFrame> {
        if self.points.len() < 2 {
            return Vec::new();
        }
        frame_params(detail)
            .into_iter()
            .filter_map(|t| self.frame_at(t))
            .collect()
    }

    /// Abgetastete Kurve als Polyline (Startpunkt plus Segment-Endpunkte).
    ///
    /// Leer bei weniger als 2 Kontrollpunkten oder ungültiger Schrittweite.
    pub fn polyline(&self, step: f32) -> Vec<Vec3> {
        let mut segments = self.segments(step);
        let Some((first, second)) = segments.next() else {
            return Vec::new();
        };
        let mut points = Vec::with_capacity(segments.len() + 2);
        points.push(first);
        points.push(second);
        points.extend(segments.map(|(_, to)| to));
        points
    }

    /// Näherungsweise Bogenlänge über die Polyline mit Schrittweite `step`.
    pub fn approx_length(&self, step: f32) -> f32 {
        polyline_length(&self.polyline(step))
    }

    /// Punkte im gleichmäßigen Bogenlängen-Abstand (höchstens `max_spacing`).
    ///
    /// Start und Ende der Kurve sind immer enthalten.
    pub fn resampled(&self, step: f32, max_spacing: f32) -> Vec<Vec3> {
        resample_by_distance(&self.polyline(step), max_spacing)
    }

    /// Vergibt Parameter und schätzt Tangenten für alle Punkte neu.
    fn recompute(&mut self) {
        assign_parameters(&mut self.points);
        estimate_tangents(&mut self.points);
        log::trace!(
            "Parameter und Tangenten neu berechnet ({} Punkte)",
            self.points.len()
        );
    }

    fn new_point(&mut self, position: Vec3) -> ControlPoint {
        let id = ControlPointId(self.next_id);
        self.next_id += 1;
        ControlPoint::new(id, position, self.default_normal, self.default_width)
    }
}

impl Default for ControlPointChain {
    fn default() -> Self {
        Self::new(CurveKind::default())
    }
}

#[cfg(test)]
mod tests;

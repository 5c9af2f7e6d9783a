//! Repräsentiert einen Kontrollpunkt der Straßen-Mittellinie.

use glam::Vec3;

/// Stabile Kennung eines Kontrollpunkts innerhalb einer Kette.
///
/// Der Marker-Layer ordnet seine Marker über diese ID 1:1 den
/// Kontrollpunkten zu. IDs werden innerhalb einer Kette nie wiederverwendet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlPointId(pub u64);

impl std::fmt::Display for ControlPointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Kontrollpunkt mit Lage, Normale, Breite und abgeleiteten Kurvenwerten.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    /// Kennung für den Marker-Layer
    pub id: ControlPointId,
    /// Position im 3D-Raum
    pub position: Vec3,
    /// Einheits-Normale (Straßen-Oberseite)
    pub normal: Vec3,
    /// Straßenbreite am Kontrollpunkt (≥ 0)
    pub width: f32,
    /// Kurvenparameter ∈ [0, 1], wird von der Kette vergeben
    pub t: f32,
    /// Geschätzte Tangente ("Geschwindigkeit"), wird von der Kette berechnet
    pub tangent: Vec3,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt; `t` und Tangente bleiben bis zur
    /// nächsten Neuberechnung der Kette auf 0.
    pub fn new(id: ControlPointId, position: Vec3, normal: Vec3, width: f32) -> Self {
        Self {
            id,
            position,
            normal,
            width,
            t: 0.0,
            tangent: Vec3::ZERO,
        }
    }
}

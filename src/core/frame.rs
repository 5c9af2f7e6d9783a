//! Kurven-Frames (Position, Normale, Breite) für Straßen-Mesh-Builder.

use glam::Vec3;

use crate::shared::options::is_valid_sample_step;

/// Lokaler Straßenquerschnitt an einem Kurvenparameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveFrame {
    /// Kurvenparameter
    pub t: f32,
    /// Position auf der Kurve
    pub position: Vec3,
    /// Interpolierte Einheits-Normale
    pub normal: Vec3,
    /// Interpolierte Straßenbreite
    pub width: f32,
}

/// Parameter für Frames im Abstand `detail`, Start und Ende immer enthalten.
///
/// Leer für `detail` außerhalb von (0, 1] oder feiner als `MAX_SAMPLE_SEGMENTS` erlaubt.
pub fn frame_params(detail: f32) -> Vec<f32> {
    if !is_valid_sample_step(detail) {
        return Vec::new();
    }
    let steps = ((1.0 / detail) - 1e-4).ceil().max(1.0) as usize;
    // letzter Schritt exakt auf 1.0, auch wenn steps · detail knapp darunter liegt
    (0..=steps)
        .map(|k| {
            if k == steps {
                1.0
            } else {
                (k as f32 * detail).min(1.0)
            }
        })
        .collect()
}

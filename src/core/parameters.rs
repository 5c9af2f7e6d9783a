//! Gleichmäßige Parameter-Vergabe t_i = i / (N - 1).

use super::ControlPoint;

/// Vergibt jedem Kontrollpunkt seinen Kurvenparameter anhand des Index.
///
/// Bei einem einzelnen Punkt ist keine Kurve auswertbar; er erhält t = 0.
pub fn assign_parameters(points: &mut [ControlPoint]) {
    let n = points.len();
    if n == 1 {
        points[0].t = 0.0;
        return;
    }
    let last = n.saturating_sub(1) as f32;
    for (i, point) in points.iter_mut().enumerate() {
        point.t = i as f32 / last;
    }
}

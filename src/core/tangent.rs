//! Tangenten-Schätzung ("Geschwindigkeit") an den Kontrollpunkten.
//!
//! Innere Punkte erhalten den Mittelwert der beiden einseitigen
//! Differenzenquotienten, skaliert mit `TANGENT_SHAPE_FACTOR`.
//! Erster und letzter Punkt haben immer die Null-Tangente, die Kurve
//! startet und endet also mit Geschwindigkeit 0.

use glam::Vec3;

use super::ControlPoint;

/// Formfaktor für innere Tangenten (leicht überschwingende Kurve).
pub const TANGENT_SHAPE_FACTOR: f32 = 1.5;

/// Zentrierte Differenz an einem inneren Punkt.
///
/// `(pm, tm)`: Vorgänger, `(p0, t0)`: Punkt selbst, `(pp, tp)`: Nachfolger.
pub fn interior_tangent(pm: Vec3, tm: f32, p0: Vec3, t0: f32, pp: Vec3, tp: f32) -> Vec3 {
    ((pp - p0) / (tp - t0) + (p0 - pm) / (t0 - tm)) / 2.0 * TANGENT_SHAPE_FACTOR
}

/// Berechnet die Tangenten aller Kontrollpunkte neu.
///
/// Erwartet bereits vergebene Parameter. Bei weniger als 2 Punkten passiert nichts.
pub fn estimate_tangents(points: &mut [ControlPoint]) {
    let n = points.len();
    if n < 2 {
        return;
    }

    points[0].tangent = Vec3::ZERO;
    for i in 1..n - 1 {
        let (prev, cur, next) = (&points[i - 1], &points[i], &points[i + 1]);
        let tangent = interior_tangent(
            prev.position,
            prev.t,
            cur.position,
            cur.t,
            next.position,
            next.t,
        );
        points[i].tangent = tangent;
    }
    points[n - 1].tangent = Vec3::ZERO;
}

//! Reine Geometrie-Funktionen für Catmull-Rom- und Bézier-Segmente.
//!
//! Layer-neutral: wird von `core::curve` (Kurvenauswertung) und von
//! Konsumenten (Mesh-Builder, Tests) gleichermaßen verwendet.

use glam::Vec3;

/// Berechnet einen Punkt auf einem Catmull-Rom-Segment (t ∈ [0, 1]).
///
/// p0, p1, p2, p3: vier aufeinanderfolgende Kontrollpunkte.
/// Die Kurve verläuft von p1 nach p2.
pub fn catmull_rom_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Verteilt Punkte gleichmäßig (Arc-Length) entlang einer Polyline.
///
/// Start- und Endpunkt werden exakt übernommen.
pub fn resample_by_distance(polyline: &[Vec3], max_segment_length: f32) -> Vec<Vec3> {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return Vec::new();
    };
    if polyline.len() < 2 || max_segment_length <= 0.0 {
        return polyline.to_vec();
    }

    let total = polyline_length(polyline);
    if total < f32::EPSILON {
        return vec![first];
    }

    let segment_count = (total / max_segment_length).ceil().max(1.0) as usize;
    let spacing = total / segment_count as f32;

    let mut result = Vec::with_capacity(segment_count + 1);
    result.push(first);

    let mut poly_idx = 0;
    let mut remainder = 0.0f32; // Rest-Distanz im aktuellen Polyline-Segment

    for _ in 1..segment_count {
        let mut needed = spacing;

        while poly_idx + 1 < polyline.len() {
            let seg_len = polyline[poly_idx].distance(polyline[poly_idx + 1]);
            let available = seg_len - remainder;

            if available >= needed {
                remainder += needed;
                let t = remainder / seg_len;
                result.push(polyline[poly_idx].lerp(polyline[poly_idx + 1], t));
                break;
            }
            needed -= available;
            remainder = 0.0;
            poly_idx += 1;
        }
    }

    result.push(last);
    result
}

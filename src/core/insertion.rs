//! Einfüge-Heuristik: neuen Punkt neben dem nächstgelegenen Kontrollpunkt einsortieren.
//!
//! Keine echte Segment-Projektion, entschieden wird nur über die Abstände
//! zu den Nachbarn des nächsten Punkts. Bei nicht-monotonen Pfaden kann der
//! Punkt dadurch auf der "falschen" Seite landen.

use glam::Vec3;

use super::ControlPoint;

/// Lage des neuen Punkts relativ zum Anker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Direkt vor dem Anker einfügen
    Before,
    /// Direkt nach dem Anker einfügen
    After,
}

/// Ergebnis der Einfüge-Planung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionPlan {
    /// Index des nächstgelegenen Kontrollpunkts
    pub anchor: usize,
    /// Vor oder nach dem Anker
    pub placement: Placement,
}

impl InsertionPlan {
    /// Index, an dem der neue Punkt in die Sequenz eingefügt wird.
    pub fn insert_index(&self) -> usize {
        match self.placement {
            Placement::Before => self.anchor,
            Placement::After => self.anchor + 1,
        }
    }
}

/// Findet den Kontrollpunkt mit minimalem euklidischem Abstand zu `p`.
///
/// Bei Gleichstand gewinnt der zuerst gefundene Punkt.
pub fn nearest_index(points: &[ControlPoint], p: Vec3) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let mut min_index = 0;
    let mut min_distance = f32::INFINITY;
    for (i, point) in points.iter().enumerate() {
        let distance = point.position.distance(p);
        if distance < min_distance {
            min_distance = distance;
            min_index = i;
        }
    }
    Some(min_index)
}

/// Plant, wo ein neuer Punkt an Position `p` eingefügt wird.
///
/// Gibt `None` für eine leere Kette zurück.
pub fn plan_insertion(points: &[ControlPoint], p: Vec3) -> Option<InsertionPlan> {
    let anchor = nearest_index(points, p)?;
    let last = points.len() - 1;
    let dist = |i: usize| points[i].position.distance(p);

    let insert_before = if last == 0 {
        // Einzelner Punkt: keine Nachbarn zum Vergleichen
        false
    } else if anchor == 0 {
        dist(1) > dist(0)
    } else if anchor == last {
        dist(anchor) > dist(anchor - 1)
    } else {
        dist(anchor + 1) > dist(anchor - 1)
    };

    let placement = if insert_before {
        Placement::Before
    } else {
        Placement::After
    };
    Some(InsertionPlan { anchor, placement })
}

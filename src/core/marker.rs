//! Schnittstelle zum externen Marker-Layer (verschiebbare Kugeln im Viewport).
//!
//! Pro Kontrollpunkt hält der Marker-Layer drei Marker: einen Positions-Marker
//! sowie Normalen- und Breiten-Marker relativ dazu. Der Kern erzeugt oder
//! zerstört keine Szenen-Objekte selbst, er liest nur Zustände und gibt
//! korrigierte Werte zurück.

use std::collections::HashMap;

use glam::Vec3;

use super::{ControlPoint, ControlPointId};

/// Momentaufnahme der drei Marker eines Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerState {
    /// Weltposition des Positions-Markers
    pub position: Vec3,
    /// Normalen-Marker relativ zum Positions-Marker
    pub normal_offset: Vec3,
    /// Breiten-Marker relativ zum Positions-Marker (Breite = x-Anteil)
    pub width_offset: Vec3,
}

impl MarkerState {
    /// Marker-Anordnung passend zu einem Kontrollpunkt.
    pub fn for_point(point: &ControlPoint) -> Self {
        Self {
            position: point.position,
            normal_offset: point.normal,
            width_offset: Vec3::new(point.width, 0.0, 0.0),
        }
    }
}

/// Externer Marker-Layer, über den Benutzer-Edits in die Kette gelangen.
pub trait MarkerLayer {
    /// Liest den aktuellen Zustand der Marker eines Kontrollpunkts.
    fn marker_state(&self, id: ControlPointId) -> Option<MarkerState>;

    /// Schreibt korrigierte Marker-Werte zurück (geklemmte Normale, Breite auf x-Achse).
    fn store_marker_state(&mut self, id: ControlPointId, state: MarkerState);

    /// Blendet die Marker eines Kontrollpunkts ein oder aus.
    fn set_marker_visible(&mut self, id: ControlPointId, visible: bool);

    /// Gibt die Marker eines Kontrollpunkts frei.
    fn release_marker(&mut self, id: ControlPointId);
}

/// Einfacher Marker-Layer im Speicher (Headless-Betrieb und Tests).
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarkers {
    markers: HashMap<ControlPointId, (MarkerState, bool)>,
}

impl InMemoryMarkers {
    /// Erstellt einen leeren Marker-Layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt sichtbare Marker für einen Kontrollpunkt an (oder ersetzt sie).
    pub fn spawn(&mut self, point: &ControlPoint) {
        self.markers
            .insert(point.id, (MarkerState::for_point(point), true));
    }

    /// Verschiebt die Marker eines Kontrollpunkts wie ein Benutzer-Drag.
    ///
    /// Gibt `false` zurück wenn für die ID keine Marker existieren.
    pub fn drag(&mut self, id: ControlPointId, edit: impl FnOnce(&mut MarkerState)) -> bool {
        match self.markers.get_mut(&id) {
            Some((state, _)) => {
                edit(state);
                true
            }
            None => false,
        }
    }

    /// Prüft ob die Marker eines Kontrollpunkts sichtbar sind.
    pub fn is_visible(&self, id: ControlPointId) -> Option<bool> {
        self.markers.get(&id).map(|(_, visible)| *visible)
    }

    /// Anzahl verwalteter Marker-Gruppen.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Gibt `true` zurück, wenn keine Marker existieren.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerLayer for InMemoryMarkers {
    fn marker_state(&self, id: ControlPointId) -> Option<MarkerState> {
        self.markers.get(&id).map(|(state, _)| *state)
    }

    fn store_marker_state(&mut self, id: ControlPointId, state: MarkerState) {
        if let Some((stored, _)) = self.markers.get_mut(&id) {
            *stored = state;
        }
    }

    fn set_marker_visible(&mut self, id: ControlPointId, visible: bool) {
        if let Some((_, flag)) = self.markers.get_mut(&id) {
            *flag = visible;
        }
    }

    fn release_marker(&mut self, id: ControlPointId) {
        self.markers.remove(&id);
    }
}

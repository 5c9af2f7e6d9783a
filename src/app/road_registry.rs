//! Registry aller Straßen einer Editier-Session.
//!
//! Slot 0 hält immer die DriveLine (Bézier-Kette), weitere Straßen werden
//! über `create_road` angelegt und heißen standardmäßig `RoadMesh_<n>`.
//! Die Registry wird explizit durchgereicht, es gibt keinen globalen Zustand.

use glam::Vec3;

use crate::core::{ControlPointChain, ControlPointId, CurveFrame, CurveKind, SplineError};
use crate::shared::options::clamp_slider;
use crate::shared::SplineOptions;

/// Slot-Index einer Straße in der Registry (0 = DriveLine).
pub type RoadId = usize;

/// Slot der DriveLine.
pub const DRIVE_LINE_ID: RoadId = 0;

/// Anzeigename der DriveLine.
pub const DRIVE_LINE_NAME: &str = "DriveLine";

/// Namens-Präfix neu angelegter Straßen.
pub const ROAD_NAME_PREFIX: &str = "RoadMesh_";

/// Wirkung eines Klicks in den Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementMode {
    /// Neuer Kontrollpunkt am Ende der Kette
    #[default]
    Append,
    /// Neuer Kontrollpunkt neben dem nächstgelegenen bestehenden
    Insert,
}

/// Eine Straße: Mittellinie plus Breite und Mesh-Detailgrad.
#[derive(Debug, Clone)]
pub struct Road {
    /// Anzeigename
    pub name: String,
    /// Kontrollpunkt-Kette der Mittellinie
    pub chain: ControlPointChain,
    /// Straßenbreite (Slider-Position / 10)
    pub width: f32,
    /// Parameter-Abstand der Mesh-Querschnitte (Slider-Position / 100)
    pub detail: f32,
}

impl Road {
    fn new(name: String, kind: CurveKind, options: &SplineOptions) -> Self {
        Self {
            name,
            chain: ControlPointChain::with_options(kind, options),
            width: slider_to_width(options.road_width_slider),
            detail: slider_to_detail(options.road_detail_slider),
        }
    }

    /// Querschnitte für einen Mesh-Builder im Abstand `detail`.
    pub fn frames(&self) -> Vec<CurveFrame> {
        self.chain.frames(self.detail)
    }
}

/// Breite aus einer Breiten-Slider-Position.
pub fn slider_to_width(pos: u32) -> f32 {
    clamp_slider(pos) as f32 / 10.0
}

/// Detailgrad aus einer Detail-Slider-Position.
pub fn slider_to_detail(pos: u32) -> f32 {
    clamp_slider(pos) as f32 / 100.0
}

/// Alle Straßen der Session, DriveLine in Slot 0.
#[derive(Debug, Clone)]
pub struct RoadRegistry {
    roads: Vec<Road>,
    active: RoadId,
    proposed_name: String,
    placement_mode: PlacementMode,
    options: SplineOptions,
}

impl RoadRegistry {
    /// Erstellt eine Registry mit DriveLine und Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(SplineOptions::default())
    }

    /// Erstellt eine Registry mit DriveLine; neue Ketten übernehmen die Optionen.
    pub fn with_options(options: SplineOptions) -> Self {
        let options = options.sanitized();
        let drive_line = Road::new(DRIVE_LINE_NAME.to_string(), CurveKind::Bezier, &options);
        Self {
            roads: vec![drive_line],
            active: DRIVE_LINE_ID,
            proposed_name: road_name(1),
            placement_mode: PlacementMode::default(),
            options,
        }
    }

    /// Legt eine neue Straße unter dem vorgeschlagenen Namen an und aktiviert sie.
    pub fn create_road(&mut self, kind: CurveKind) -> RoadId {
        let name = std::mem::take(&mut self.proposed_name);
        let road = Road::new(name, kind, &self.options);
        self.push_road(road)
    }

    /// Nimmt eine zuvor entfernte Straße wieder auf (z.B. für Undo).
    pub fn restore_road(&mut self, road: Road) -> RoadId {
        self.push_road(road)
    }

    /// Entfernt die zuletzt angelegte Straße.
    ///
    /// Der Namenszähler wird zurückgesetzt und die neue letzte Straße aktiviert.
    /// Die DriveLine kann nicht entfernt werden.
    pub fn remove_last_road(&mut self) -> Result<Road, SplineError> {
        if self.roads.len() <= 1 {
            log::warn!("Entfernen abgelehnt: nur noch die DriveLine vorhanden");
            return Err(SplineError::DriveLineRemoval);
        }
        let removed = self.roads.pop().ok_or(SplineError::DriveLineRemoval)?;
        self.proposed_name = road_name(self.roads.len());
        self.active = self.roads.len() - 1;
        log::info!(
            "Straße '{}' entfernt, aktiv: '{}'",
            removed.name,
            self.roads[self.active].name
        );
        Ok(removed)
    }

    /// Name für die nächste `create_road`.
    pub fn proposed_name(&self) -> &str {
        &self.proposed_name
    }

    /// Überschreibt den Namen der nächsten Straße.
    pub fn set_proposed_name(&mut self, name: impl Into<String>) {
        self.proposed_name = name.into();
    }

    /// Aktiviert die Straße im Slot `id`.
    pub fn select(&mut self, id: RoadId) -> Result<(), SplineError> {
        if id >= self.roads.len() {
            return Err(SplineError::UnknownRoad(id));
        }
        self.active = id;
        log::debug!("Straße '{}' aktiviert", self.roads[id].name);
        Ok(())
    }

    /// Slot der aktiven Straße.
    pub fn active_id(&self) -> RoadId {
        self.active
    }

    /// Die aktive Straße.
    pub fn active(&self) -> &Road {
        &self.roads[self.active]
    }

    /// Die aktive Straße (veränderbar).
    pub fn active_mut(&mut self) -> &mut Road {
        &mut self.roads[self.active]
    }

    /// Straße im Slot `id`.
    pub fn get(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id)
    }

    /// Straße im Slot `id` (veränderbar).
    pub fn get_mut(&mut self, id: RoadId) -> Option<&mut Road> {
        self.roads.get_mut(id)
    }

    /// Die DriveLine in Slot 0.
    pub fn drive_line(&self) -> &Road {
        &self.roads[DRIVE_LINE_ID]
    }

    /// Alle Straßen in Slot-Reihenfolge.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Anzahl der Straßen inklusive DriveLine.
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    /// Immer `false`, da Slot 0 (DriveLine) nie entfernt wird.
    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Übernimmt Breiten- und Detail-Slider für die aktive Straße.
    ///
    /// Positionen außerhalb von 1..=100 werden geklemmt.
    pub fn apply_sliders(&mut self, width_pos: u32, detail_pos: u32) {
        let road = &mut self.roads[self.active];
        road.width = slider_to_width(width_pos);
        road.detail = slider_to_detail(detail_pos);
        log::debug!(
            "Straße '{}': Breite {:.1}, Detail {:.2}",
            road.name,
            road.width,
            road.detail
        );
    }

    /// Aktueller Platzierungsmodus.
    pub fn placement_mode(&self) -> PlacementMode {
        self.placement_mode
    }

    /// Setzt den Platzierungsmodus (Anhängen oder Einfügen).
    pub fn set_placement_mode(&mut self, mode: PlacementMode) {
        self.placement_mode = mode;
    }

    /// Setzt einen Kontrollpunkt auf der aktiven Straße gemäß Platzierungsmodus.
    pub fn place_control_point(&mut self, position: Vec3) -> ControlPointId {
        let chain = &mut self.roads[self.active].chain;
        match self.placement_mode {
            PlacementMode::Append => chain.append(position),
            PlacementMode::Insert => chain.insert(position),
        }
    }

    /// Optionen, mit denen neue Ketten angelegt werden.
    pub fn options(&self) -> &SplineOptions {
        &self.options
    }

    fn push_road(&mut self, road: Road) -> RoadId {
        let id = self.roads.len();
        log::info!("Straße '{}' in Slot {} angelegt", road.name, id);
        self.roads.push(road);
        self.active = id;
        self.proposed_name = road_name(id + 1);
        id
    }
}

impl Default for RoadRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn road_name(number: usize) -> String {
    format!("{ROAD_NAME_PREFIX}{number}")
}

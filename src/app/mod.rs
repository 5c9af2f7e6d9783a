//! Application-Layer: Straßen-Registry einer Editier-Session.

pub mod road_registry;

pub use road_registry::{PlacementMode, Road, RoadId, RoadRegistry, DRIVE_LINE_ID};

//! Track-Spline Library.
//! Parametrische Straßen-Mittellinien aus Kontrollpunkt-Ketten: Parameter-Vergabe,
//! Tangenten-Schätzung, Einfüge-Heuristik, Kurvenauswertung und Abtastung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{PlacementMode, Road, RoadId, RoadRegistry};
pub use core::{
    ControlPoint, ControlPointChain, ControlPointId, CurveEvaluator, CurveFrame, CurveKind,
    InMemoryMarkers, MarkerLayer, MarkerState, SegmentSampler, SplineError,
};
pub use render::{draw_chain, line_vertices, LineSink, LineVertex};
pub use shared::SplineOptions;

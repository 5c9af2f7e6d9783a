//! Core-Domänentypen: Kontrollpunkte, Kette, Kurvenfamilien, Marker-Schnittstelle.

pub mod chain;
/// Kontrollpunkt-Datenmodell
///
/// - ControlPoint: Position, Normale, Breite sowie abgeleitete t/Tangente
/// - ControlPointId: stabile Kennung für den Marker-Layer
pub mod control_point;
pub mod curve;
pub mod error;
pub mod frame;
pub mod insertion;
pub mod marker;
pub mod parameters;
pub mod sampler;
pub mod tangent;

pub use chain::ControlPointChain;
pub use control_point::{ControlPoint, ControlPointId};
pub use curve::{BezierCurve, CatmullRomCurve, CurveEvaluator, CurveKind};
pub use error::SplineError;
pub use frame::{frame_params, CurveFrame};
pub use insertion::{nearest_index, plan_insertion, InsertionPlan, Placement};
pub use marker::{InMemoryMarkers, MarkerLayer, MarkerState};
pub use parameters::assign_parameters;
pub use sampler::{segment_count, SegmentSampler};
pub use tangent::{estimate_tangents, interior_tangent, TANGENT_SHAPE_FACTOR};

//! Layer-neutrale Bausteine: Geometrie-Funktionen und Konfiguration.

pub mod options;
pub mod spline_geometry;

pub use options::SplineOptions;
pub use spline_geometry::{catmull_rom_point, cubic_bezier, polyline_length, resample_by_distance};

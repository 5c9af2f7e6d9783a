//! Vertex-Typen für die Linien-Darstellung.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Vertex für Kurven-Linien (Line-List, zwei Vertices pro Segment).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position im 3D-Raum
    pub position: [f32; 3],
    /// RGBA-Farbe der Linie
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

//! Linien-Darstellung der Kurve für einen externen Render-Loop.
//!
//! Der Kern zeichnet nicht selbst: er tastet die Kurve ab und reicht jedes
//! Segment an einen `LineSink` weiter. `Vec<LineVertex>` ist selbst ein Sink
//! und liefert eine fertige Line-List für GPU-Buffer.

mod types;

pub use types::LineVertex;

use glam::Vec3;

use crate::core::ControlPointChain;
use crate::shared::SplineOptions;

/// Ziel für einzelne Liniensegmente (Debug-Draw, Vertex-Buffer, Tests).
pub trait LineSink {
    /// Zeichnet eine Linie von `a` nach `b` in der RGBA-Farbe `color`.
    fn draw_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]);
}

impl LineSink for Vec<LineVertex> {
    fn draw_line(&mut self, a: Vec3, b: Vec3, color: [f32; 4]) {
        self.push(LineVertex::new(a, color));
        self.push(LineVertex::new(b, color));
    }
}

/// Zeichnet die Kurve als Folge von Liniensegmenten im Abstand `step`.
///
/// Gibt die Anzahl gezeichneter Segmente zurück (0 bei weniger als 2 Kontrollpunkten).
pub fn draw_chain(
    chain: &ControlPointChain,
    sink: &mut dyn LineSink,
    step: f32,
    color: [f32; 4],
) -> usize {
    let mut drawn = 0;
    for (a, b) in chain.segments(step) {
        sink.draw_line(a, b, color);
        drawn += 1;
    }
    log::trace!("{} Kurven-Segmente gezeichnet", drawn);
    drawn
}

/// Wie `draw_chain`, Schrittweite und Farbe aus den Optionen.
pub fn draw_chain_with_options(
    chain: &ControlPointChain,
    sink: &mut dyn LineSink,
    options: &SplineOptions,
) -> usize {
    draw_chain(chain, sink, options.sample_step, options.line_color)
}

/// Baut eine Line-List (zwei Vertices pro Segment) für die Kurve.
pub fn line_vertices(chain: &ControlPointChain, step: f32, color: [f32; 4]) -> Vec<LineVertex> {
    let mut vertices = Vec::with_capacity(chain.segments(step).len() * 2);
    draw_chain(chain, &mut vertices, step, color);
    vertices
}

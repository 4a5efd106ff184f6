//! Painting one frame onto the drawable surface.

use crate::field::ParticleField;
use crate::spatial::Edge;
use crate::surface::DrawSurface;

/// Stroke width used for every link line.
pub const LINK_STROKE_WIDTH: f32 = 0.5;

/// Paint the current field and edge set.
///
/// Clears the surface, then strokes every edge, then fills every particle
/// disc on top. Nothing accumulates from prior frames.
pub fn draw_frame<S: DrawSurface>(surface: &mut S, field: &ParticleField, edges: &[Edge]) {
    surface.clear();

    let particles = field.particles();
    for edge in edges {
        surface.draw_line(
            particles[edge.a].position,
            particles[edge.b].position,
            edge.color,
            edge.alpha,
            LINK_STROKE_WIDTH,
        );
    }

    for p in particles {
        surface.draw_disc(p.position, p.size, p.color, p.opacity);
    }
}

//! Proximity links between nearby particles.
//!
//! Each frame the linker recomputes, from scratch, the set of particle pairs
//! closer than a distance threshold and assigns each resulting edge a fade
//! weight. This is a brute-force O(n²) pass over unordered pairs: with the
//! population capped at 50, the worst case is 1225 distance checks per tick,
//! cheap enough that no spatial index is warranted at this scale.
//!
//! Edges are frame-scoped. The linker keeps one scratch buffer that is
//! cleared and refilled each call, so steady-state ticks allocate nothing.

use crate::field::ParticleField;
use crate::particle::DisplayColor;

/// Default link distance threshold, in surface units.
pub const MAX_LINK_DISTANCE: f32 = 100.0;
/// Edge alpha at distance zero; fades linearly to zero at the threshold.
pub const LINK_BASE_ALPHA: f32 = 0.2;

/// A transient link between two particles, valid for one frame only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the first particle. Always less than `b`.
    pub a: usize,
    /// Index of the second particle.
    pub b: usize,
    /// Stroke alpha, `LINK_BASE_ALPHA * (1 - d / max_distance)`.
    pub alpha: f32,
    /// Drawn in the color of particle `a`.
    pub color: DisplayColor,
}

/// Recomputes the edge set each frame.
#[derive(Debug)]
pub struct ProximityLinker {
    max_distance: f32,
    edges: Vec<Edge>,
}

impl ProximityLinker {
    /// Linker with the given distance threshold.
    pub fn new(max_distance: f32) -> Self {
        Self {
            max_distance,
            edges: Vec::new(),
        }
    }

    /// The configured distance threshold.
    #[inline]
    pub fn max_distance(&self) -> f32 {
        self.max_distance
    }

    /// Recompute all edges for the current particle positions.
    ///
    /// The threshold is strict: a pair exactly `max_distance` apart yields no
    /// edge. Returns the refilled scratch buffer.
    pub fn compute_edges(&mut self, field: &ParticleField) -> &[Edge] {
        self.edges.clear();

        let particles = field.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let d = particles[i].position.distance(particles[j].position);
                if d < self.max_distance {
                    self.edges.push(Edge {
                        a: i,
                        b: j,
                        alpha: LINK_BASE_ALPHA * (1.0 - d / self.max_distance),
                        color: particles[i].color,
                    });
                }
            }
        }

        &self.edges
    }
}

impl Default for ProximityLinker {
    fn default() -> Self {
        Self::new(MAX_LINK_DISTANCE)
    }
}

//! Particle data and the fixed display palette.
//!
//! A [`Particle`] is a single recyclable visual entity. Everything except its
//! position is fixed at spawn time; the position is the only attribute the
//! simulator mutates, and a recycled particle keeps its size, speed, drift,
//! color and opacity.

use glam::Vec2;

/// The three display colors particles and links are drawn in.
///
/// The hex values are part of the visual contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayColor {
    /// `#64ffda`
    Aqua,
    /// `#00a8e8`
    Azure,
    /// `#a688fa`
    Violet,
}

/// The full palette, in the order colors are sampled from.
pub const PALETTE: [DisplayColor; 3] = [
    DisplayColor::Aqua,
    DisplayColor::Azure,
    DisplayColor::Violet,
];

impl DisplayColor {
    /// CSS hex string for this color.
    #[inline]
    pub fn hex(&self) -> &'static str {
        match self {
            DisplayColor::Aqua => "#64ffda",
            DisplayColor::Azure => "#00a8e8",
            DisplayColor::Violet => "#a688fa",
        }
    }
}

/// A single moving visual entity.
///
/// Positions are unbounded: a particle may drift outside the surface
/// horizontally and is only recycled when it crosses the top edge.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Current position. May exceed surface bounds transiently.
    pub position: Vec2,
    /// Disc radius, in [1, 4).
    pub size: f32,
    /// Upward speed per tick (y decreases), in [0.5, 1.5).
    pub speed: f32,
    /// Horizontal drift per tick, in [-0.15, 0.15).
    pub drift: f32,
    /// Palette color, fixed for the particle's lifetime.
    pub color: DisplayColor,
    /// Fill opacity, in [0.3, 0.8).
    pub opacity: f32,
}

//! The bounded, recyclable particle collection.
//!
//! A [`ParticleField`] owns a fixed-size population of particles sized from
//! the surface width: `clamp(round(width / 10), 1, 50)`. The count is
//! invariant between resizes; the simulator recycles slots in place and never
//! grows or shrinks the collection mid-run. A resize throws the population
//! away and re-initializes from scratch — count is a function of viewport
//! size, so the old population is invalid anyway, and resizes are rare
//! relative to frame rate.
//!
//! # Example
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(1);
//! let field = ParticleField::initialize(500.0, 400.0, &mut rng);
//! assert_eq!(field.len(), 50);
//! ```

use rand::Rng;

use crate::particle::Particle;
use crate::spawn;

/// Hard cap on the particle population.
pub const MAX_PARTICLES: usize = 50;
/// Surface width per particle; count scales linearly until the cap.
pub const WIDTH_PER_PARTICLE: f32 = 10.0;

/// An ordered, fixed-count collection of particles plus the surface
/// dimensions it was initialized for.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleField {
    /// Particle count for a surface of the given width:
    /// `clamp(round(width / 10), 1, 50)`.
    ///
    /// Degenerate widths (zero, negative, NaN) floor at 1.
    #[inline]
    pub fn count_for_width(width: f32) -> usize {
        let raw = (width / WIDTH_PER_PARTICLE).round();
        if raw.is_nan() {
            return 1;
        }
        raw.clamp(1.0, MAX_PARTICLES as f32) as usize
    }

    /// Build a field for a surface of the given size, sampling every particle
    /// from `rng`.
    pub fn initialize<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let count = Self::count_for_width(width);
        let particles = (0..count)
            .map(|_| spawn::sample_particle(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Discard the population and re-initialize for new dimensions.
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        *self = Self::initialize(width, height, rng);
    }

    /// Number of particles. Constant between resizes.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Surface width the field was initialized for.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Surface height the field was initialized for.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Read access to the particle slots.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access for the simulator step.
    #[inline]
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_count_formula() {
        assert_eq!(ParticleField::count_for_width(0.0), 1);
        assert_eq!(ParticleField::count_for_width(4.9), 1);
        assert_eq!(ParticleField::count_for_width(100.0), 10);
        assert_eq!(ParticleField::count_for_width(253.0), 25);
        assert_eq!(ParticleField::count_for_width(500.0), 50);
        assert_eq!(ParticleField::count_for_width(10000.0), 50);
    }

    #[test]
    fn test_count_formula_degenerate_widths() {
        assert_eq!(ParticleField::count_for_width(-100.0), 1);
        assert_eq!(ParticleField::count_for_width(f32::NAN), 1);
    }

    #[test]
    fn test_initialize_population() {
        let mut rng = SmallRng::seed_from_u64(3);
        let field = ParticleField::initialize(800.0, 600.0, &mut rng);
        assert_eq!(field.len(), 50);
        assert_eq!(field.width(), 800.0);
        assert_eq!(field.height(), 600.0);
        for p in field.particles() {
            assert!(p.position.y >= 600.0);
        }
    }

    #[test]
    fn test_resize_rebuilds_population() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = ParticleField::initialize(800.0, 600.0, &mut rng);
        field.resize(120.0, 90.0, &mut rng);
        assert_eq!(field.len(), 12);
        assert_eq!(field.width(), 120.0);
    }

    #[test]
    fn test_zero_width_surface_is_safe() {
        let mut rng = SmallRng::seed_from_u64(3);
        let field = ParticleField::initialize(0.0, 0.0, &mut rng);
        assert_eq!(field.len(), 1);
        assert_eq!(field.particles()[0].position.x, 0.0);
    }
}

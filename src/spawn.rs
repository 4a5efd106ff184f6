//! Particle attribute sampling.
//!
//! All randomness in the crate flows through these helpers, generic over
//! [`rand::Rng`] so tests can inject a seeded [`rand::rngs::SmallRng`] and
//! get reproducible fields:
//!
//! ```ignore
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let p = plexfield::spawn::sample_particle(&mut rng, 800.0, 600.0);
//! ```

use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use crate::particle::{Particle, PALETTE};

/// Disc radius range.
pub const SIZE_RANGE: Range<f32> = 1.0..4.0;
/// Upward speed range (units per tick).
pub const SPEED_RANGE: Range<f32> = 0.5..1.5;
/// Horizontal drift range (units per tick).
pub const DRIFT_RANGE: Range<f32> = -0.15..0.15;
/// Fill opacity range.
pub const OPACITY_RANGE: Range<f32> = 0.3..0.8;
/// Height of the spawn band below the bottom edge. New particles start in
/// `[height, height + ENTRY_BAND)` so they enter the surface by drifting up.
pub const ENTRY_BAND: f32 = 20.0;

/// Sample a horizontal position in `[0, width)`.
///
/// A zero (or negative) width collapses to `0.0` rather than panicking on an
/// empty range, so degenerate surfaces stay safe.
#[inline]
pub fn sample_x<R: Rng>(rng: &mut R, width: f32) -> f32 {
    if width > 0.0 {
        rng.gen_range(0.0..width)
    } else {
        0.0
    }
}

/// Sample a fully initialized particle for a surface of the given size.
///
/// Position starts just below the bottom edge; every other attribute is drawn
/// from its documented range and never changes afterwards.
pub fn sample_particle<R: Rng>(rng: &mut R, width: f32, height: f32) -> Particle {
    Particle {
        position: Vec2::new(sample_x(rng, width), rng.gen_range(height..height + ENTRY_BAND)),
        size: rng.gen_range(SIZE_RANGE),
        speed: rng.gen_range(SPEED_RANGE),
        drift: rng.gen_range(DRIFT_RANGE),
        color: PALETTE[rng.gen_range(0..PALETTE.len())],
        opacity: rng.gen_range(OPACITY_RANGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_particle_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = sample_particle(&mut rng, 800.0, 600.0);
            assert!(p.position.x >= 0.0 && p.position.x < 800.0);
            assert!(p.position.y >= 600.0 && p.position.y < 620.0);
            assert!(p.size >= 1.0 && p.size < 4.0);
            assert!(p.speed >= 0.5 && p.speed < 1.5);
            assert!(p.drift >= -0.15 && p.drift < 0.15);
            assert!(p.opacity >= 0.3 && p.opacity < 0.8);
        }
    }

    #[test]
    fn test_sample_x_zero_width() {
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(sample_x(&mut rng, 0.0), 0.0);
        assert_eq!(sample_x(&mut rng, -5.0), 0.0);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut a = SmallRng::seed_from_u64(9);
        let mut b = SmallRng::seed_from_u64(9);
        for _ in 0..50 {
            let pa = sample_particle(&mut a, 640.0, 480.0);
            let pb = sample_particle(&mut b, 640.0, 480.0);
            assert_eq!(pa.position, pb.position);
            assert_eq!(pa.size, pb.size);
            assert_eq!(pa.color, pb.color);
        }
    }
}

//! The per-tick position step.
//!
//! Each tick moves every particle one constant step upward plus its
//! horizontal drift. A particle that climbs more than [`TOP_MARGIN`] above
//! the top edge is recycled in place: it drops back to just below the bottom
//! edge with a fresh horizontal position, keeping its size, speed, drift,
//! color and opacity. Horizontal positions are never corrected; a particle
//! may drift off the sides indefinitely, which is an accepted cosmetic
//! artifact.
//!
//! Motion is deliberately frame-coupled: one invocation applies exactly one
//! step with no delta-time scaling, so perceived speed follows the host tick
//! cadence.

use rand::Rng;

use crate::field::ParticleField;
use crate::spawn;

/// Distance above the top edge (and below the bottom edge) at which particles
/// leave and re-enter the surface.
pub const TOP_MARGIN: f32 = 10.0;

/// Advance every particle in `field` by one tick.
pub fn step<R: Rng>(field: &mut ParticleField, rng: &mut R) {
    let width = field.width();
    let height = field.height();

    for p in field.particles_mut() {
        p.position.y -= p.speed;
        p.position.x += p.drift;

        if p.position.y < -TOP_MARGIN {
            p.position.y = height + TOP_MARGIN;
            p.position.x = spawn::sample_x(rng, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_field(width: f32, height: f32) -> (ParticleField, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(11);
        let field = ParticleField::initialize(width, height, &mut rng);
        (field, rng)
    }

    #[test]
    fn test_step_moves_particles() {
        let (mut field, mut rng) = test_field(800.0, 600.0);
        let before: Vec<_> = field.particles().iter().map(|p| p.position).collect();
        step(&mut field, &mut rng);
        for (p, prev) in field.particles().iter().zip(&before) {
            assert_eq!(p.position.y, prev.y - p.speed);
            assert_eq!(p.position.x, prev.x + p.drift);
        }
    }

    #[test]
    fn test_recycle_at_top_edge() {
        let (mut field, mut rng) = test_field(800.0, 600.0);
        {
            let p = &mut field.particles_mut()[0];
            p.position.y = -5.0;
            p.speed = 10.0;
            p.drift = 0.0;
        }
        let before = field.particles()[0];

        step(&mut field, &mut rng);

        let after = field.particles()[0];
        assert_eq!(after.position.y, 610.0);
        assert!(after.position.x >= 0.0 && after.position.x < 800.0);
        // Everything but position survives the recycle.
        assert_eq!(after.size, before.size);
        assert_eq!(after.speed, before.speed);
        assert_eq!(after.drift, before.drift);
        assert_eq!(after.color, before.color);
        assert_eq!(after.opacity, before.opacity);
    }

    #[test]
    fn test_no_recycle_just_above_margin() {
        let (mut field, mut rng) = test_field(800.0, 600.0);
        {
            let p = &mut field.particles_mut()[0];
            p.position.y = -9.0;
            p.speed = 1.0;
        }
        step(&mut field, &mut rng);
        // y == -10 exactly; recycle requires y < -10.
        assert_eq!(field.particles()[0].position.y, -10.0);
    }

    #[test]
    fn test_positions_stay_finite_over_many_ticks() {
        let (mut field, mut rng) = test_field(800.0, 600.0);
        for _ in 0..10_000 {
            step(&mut field, &mut rng);
        }
        assert_eq!(field.len(), 50);
        for p in field.particles() {
            assert!(p.position.x.is_finite());
            assert!(p.position.y.is_finite());
        }
    }
}

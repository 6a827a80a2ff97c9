use crate::foundation::core::{LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::foundation::math::Rng64;
use std::f64::consts::TAU;

/// Number of wolves chasing the lead actor.
pub const PURSUER_COUNT: usize = 4;
/// Number of fireflies.
pub const PARTICLE_COUNT: usize = 36;

/// Source of uniform randomness for entity factories.
///
/// Injected so tests and golden checks can seed the scene deterministically.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform value in `[lo, hi)`.
    fn next_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl RandomSource for Rng64 {
    fn next_unit(&mut self) -> f64 {
        self.next_f64_01()
    }
}

/// A chasing wolf.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PursuingActor {
    /// Logical x position.
    pub x: f64,
    /// Logical y position (feet line).
    pub y: f64,
    /// Own animation phase; drives bobbing.
    pub phase: f64,
    /// Phase advance per second.
    pub stride_speed: f64,
}

/// A decorative firefly. Never mutated after creation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AmbientParticle {
    /// Rest x position.
    pub x: f64,
    /// Rest y position.
    pub y: f64,
    /// Core radius; the glow extends to 8x this.
    pub radius: f64,
    /// Drift rate.
    pub drift: f64,
    /// Phase offset for wobble and pulse.
    pub phase: f64,
}

/// Particle radius range, `[lo, hi)`.
pub const PARTICLE_RADIUS: (f64, f64) = (0.7, 2.3);
/// Particle drift range, `[lo, hi)`.
pub const PARTICLE_DRIFT: (f64, f64) = (0.12, 0.42);
/// Particles spawn in the upper 55% of the scene.
pub const PARTICLE_BAND: f64 = LOGICAL_HEIGHT * 0.55;

/// Create the pack of pursuers, staggered behind the left quarter of the scene.
pub fn create_pursuers(rng: &mut dyn RandomSource) -> Vec<PursuingActor> {
    (0..PURSUER_COUNT)
        .map(|index| {
            let i = index as f64;
            PursuingActor {
                x: LOGICAL_WIDTH * 0.25 - 180.0 - i * 110.0,
                y: LOGICAL_HEIGHT * 0.69 + i * 8.0,
                phase: rng.next_range(0.0, TAU),
                stride_speed: 7.0 + i * 0.6,
            }
        })
        .collect()
}

/// Create the firefly field.
pub fn create_particles(rng: &mut dyn RandomSource) -> Vec<AmbientParticle> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let x = rng.next_range(0.0, LOGICAL_WIDTH);
            let y = rng.next_range(0.0, PARTICLE_BAND);
            let radius = rng.next_range(PARTICLE_RADIUS.0, PARTICLE_RADIUS.1);
            let drift = rng.next_range(PARTICLE_DRIFT.0, PARTICLE_DRIFT.1);
            let phase = rng.next_range(0.0, TAU);
            AmbientParticle {
                x,
                y,
                radius,
                drift,
                phase,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/entities.rs"]
mod tests;

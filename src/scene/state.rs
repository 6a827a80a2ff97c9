use crate::foundation::core::{LOGICAL_HEIGHT, LOGICAL_WIDTH, Point};
use crate::foundation::math::Fnv1a64;
use crate::scene::clock::SceneClock;
use crate::scene::entities::{
    AmbientParticle, PursuingActor, RandomSource, create_particles, create_pursuers,
};

/// Fixed on-screen anchor of the lead actor (feet).
pub const LEAD_ANCHOR: Point = Point::new(LOGICAL_WIDTH * 0.42, LOGICAL_HEIGHT * 0.76);

/// Fraction of the remaining gap a pursuer closes per second.
pub const PURSUER_EASE_RATE: f64 = 2.4;

/// Target x for the pursuer at `index`: a fixed gap behind the lead actor.
pub fn pursuer_target_x(index: usize) -> f64 {
    LEAD_ANCHOR.x - 120.0 - index as f64 * 90.0
}

/// Everything a tick mutates, owned by the driver.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneState {
    /// Time scalars.
    pub clock: SceneClock,
    /// Wolves, in index order.
    pub pursuers: Vec<PursuingActor>,
    /// Fireflies.
    pub particles: Vec<AmbientParticle>,
}

impl SceneState {
    /// Fresh scene with entities drawn from `rng`.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let pursuers = create_pursuers(rng);
        let particles = create_particles(rng);
        Self {
            clock: SceneClock::default(),
            pursuers,
            particles,
        }
    }

    /// Advance by an already-clamped step `dt` (seconds).
    pub fn step(&mut self, dt: f64) {
        self.clock.advance(dt);
        let time = self.clock.time;
        for (index, p) in self.pursuers.iter_mut().enumerate() {
            p.phase += dt * p.stride_speed;
            p.x += (pursuer_target_x(index) - p.x) * dt * PURSUER_EASE_RATE;
            p.y = LEAD_ANCHOR.y + (time * 2.0 + index as f64).sin() * 6.0;
        }
    }

    /// Bit-exact fingerprint of the mutable state, for regression checks.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_f64(self.clock.time);
        h.write_f64(self.clock.stride);
        h.write_f64(self.clock.background_offset);
        h.write_f64(self.clock.canopy_offset);
        for p in &self.pursuers {
            h.write_f64(p.x);
            h.write_f64(p.y);
            h.write_f64(p.phase);
        }
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/state.rs"]
mod tests;

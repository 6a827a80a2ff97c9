/// Largest per-tick advance, in seconds.
///
/// Tab suspension or a slow frame yields one 45ms step instead of a visible jump.
pub const MAX_FRAME_DELTA_SECS: f64 = 0.045;

/// Stride phase advance per second.
pub const STRIDE_RATE: f64 = 12.0;
/// Background scroll speed in logical px/s.
pub const BACKGROUND_SCROLL_RATE: f64 = 240.0;
/// Canopy scroll speed in logical px/s.
pub const CANOPY_SCROLL_RATE: f64 = 96.0;

/// Convert a pair of frame timestamps (ms) into the effective step (s).
///
/// Backwards timestamps produce a zero step.
pub fn clamp_delta(previous_ms: f64, now_ms: f64) -> f64 {
    ((now_ms - previous_ms) / 1000.0).clamp(0.0, MAX_FRAME_DELTA_SECS)
}

/// Monotonic scene scalars. Only a remount resets them.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneClock {
    /// Elapsed scene time in seconds.
    pub time: f64,
    /// Stride phase of the lead actor.
    pub stride: f64,
    /// Horizontal scroll of the tree layers and ground.
    pub background_offset: f64,
    /// Horizontal scroll of the canopy.
    pub canopy_offset: f64,
}

impl SceneClock {
    /// Advance every scalar by an already-clamped step.
    pub fn advance(&mut self, dt: f64) {
        self.stride += dt * STRIDE_RATE;
        self.time += dt;
        self.background_offset += dt * BACKGROUND_SCROLL_RATE;
        self.canopy_offset += dt * CANOPY_SCROLL_RATE;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/clock.rs"]
mod tests;

use crate::draw::surface::DrawSurface;
use crate::driver::animation::AnimationDriver;
use crate::driver::platform::HeadlessPlatform;
use crate::foundation::core::Fps;

/// Delivers frames to a headless driver on a fixed virtual clock.
#[derive(Clone, Copy, Debug)]
pub struct FrameStepper {
    now_ms: f64,
    step_ms: f64,
}

impl FrameStepper {
    /// Start at `start_ms` and advance one frame of `fps` per delivery.
    pub fn new(start_ms: f64, fps: Fps) -> Self {
        Self {
            now_ms: start_ms,
            step_ms: fps.frame_duration_ms(),
        }
    }

    /// Start at `start_ms` and advance by an explicit step.
    pub fn with_step_ms(start_ms: f64, step_ms: f64) -> Self {
        Self { now_ms: start_ms, step_ms }
    }

    /// Virtual time of the last delivered frame.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advance the virtual clock without delivering a frame (e.g. a suspended tab).
    pub fn skip_ms(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    /// Fire the pending frame callback, if any. Returns `true` when a tick ran.
    pub fn step(
        &mut self,
        driver: &mut AnimationDriver<HeadlessPlatform>,
        surface: &mut dyn DrawSurface,
    ) -> bool {
        if driver.platform_mut().fire_frame().is_none() {
            return false;
        }
        self.now_ms += self.step_ms;
        driver.tick(self.now_ms, surface)
    }

    /// Deliver up to `frames` frames; stops early if the driver stops scheduling.
    pub fn run(
        &mut self,
        driver: &mut AnimationDriver<HeadlessPlatform>,
        surface: &mut dyn DrawSurface,
        frames: u64,
    ) -> u64 {
        let mut delivered = 0;
        while delivered < frames && self.step(driver, surface) {
            delivered += 1;
        }
        delivered
    }
}

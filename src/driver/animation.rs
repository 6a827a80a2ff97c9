use crate::draw::surface::DrawSurface;
use crate::driver::layout::CanvasLayout;
use crate::driver::platform::{FrameRequestId, ListenerId, Platform};
use crate::foundation::core::FrameIndex;
use crate::scene::clock::clamp_delta;
use crate::scene::composer::compose_frame;
use crate::scene::entities::RandomSource;
use crate::scene::state::SceneState;

/// Lifecycle of an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Frames are being scheduled.
    Running {
        /// The callback that will deliver the next tick.
        pending: FrameRequestId,
        /// Resize listener to detach on stop.
        resize: ListenerId,
    },
    /// Torn down; ticks are ignored.
    Stopped,
}

/// Owns the scene state and runs the per-frame loop on top of a [`Platform`].
///
/// Every tick happens inside a host frame callback and the next callback is only requested
/// once the current tick has finished drawing, so ticks never overlap.
pub struct AnimationDriver<P: Platform> {
    platform: P,
    state: DriverState,
    scene: SceneState,
    layout: CanvasLayout,
    previous_ms: f64,
    frames: u64,
}

impl<P: Platform> AnimationDriver<P> {
    /// Create the scene, size the canvas, hook resize and schedule the first frame.
    #[tracing::instrument(skip(platform, rng))]
    pub fn mount(mut platform: P, rng: &mut dyn RandomSource, now_ms: f64) -> Self {
        let scene = SceneState::new(rng);
        let layout = CanvasLayout::compute(platform.container_width(), platform.device_pixel_ratio());
        let resize = platform.add_resize_listener();
        let pending = platform.request_frame();
        tracing::debug!(
            width = layout.backing.width,
            height = layout.backing.height,
            dpr = layout.device_pixel_ratio,
            "scene mounted"
        );
        Self {
            platform,
            state: DriverState::Running { pending, resize },
            scene,
            layout,
            previous_ms: now_ms,
            frames: 0,
        }
    }

    /// Frame callback. Advances the scene to `now_ms`, draws it and schedules the next frame.
    ///
    /// Returns `false` without touching any state once the driver is stopped.
    pub fn tick(&mut self, now_ms: f64, surface: &mut dyn DrawSurface) -> bool {
        let DriverState::Running { resize, .. } = self.state else {
            return false;
        };

        let dt = clamp_delta(self.previous_ms, now_ms);
        self.previous_ms = now_ms;
        self.scene.step(dt);

        surface.begin_frame(self.layout.scale());
        compose_frame(surface, &self.scene);
        self.frames += 1;

        let pending = self.platform.request_frame();
        self.state = DriverState::Running { pending, resize };
        true
    }

    /// Resize notification: recompute the canvas layout. Frame state is left alone.
    ///
    /// The device pixel ratio is re-read as well, so moving to another display is picked up
    /// by the next resize.
    pub fn handle_resize(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let layout = CanvasLayout::compute(
            self.platform.container_width(),
            self.platform.device_pixel_ratio(),
        );
        if layout != self.layout {
            tracing::debug!(
                width = layout.backing.width,
                height = layout.backing.height,
                "canvas resized"
            );
        }
        self.layout = layout;
        true
    }

    /// Cancel the pending frame and detach the resize listener. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if let DriverState::Running { pending, resize } = self.state {
            self.platform.cancel_frame(pending);
            self.platform.remove_resize_listener(resize);
            self.state = DriverState::Stopped;
            tracing::debug!(frames = self.frames, "scene unmounted");
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// `true` until [`AnimationDriver::unmount`].
    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Scene state as of the last tick.
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Current canvas layout.
    pub fn layout(&self) -> CanvasLayout {
        self.layout
    }

    /// Number of ticks drawn so far.
    pub fn frame_index(&self) -> FrameIndex {
        FrameIndex(self.frames)
    }

    /// Borrow the host platform.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Mutably borrow the host platform.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

impl<P: Platform> Drop for AnimationDriver<P> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animation.rs"]
mod tests;

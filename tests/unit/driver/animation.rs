use super::*;
use crate::draw::surface::{NullSurface, RecordingSurface};
use crate::driver::platform::HeadlessPlatform;
use crate::foundation::math::Rng64;
use crate::scene::clock::MAX_FRAME_DELTA_SECS;

fn mounted() -> AnimationDriver<HeadlessPlatform> {
    AnimationDriver::mount(HeadlessPlatform::new(1280.0, 1.0), &mut Rng64::new(1), 0.0)
}

#[test]
fn mount_schedules_first_frame_and_hooks_resize() {
    let d = mounted();
    assert!(d.is_running());
    assert!(d.platform().pending_frame().is_some());
    assert_eq!(d.platform().resize_listeners(), 1);
    assert_eq!(d.layout().backing.width, 1280);
    assert_eq!(d.scene().clock, crate::scene::clock::SceneClock::default());
}

#[test]
fn tick_advances_clock_and_reschedules() {
    let mut d = mounted();
    d.platform_mut().fire_frame();
    assert!(d.tick(16.0, &mut NullSurface));
    assert!((d.scene().clock.time - 0.016).abs() < 1e-12);
    assert!(d.platform().pending_frame().is_some());
    assert_eq!(d.frame_index(), FrameIndex(1));
}

#[test]
fn long_gap_advances_by_clamp_only() {
    let mut d = mounted();
    d.tick(10_000.0, &mut NullSurface);
    assert_eq!(d.scene().clock.time, MAX_FRAME_DELTA_SECS);
}

#[test]
fn tick_draws_at_device_scale() {
    let mut d =
        AnimationDriver::mount(HeadlessPlatform::new(640.0, 2.0), &mut Rng64::new(1), 0.0);
    let mut surface = RecordingSurface::new();
    d.tick(16.0, &mut surface);
    assert_eq!(
        surface.ops().first(),
        Some(&crate::draw::surface::DrawOp::Begin { scale: 2.0 })
    );
}

#[test]
fn resize_updates_layout_but_not_frame_state() {
    let mut d = mounted();
    d.tick(16.0, &mut NullSurface);
    let before = d.scene().clone();
    assert!(d.platform_mut().resize(1920.0, 1.5));
    assert!(d.handle_resize());
    assert_eq!(d.scene(), &before);
    assert_eq!(d.layout().display_width, 1920.0);
    assert_eq!(d.layout().backing.width, 1920);
}

#[test]
fn unmount_cancels_pending_frame_and_listener() {
    let mut d = mounted();
    d.unmount();
    assert_eq!(d.state(), DriverState::Stopped);
    assert!(d.platform().pending_frame().is_none());
    assert_eq!(d.platform().resize_listeners(), 0);
    assert_eq!(d.platform().frames_cancelled(), 1);
}

#[test]
fn unmount_is_idempotent() {
    let mut d = mounted();
    d.unmount();
    d.unmount();
    assert_eq!(d.platform().frames_cancelled(), 1);
}

#[test]
fn ticks_after_unmount_are_ignored() {
    let mut d = mounted();
    d.tick(16.0, &mut NullSurface);
    d.unmount();
    let frozen = d.scene().clone();
    let requested = d.platform().frames_requested();
    for k in 2..100 {
        assert!(!d.tick(f64::from(k) * 16.0, &mut NullSurface));
    }
    assert_eq!(d.scene(), &frozen);
    assert_eq!(d.platform().frames_requested(), requested);
    assert!(!d.handle_resize());
}

use super::*;
use crate::foundation::core::{Canvas, Fps};

#[test]
fn premultiplied_glow_blends_over_configured_background() {
    let src = [255u8, 1, 2, 255, 100, 50, 0, 128];
    let mut dst = [0u8; 8];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [20, 40, 60, 255]).unwrap();
    assert_eq!(dst, [255, 1, 2, 255, 110, 70, 30, 255]);
}

#[test]
fn straight_alpha_frames_are_weighted_before_blending() {
    let src = [200u8, 100, 0, 64];
    let mut dst = [0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, false, [0, 0, 255, 255]).unwrap();
    assert_eq!(dst, [50, 25, 191, 255]);
}

#[test]
fn flatten_alpha_0_returns_bg() {
    let src = vec![0u8, 0, 0, 0];
    let mut dst = vec![0u8; 4];
    flatten_to_opaque_rgba8(&mut dst, &src, true, [10, 20, 30, 255]).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_to_opaque_rgba8(&mut dst, &[0u8; 4], true, [0, 0, 0, 255]).is_err());
}

#[test]
fn spawn_rejects_odd_dimensions_before_starting_ffmpeg() {
    let cfg = RecorderConfig {
        canvas: Canvas {
            width: 1701,
            height: 957,
        },
        fps: Fps { num: 60, den: 1 },
        bg_rgba: [0, 0, 0, 255],
    };
    assert!(matches!(
        FfmpegRecorder::spawn(&cfg),
        Err(ChaseError::Validation(_))
    ));
}

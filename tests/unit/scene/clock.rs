use super::*;

#[test]
fn deltas_at_or_above_threshold_clamp_to_threshold() {
    for raw_ms in [45.0, 45.000_1, 46.0, 100.0, 1_000.0, 86_400_000.0] {
        assert_eq!(clamp_delta(0.0, raw_ms), MAX_FRAME_DELTA_SECS, "raw {raw_ms}ms");
    }
}

#[test]
fn small_deltas_pass_through() {
    let dt = clamp_delta(1_000.0, 1_016.0);
    assert!((dt - 0.016).abs() < 1e-12);
}

#[test]
fn clamp_is_monotonic_in_raw_delta() {
    let mut last = 0.0;
    for ms in 0..200 {
        let dt = clamp_delta(0.0, f64::from(ms));
        assert!(dt >= last);
        last = dt;
    }
}

#[test]
fn backwards_timestamps_do_not_rewind() {
    assert_eq!(clamp_delta(500.0, 400.0), 0.0);
}

#[test]
fn clamped_advance_is_independent_of_raw_delta() {
    let mut a = SceneClock::default();
    let mut b = SceneClock::default();
    a.advance(clamp_delta(0.0, 60.0));
    b.advance(clamp_delta(0.0, 5_000.0));
    assert_eq!(a, b);
    assert!((a.stride - 0.54).abs() < 1e-12);
    assert!((a.background_offset - 10.8).abs() < 1e-12);
    assert!((a.canopy_offset - 4.32).abs() < 1e-12);
}

use super::*;
use crate::foundation::math::Rng64;

const DT: f64 = 1.0 / 60.0;

#[test]
fn pursuer_gap_shrinks_geometrically() {
    let mut state = SceneState::new(&mut Rng64::new(3));
    let initial: Vec<f64> = state.pursuers.iter().map(|p| p.x).collect();
    let ratio = 1.0 - DT * PURSUER_EASE_RATE;

    for n in 1..=240 {
        state.step(DT);
        for (i, p) in state.pursuers.iter().enumerate() {
            let target = pursuer_target_x(i);
            let expected = (initial[i] - target) * ratio.powi(n);
            let gap = p.x - target;
            assert!(
                (gap - expected).abs() < 1e-6,
                "pursuer {i} tick {n}: gap {gap} expected {expected}"
            );
        }
    }
}

#[test]
fn pursuers_approach_without_overshoot() {
    let mut state = SceneState::new(&mut Rng64::new(4));
    let mut last_gap: Vec<f64> = state
        .pursuers
        .iter()
        .enumerate()
        .map(|(i, p)| (pursuer_target_x(i) - p.x).abs())
        .collect();
    for _ in 0..600 {
        state.step(0.045);
        for (i, p) in state.pursuers.iter().enumerate() {
            let gap = pursuer_target_x(i) - p.x;
            assert!(gap >= 0.0, "started behind the target, must stay behind");
            assert!(gap <= last_gap[i]);
            last_gap[i] = gap;
        }
    }
    assert!(last_gap.iter().all(|g| *g < 1e-3));
}

#[test]
fn pursuer_vertical_bob_tracks_clock() {
    let mut state = SceneState::new(&mut Rng64::new(5));
    state.step(0.03);
    for (i, p) in state.pursuers.iter().enumerate() {
        let expected = LEAD_ANCHOR.y + (0.06 + i as f64).sin() * 6.0;
        assert!((p.y - expected).abs() < 1e-9);
    }
}

#[test]
fn phase_advances_by_own_stride_speed() {
    let mut state = SceneState::new(&mut Rng64::new(6));
    let before: Vec<f64> = state.pursuers.iter().map(|p| p.phase).collect();
    state.step(0.02);
    for (i, p) in state.pursuers.iter().enumerate() {
        assert!((p.phase - before[i] - 0.02 * p.stride_speed).abs() < 1e-12);
    }
}

#[test]
fn particles_are_not_mutated_by_steps() {
    let mut state = SceneState::new(&mut Rng64::new(8));
    let particles = state.particles.clone();
    for _ in 0..30 {
        state.step(DT);
    }
    assert_eq!(state.particles, particles);
}

#[test]
fn fingerprint_tracks_state_changes() {
    let a = SceneState::new(&mut Rng64::new(9));
    let mut b = a.clone();
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.step(DT);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

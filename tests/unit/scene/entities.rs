use super::*;

struct Constant(f64);

impl RandomSource for Constant {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn factories_produce_fixed_counts() {
    let mut rng = Rng64::new(1);
    assert_eq!(create_pursuers(&mut rng).len(), PURSUER_COUNT);
    assert_eq!(create_particles(&mut rng).len(), PARTICLE_COUNT);
}

#[test]
fn pursuers_are_staggered_by_index() {
    let pursuers = create_pursuers(&mut Constant(0.5));
    for (i, p) in pursuers.iter().enumerate() {
        let i = i as f64;
        assert_eq!(p.x, 320.0 - 180.0 - 110.0 * i);
        assert!((p.y - (496.8 + 8.0 * i)).abs() < 1e-9);
        assert!((p.stride_speed - (7.0 + 0.6 * i)).abs() < 1e-12);
        assert!((p.phase - std::f64::consts::PI).abs() < 1e-12);
    }
}

#[test]
fn particle_attributes_stay_within_ranges() {
    let mut rng = Rng64::new(99);
    for _ in 0..50 {
        for p in create_particles(&mut rng) {
            assert!((0.0..LOGICAL_WIDTH).contains(&p.x));
            assert!((0.0..PARTICLE_BAND).contains(&p.y));
            assert!((PARTICLE_RADIUS.0..PARTICLE_RADIUS.1).contains(&p.radius));
            assert!((PARTICLE_DRIFT.0..PARTICLE_DRIFT.1).contains(&p.drift));
            assert!((0.0..std::f64::consts::TAU).contains(&p.phase));
        }
    }
}

#[test]
fn range_extremes_map_to_documented_bounds() {
    let low = create_particles(&mut Constant(0.0));
    assert_eq!(low[0].radius, 0.7);
    assert_eq!(low[0].drift, 0.12);
    let high = create_particles(&mut Constant(0.999_999));
    assert!(high[0].radius < 2.3 && high[0].radius > 2.29);
    assert!(high[0].drift < 0.42 && high[0].drift > 0.41);
}

#[test]
fn same_seed_yields_same_entities() {
    let a = create_particles(&mut Rng64::new(5));
    let b = create_particles(&mut Rng64::new(5));
    assert_eq!(a, b);
}

use super::*;
use crate::draw::surface::{DrawOp, RecordingSurface};
use crate::foundation::math::Rng64;

fn scene() -> SceneState {
    let mut s = SceneState::new(&mut Rng64::new(11));
    s.step(0.03);
    s
}

#[test]
fn stages_are_emitted_in_painter_order() {
    let mut surface = RecordingSurface::new();
    surface.begin_frame(1.0);
    compose_frame(&mut surface, &scene());
    assert_eq!(surface.stages(), DRAW_ORDER.to_vec());
}

#[test]
fn draw_order_starts_with_sky_and_ends_with_particles() {
    assert_eq!(DRAW_ORDER.first(), Some(&DrawStage::Sky));
    assert_eq!(DRAW_ORDER.last(), Some(&DrawStage::Particles));
    let pos = |s| DRAW_ORDER.iter().position(|x| *x == s).unwrap();
    assert!(pos(DrawStage::Ground) < pos(DrawStage::LeadActor));
    assert!(pos(DrawStage::MotionTrails) < pos(DrawStage::LeadActor));
    assert!(pos(DrawStage::LeadActor) < pos(DrawStage::Pursuers));
}

#[test]
fn every_stage_draws_something() {
    let mut surface = RecordingSurface::new();
    surface.begin_frame(2.0);
    compose_frame(&mut surface, &scene());
    for stage in DRAW_ORDER {
        assert!(
            !surface.ops_in_stage(stage).is_empty(),
            "stage {} drew nothing",
            stage.name()
        );
    }
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn pursuers_stage_draws_each_wolf_at_its_position() {
    let scene = scene();
    let mut surface = RecordingSurface::new();
    surface.begin_frame(1.0);
    compose_frame(&mut surface, &scene);
    let ops = surface.ops_in_stage(DrawStage::Pursuers);
    // 6 fills + 4 leg strokes per wolf
    assert_eq!(ops.len(), scene.pursuers.len() * 10);
    let DrawOp::Fill { transform, .. } = ops[0] else {
        panic!("wolf body is a fill");
    };
    assert_eq!(transform.translation().x, scene.pursuers[0].x);
}

#[test]
fn base_scale_applies_to_every_op() {
    let mut surface = RecordingSurface::new();
    surface.begin_frame(2.0);
    compose_frame(&mut surface, &scene());
    for op in surface.ops_in_stage(DrawStage::Sky) {
        let DrawOp::Fill { transform, .. } = op else {
            panic!("sky is a fill");
        };
        assert_eq!(transform.as_coeffs()[0], 2.0);
        assert_eq!(transform.as_coeffs()[3], 2.0);
    }
}

#[test]
fn stage_names_are_unique() {
    let mut names: Vec<_> = DRAW_ORDER.iter().map(|s| s.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), DRAW_ORDER.len());
}

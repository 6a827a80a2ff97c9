use super::*;
use crate::draw::surface::{DrawOp, LineCap, RecordingSurface};
use crate::foundation::core::Affine;
use kurbo::{PathEl, Shape};

fn recording() -> RecordingSurface {
    let mut s = RecordingSurface::new();
    s.begin_frame(1.0);
    s
}

fn fills(s: &RecordingSurface) -> usize {
    s.ops()
        .iter()
        .filter(|op| matches!(op, DrawOp::Fill { .. }))
        .count()
}

fn strokes(s: &RecordingSurface) -> Vec<(Affine, crate::draw::surface::StrokeStyle)> {
    s.ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Stroke {
                transform, style, ..
            } => Some((*transform, *style)),
            _ => None,
        })
        .collect()
}

#[test]
fn rounded_rect_clamps_radius_to_half_the_short_side() {
    let p = rounded_rect_path(0.0, 0.0, 20.0, 8.0, 50.0);
    let bbox = p.bounding_box();
    assert_eq!(bbox.x0, 0.0);
    assert_eq!(bbox.x1, 20.0);
    assert_eq!(bbox.y1, 8.0);
    let PathEl::MoveTo(start) = p.elements()[0] else {
        panic!("path must start with move_to");
    };
    assert_eq!(start.x, 4.0);
}

#[test]
fn rounded_rect_negative_radius_is_square() {
    let p = rounded_rect_path(1.0, 2.0, 10.0, 10.0, -3.0);
    let PathEl::MoveTo(start) = p.elements()[0] else {
        panic!("path must start with move_to");
    };
    assert_eq!((start.x, start.y), (1.0, 2.0));
    assert!(matches!(p.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn tree_layer_draws_trunk_and_crown_per_slot() {
    let mut s = recording();
    draw_tree_layer(&mut s, 0.0, &TREE_LAYERS[0]);
    // Slots run from -1 through count inclusive.
    assert_eq!(fills(&s), 2 * (TREE_LAYERS[0].count as usize + 2));
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn tree_layer_scroll_wraps_at_scene_width() {
    let mut a = recording();
    draw_tree_layer(&mut a, 100.0, &TREE_LAYERS[1]);
    let mut b = recording();
    draw_tree_layer(&mut b, 100.0 + LOGICAL_WIDTH, &TREE_LAYERS[1]);
    assert_eq!(a.ops(), b.ops());
}

#[test]
fn tree_layers_speed_up_toward_the_viewer() {
    for pair in TREE_LAYERS.windows(2) {
        assert!(pair[0].parallax < pair[1].parallax);
        assert!(pair[0].base_height < pair[1].base_height);
    }
}

#[test]
fn ground_scroll_wraps_at_strip_width_for_translation() {
    let mut s = recording();
    draw_ground(&mut s, GROUND_STRIP_WIDTH * 3.0 + 10.0);
    let DrawOp::Fill { transform, .. } = &s.ops()[2] else {
        panic!("expected ridge fill");
    };
    assert_eq!(transform.translation().x, -10.0);
    let strips = (LOGICAL_WIDTH / GROUND_STRIP_WIDTH).ceil() as usize + 2;
    assert_eq!(fills(&s), 1 + strips);
}

#[test]
fn ridge_height_stays_within_band() {
    for i in 0..12 {
        for k in 0..50 {
            let h = ridge_height(f64::from(k) * 37.0, i);
            assert!((2.0..=46.0).contains(&h));
        }
    }
}

#[test]
fn humanoid_is_translated_to_anchor_minus_bob() {
    let mut s = recording();
    let stride = 1.3;
    draw_humanoid(&mut s, Point::new(500.0, 600.0), stride);
    let DrawOp::Fill { transform, .. } = &s.ops()[1] else {
        panic!("expected head fill");
    };
    let t = transform.translation();
    assert_eq!(t.x, 500.0);
    assert!((t.y - (600.0 - humanoid_bob(stride))).abs() < 1e-9);
    // two arms + two legs, all round-capped
    let st = strokes(&s);
    assert_eq!(st.len(), 4);
    assert!(st.iter().all(|(_, style)| style.cap == LineCap::Round));
    assert_eq!(s.save_depth(), 0);
}

#[test]
fn quadruped_bob_uses_own_phase_and_index() {
    let actor = PursuingActor {
        x: 100.0,
        y: 500.0,
        phase: 2.0,
        stride_speed: 7.0,
    };
    let mut s = recording();
    draw_quadruped(&mut s, &actor, 0.0, 3);
    let st = strokes(&s);
    assert_eq!(st.len(), 4);
    let t = st[0].0.translation();
    assert_eq!(t.x, 100.0);
    assert!((t.y - (500.0 + quadruped_bob(2.0, 3))).abs() < 1e-9);
}

#[test]
fn particle_pulse_stays_in_bounds() {
    let p = AmbientParticle {
        x: 10.0,
        y: 20.0,
        radius: 1.0,
        drift: 0.2,
        phase: 0.3,
    };
    for k in 0..500 {
        let s = particle_sample(&p, 7, f64::from(k) * 0.05);
        assert!(s.pulse >= 0.6 / 2.6 - 1e-12 && s.pulse <= 1.0 + 1e-12);
        assert!((s.center.x - 10.0).abs() <= 12.0 + 1e-9);
        assert!((s.center.y - 20.0).abs() <= 6.0 + 1e-9);
    }
}

#[test]
fn particles_render_as_radial_glows() {
    let particles = vec![
        AmbientParticle {
            x: 10.0,
            y: 20.0,
            radius: 1.5,
            drift: 0.2,
            phase: 0.0,
        };
        3
    ];
    let mut s = recording();
    draw_particles(&mut s, &particles, 1.0);
    let glows: Vec<_> = s
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Fill {
                paint: Paint::Radial { radius, stops, .. },
                ..
            } => Some((*radius, stops.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(glows.len(), 3);
    for (radius, stops) in glows {
        assert_eq!(radius, 9.0);
        assert_eq!(stops.last().map(|s| s.1.a), Some(0.0));
    }
}

#[test]
fn motion_trails_are_faint_round_strokes() {
    let mut s = recording();
    draw_motion_trails(&mut s, Point::new(537.6, 547.2), 0.0);
    let trails: Vec<_> = s
        .ops()
        .iter()
        .filter_map(|op| match op {
            DrawOp::Stroke { style, paint, .. } => Some((*style, paint.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(trails.len(), 3);
    for (style, paint) in trails {
        assert_eq!(style.cap, LineCap::Round);
        assert_eq!(style.width, 4.0);
        let Paint::Solid(c) = paint else {
            panic!("trails use a flat color");
        };
        assert!((c.a - 0.096).abs() < 1e-6);
    }
}

//! Stateless shape helpers. Every function draws in the 1280x720 logical space and leaves the
//! surface transform as it found it.

use crate::draw::surface::{DrawSurface, Paint, StrokeStyle};
use crate::foundation::core::{BezPath, Color, LOGICAL_HEIGHT, LOGICAL_WIDTH, Point, Rect};
use crate::scene::entities::{AmbientParticle, PursuingActor};
use kurbo::{Circle, Ellipse, Shape};

const TOLERANCE: f64 = 0.1;

/// Path for a rectangle with quadratic corners. `radius` is clamped to `[0, min(w, h) / 2]`.
pub fn rounded_rect_path(x: f64, y: f64, width: f64, height: f64, radius: f64) -> BezPath {
    let r = radius.min(width.min(height) / 2.0).max(0.0);
    let mut p = BezPath::new();
    p.move_to((x + r, y));
    p.line_to((x + width - r, y));
    p.quad_to((x + width, y), (x + width, y + r));
    p.line_to((x + width, y + height - r));
    p.quad_to((x + width, y + height), (x + width - r, y + height));
    p.line_to((x + r, y + height));
    p.quad_to((x, y + height), (x, y + height - r));
    p.line_to((x, y + r));
    p.quad_to((x, y), (x + r, y));
    p.close_path();
    p
}

/// Fill a rounded rectangle.
pub fn fill_rounded_rect(
    surface: &mut dyn DrawSurface,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    radius: f64,
    paint: &Paint,
) {
    surface.fill_path(&rounded_rect_path(x, y, width, height, radius), paint);
}

fn polygon(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        p.move_to(*first);
        for pt in rest {
            p.line_to(*pt);
        }
        p.close_path();
    }
    p
}

fn segment(from: (f64, f64), to: (f64, f64)) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(from);
    p.line_to(to);
    p
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> BezPath {
    Ellipse::new((cx, cy), (rx, ry), 0.0).to_path(TOLERANCE)
}

fn circle(cx: f64, cy: f64, r: f64) -> BezPath {
    Circle::new((cx, cy), r).to_path(TOLERANCE)
}

fn solid(hex: u32) -> Paint {
    Paint::Solid(Color::hex(hex))
}

/// Full-scene vertical sky gradient.
pub fn draw_sky(surface: &mut dyn DrawSurface) {
    let paint = Paint::Linear {
        start: Point::new(0.0, 0.0),
        end: Point::new(0.0, LOGICAL_HEIGHT),
        stops: vec![
            (0.0, Color::hex(0x0b2823)),
            (0.5, Color::hex(0x04130f)),
            (1.0, Color::hex(0x020807)),
        ],
    };
    surface.fill_rect(Rect::new(0.0, 0.0, LOGICAL_WIDTH, LOGICAL_HEIGHT), &paint);
}

/// Faint teal haze over the lower middle of the scene.
pub fn draw_mist(surface: &mut dyn DrawSurface) {
    let paint = Paint::Linear {
        start: Point::new(0.0, LOGICAL_HEIGHT * 0.55),
        end: Point::new(0.0, LOGICAL_HEIGHT * 0.85),
        stops: vec![
            (0.0, Color::rgba(73, 196, 165, 0.08)),
            (1.0, Color::rgba(6, 31, 24, 0.05)),
        ],
    };
    let top = LOGICAL_HEIGHT * 0.45;
    surface.fill_rect(
        Rect::new(0.0, top, LOGICAL_WIDTH, top + LOGICAL_HEIGHT * 0.4),
        &paint,
    );
}

/// Look of one parallax tree band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeLayerStyle {
    /// Multiplier applied to the background offset.
    pub parallax: f64,
    /// Crown color.
    pub foliage: Color,
    /// Trunk color.
    pub trunk: Color,
    /// Crown width scale.
    pub scale: f64,
    /// Trees per scene width.
    pub count: i32,
    /// Relative size jitter.
    pub variance: f64,
    /// Mean tree height.
    pub base_height: f64,
}

/// Tree bands, back to front: faster scroll and more saturated green toward the viewer.
pub const TREE_LAYERS: [TreeLayerStyle; 3] = [
    TreeLayerStyle {
        parallax: 0.25,
        foliage: Color::hex(0x0a3027),
        trunk: Color::hex(0x061914),
        scale: 1.35,
        count: 18,
        variance: 0.45,
        base_height: 190.0,
    },
    TreeLayerStyle {
        parallax: 0.45,
        foliage: Color::hex(0x0f3d32),
        trunk: Color::hex(0x07241d),
        scale: 1.15,
        count: 20,
        variance: 0.4,
        base_height: 240.0,
    },
    TreeLayerStyle {
        parallax: 0.75,
        foliage: Color::hex(0x124e3f),
        trunk: Color::hex(0x0a2d25),
        scale: 1.0,
        count: 22,
        variance: 0.32,
        base_height: 280.0,
    },
];

/// One band of trunks and elliptical crowns, scrolled by `offset` (already parallax-scaled).
pub fn draw_tree_layer(surface: &mut dyn DrawSurface, offset: f64, style: &TreeLayerStyle) {
    surface.save();
    surface.translate(-(offset % LOGICAL_WIDTH), 0.0);
    let trunk = Paint::Solid(style.trunk);
    let foliage = Paint::Solid(style.foliage);
    for i in -1..=style.count {
        let fi = f64::from(i);
        let x = fi * LOGICAL_WIDTH / f64::from(style.count);
        let width = 80.0 * style.scale * (1.0 + (fi * 12.9898).sin() * style.variance);
        let height = style.base_height * (1.0 + (fi * 8.233).cos() * style.variance);

        surface.fill_rect(
            Rect::new(
                x + width * 0.4,
                LOGICAL_HEIGHT - height,
                x + width * 0.58,
                LOGICAL_HEIGHT,
            ),
            &trunk,
        );
        surface.fill_path(
            &ellipse(
                x + width * 0.5,
                LOGICAL_HEIGHT - height - width * 0.1,
                width,
                height * 0.65,
            ),
            &foliage,
        );
    }
    surface.restore();
}

/// Dark canopy humps along the top of the scene.
pub fn draw_canopy(surface: &mut dyn DrawSurface, offset: f64) {
    surface.save();
    surface.translate(-(offset % LOGICAL_WIDTH), 0.0);
    let paint = solid(0x081f18);
    let (w, h) = (LOGICAL_WIDTH, LOGICAL_HEIGHT);
    for i in -1..8 {
        let x = f64::from(i) * (w / 6.0);
        let mut p = BezPath::new();
        p.move_to((x, h * 0.25));
        p.curve_to(
            (x + w * 0.15, h * 0.05),
            (x + w * 0.35, h * 0.05),
            (x + w * 0.5, h * 0.25),
        );
        p.line_to((x + w * 0.5, h * 0.3));
        p.line_to((x, h * 0.3));
        p.close_path();
        surface.fill_path(&p, &paint);
    }
    surface.restore();
}

/// Width of one ground ridge strip.
pub const GROUND_STRIP_WIDTH: f64 = 160.0;

/// Ridge height of strip `i` at the given ground offset.
pub fn ridge_height(offset: f64, i: usize) -> f64 {
    ((offset / 100.0 + i as f64) * 0.9).sin() * 22.0 + 24.0
}

/// Ground band with alternating shaded ridges, scrolled by `offset`.
pub fn draw_ground(surface: &mut dyn DrawSurface, offset: f64) {
    surface.save();
    let ground_height = LOGICAL_HEIGHT * 0.3;
    let base_y = LOGICAL_HEIGHT - ground_height;

    let gradient = Paint::Linear {
        start: Point::new(0.0, base_y),
        end: Point::new(0.0, LOGICAL_HEIGHT),
        stops: vec![(0.0, Color::hex(0x0b261f)), (1.0, Color::hex(0x040e0c))],
    };
    surface.fill_rect(
        Rect::new(0.0, base_y, LOGICAL_WIDTH, LOGICAL_HEIGHT),
        &gradient,
    );

    let light = Paint::Solid(Color::rgba(12, 57, 44, 0.45));
    let dark = Paint::Solid(Color::rgba(7, 29, 24, 0.35));
    let strips = (LOGICAL_WIDTH / GROUND_STRIP_WIDTH).ceil() as usize + 2;
    surface.translate(-(offset % GROUND_STRIP_WIDTH), 0.0);
    for i in 0..strips {
        let x = i as f64 * GROUND_STRIP_WIDTH;
        let ridge = ridge_height(offset, i);
        let mut p = BezPath::new();
        p.move_to((x, base_y + ridge));
        p.curve_to(
            (x + GROUND_STRIP_WIDTH * 0.25, base_y + ridge - 15.0),
            (x + GROUND_STRIP_WIDTH * 0.75, base_y + ridge + 12.0),
            (x + GROUND_STRIP_WIDTH, base_y + ridge),
        );
        p.line_to((x + GROUND_STRIP_WIDTH, LOGICAL_HEIGHT));
        p.line_to((x, LOGICAL_HEIGHT));
        p.close_path();
        surface.fill_path(&p, if i % 2 == 0 { &light } else { &dark });
    }
    surface.restore();
}

/// Vertical lift of the running boy for a stride phase.
pub fn humanoid_bob(stride: f64) -> f64 {
    (stride * 0.8).sin() * 8.0
}

/// The fleeing boy, feet at `anchor`.
pub fn draw_humanoid(surface: &mut dyn DrawSurface, anchor: Point, stride: f64) {
    surface.save();
    surface.translate(anchor.x, anchor.y);
    surface.translate(0.0, -humanoid_bob(stride));

    let skin = solid(0xf7d3b7);
    surface.fill_path(&circle(0.0, -96.0, 18.0), &skin);

    surface.fill_path(
        &polygon(&[(-18.0, -112.0), (18.0, -112.0), (12.0, -98.0), (-10.0, -92.0)]),
        &solid(0x1b1d24),
    );

    fill_rounded_rect(surface, -16.0, -94.0, 32.0, 55.0, 12.0, &solid(0x1f6feb));

    let swing = stride.sin();
    let arm = StrokeStyle::new(6.0).round();
    let mut left = BezPath::new();
    left.move_to((-16.0, -72.0));
    left.quad_to((-34.0, -64.0), (-28.0, -40.0 - swing * 12.0));
    surface.stroke_path(&left, arm, &skin);
    let mut right = BezPath::new();
    right.move_to((16.0, -72.0));
    right.quad_to((30.0, -62.0), (34.0, -36.0 + swing * 12.0));
    surface.stroke_path(&right, arm, &skin);

    fill_rounded_rect(surface, -16.0, -44.0, 32.0, 44.0, 10.0, &solid(0x20232f));

    let leg = StrokeStyle::new(7.0).round();
    let legs = solid(0x0f1218);
    let leg_swing = swing * 16.0;
    surface.stroke_path(&segment((-8.0, -4.0), (-18.0 - leg_swing, 44.0)), leg, &legs);
    surface.stroke_path(&segment((8.0, -4.0), (18.0 + leg_swing, 44.0)), leg, &legs);

    let shoes = solid(0x0b5b42);
    fill_rounded_rect(surface, -12.0, 44.0, 20.0, 8.0, 4.0, &shoes);
    fill_rounded_rect(surface, -5.0, 44.0, 20.0, 8.0, 4.0, &shoes);

    surface.restore();
}

/// Vertical offset of a wolf from its own phase.
pub fn quadruped_bob(phase: f64, index: usize) -> f64 {
    (phase * 0.9 + index as f64).sin() * 6.0
}

/// A wolf at the actor's position; legs swing with `stride` offset by `index`.
pub fn draw_quadruped(
    surface: &mut dyn DrawSurface,
    actor: &PursuingActor,
    stride: f64,
    index: usize,
) {
    surface.save();
    surface.translate(actor.x, actor.y);
    surface.translate(0.0, quadruped_bob(actor.phase, index));

    let body = solid(0x3d434f);
    surface.fill_path(&ellipse(0.0, -26.0, 48.0, 22.0), &body);
    surface.fill_path(&ellipse(42.0, -40.0, 20.0, 18.0), &body);
    surface.fill_path(
        &polygon(&[(56.0, -38.0), (70.0, -52.0), (50.0, -46.0)]),
        &solid(0x252930),
    );
    surface.fill_path(
        &polygon(&[(58.0, -36.0), (74.0, -32.0), (56.0, -20.0)]),
        &body,
    );
    surface.fill_path(&circle(52.0, -40.0, 4.0), &solid(0xd9e4ff));
    surface.fill_path(&circle(53.0, -40.0, 2.3), &solid(0x11151a));

    let leg = StrokeStyle::new(6.0);
    let legs = solid(0x242831);
    let step = (stride + index as f64).sin() * 12.0;
    for (hip, foot) in [
        (-24.0, -36.0 - step),
        (-4.0, -12.0 + step),
        (18.0, 8.0 + step),
        (36.0, 28.0 - step),
    ] {
        surface.stroke_path(&segment((hip, -10.0), (foot, 34.0)), leg, &legs);
    }

    surface.restore();
}

/// Where a firefly is and how bright it glows at time `t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleSample {
    /// Glow center.
    pub center: Point,
    /// Opacity multiplier in `[0.23, 1]`.
    pub pulse: f64,
}

/// Derive the wobbled position and pulse of particle `index`.
pub fn particle_sample(particle: &AmbientParticle, index: usize, t: f64) -> ParticleSample {
    let wobble = (particle.phase + t * (0.6 + index as f64 * 0.02)).sin();
    let x = particle.x + wobble * 12.0;
    let y = particle.y + (particle.phase + t * 0.4).cos() * 6.0;
    let pulse = ((particle.phase * 2.0 + t * 3.0).sin() + 1.6) / 2.6;
    ParticleSample {
        center: Point::new(x, y),
        pulse,
    }
}

/// Draw every firefly as a pulsing radial glow.
pub fn draw_particles(surface: &mut dyn DrawSurface, particles: &[AmbientParticle], t: f64) {
    surface.save();
    for (index, p) in particles.iter().enumerate() {
        let s = particle_sample(p, index, t);
        let glow = Paint::Radial {
            center: s.center,
            radius: p.radius * 6.0,
            stops: vec![
                (0.0, Color::rgba(24, 255, 182, (0.78 * s.pulse) as f32)),
                (1.0, Color::rgba(24, 255, 182, 0.0)),
            ],
        };
        surface.fill_path(&circle(s.center.x, s.center.y, p.radius * 8.0), &glow);
    }
    surface.restore();
}

/// Trail stroke color before the layer opacity is applied.
pub const TRAIL_COLOR: Color = Color::rgba(46, 217, 126, 0.6);
/// Layer opacity applied on top of [`TRAIL_COLOR`].
pub const TRAIL_LAYER_ALPHA: f64 = 0.16;

/// Three speed lines streaming behind the lead actor.
pub fn draw_motion_trails(surface: &mut dyn DrawSurface, anchor: Point, stride: f64) {
    surface.save();
    let paint = Paint::Solid(TRAIL_COLOR.fade(TRAIL_LAYER_ALPHA));
    let style = StrokeStyle::new(4.0).round();
    for i in 0..3 {
        let fi = f64::from(i);
        let offset = stride * 0.4 + fi * 0.7;
        surface.stroke_path(
            &segment(
                (anchor.x - 20.0 - fi * 20.0, anchor.y - 18.0 + offset.sin() * 6.0),
                (anchor.x - 80.0 - fi * 30.0, anchor.y + 12.0 + offset.cos() * 6.0),
            ),
            style,
            &paint,
        );
    }
    surface.restore();
}

#[cfg(test)]
#[path = "../../tests/unit/draw/primitives.rs"]
mod tests;

use crate::foundation::core::{Affine, BezPath, Color, Point, Rect};
use crate::scene::composer::DrawStage;
use kurbo::Shape;

/// A gradient color stop: offset in `[0, 1]` and color.
pub type GradientStop = (f32, Color);

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// Flat color.
    Solid(Color),
    /// Linear gradient between two points in the current user space.
    Linear {
        /// Gradient start.
        start: Point,
        /// Gradient end.
        end: Point,
        /// Ordered color stops.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient from `center` out to `radius`.
    Radial {
        /// Gradient center.
        center: Point,
        /// Outer radius.
        radius: f64,
        /// Ordered color stops.
        stops: Vec<GradientStop>,
    },
}

/// Line cap style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineCap {
    /// Square end flush with the path end.
    Butt,
    /// Semicircular end.
    Round,
}

/// Stroke parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Line width in user units.
    pub width: f64,
    /// End caps.
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Butt-capped stroke of the given width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
        }
    }

    /// Same stroke with round caps.
    pub fn round(self) -> Self {
        Self {
            cap: LineCap::Round,
            ..self
        }
    }
}

/// Drawing target for the scene, modelled on an immediate-mode 2D context.
///
/// Transforms compose like a canvas context: [`DrawSurface::transform`] right-multiplies the
/// current matrix, [`DrawSurface::save`]/[`DrawSurface::restore`] push and pop it.
pub trait DrawSurface {
    /// Clear the whole target and reset the transform to a uniform `scale`.
    fn begin_frame(&mut self, scale: f64);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop the last saved transform. Unbalanced calls are ignored.
    fn restore(&mut self);
    /// Right-multiply the current transform.
    fn transform(&mut self, affine: Affine);
    /// Fill a path with `paint`.
    fn fill_path(&mut self, path: &BezPath, paint: &Paint);
    /// Stroke a path with `paint`.
    fn stroke_path(&mut self, path: &BezPath, style: StrokeStyle, paint: &Paint);
    /// Marks the start of a draw stage. Raster surfaces ignore it.
    fn mark_stage(&mut self, _stage: DrawStage) {}

    /// Translate the current transform.
    fn translate(&mut self, dx: f64, dy: f64) {
        self.transform(Affine::translate((dx, dy)));
    }

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.fill_path(&rect.to_path(0.1), paint);
    }
}

/// Transform stack shared by the surface implementations.
#[derive(Clone, Debug)]
pub(crate) struct TransformStack {
    current: Affine,
    saved: Vec<Affine>,
}

impl TransformStack {
    pub(crate) fn new() -> Self {
        Self {
            current: Affine::IDENTITY,
            saved: Vec::new(),
        }
    }

    pub(crate) fn reset(&mut self, base: Affine) {
        self.current = base;
        self.saved.clear();
    }

    pub(crate) fn current(&self) -> Affine {
        self.current
    }

    pub(crate) fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub(crate) fn restore(&mut self) {
        if let Some(t) = self.saved.pop() {
            self.current = t;
        }
    }

    pub(crate) fn apply(&mut self, affine: Affine) {
        self.current = self.current * affine;
    }

    pub(crate) fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Frame start with its base scale.
    Begin {
        /// Device scale.
        scale: f64,
    },
    /// Stage marker.
    Stage(DrawStage),
    /// A fill with the transform in effect.
    Fill {
        /// Transform at the time of the call.
        transform: Affine,
        /// Path in user space.
        path: BezPath,
        /// Paint.
        paint: Paint,
    },
    /// A stroke with the transform in effect.
    Stroke {
        /// Transform at the time of the call.
        transform: Affine,
        /// Path in user space.
        path: BezPath,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Paint.
        paint: Paint,
    },
}

/// Surface that records calls instead of rasterizing. Used for tests and inspection.
#[derive(Debug)]
pub struct RecordingSurface {
    stack: TransformStack,
    ops: Vec<DrawOp>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new() -> Self {
        Self {
            stack: TransformStack::new(),
            ops: Vec::new(),
        }
    }

    /// Recorded calls in order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Stage markers in the order they were emitted.
    pub fn stages(&self) -> Vec<DrawStage> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stage(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Fill/stroke calls issued under `stage`.
    pub fn ops_in_stage(&self, stage: DrawStage) -> Vec<&DrawOp> {
        let mut current = None;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                DrawOp::Stage(s) => current = Some(*s),
                DrawOp::Begin { .. } => current = None,
                DrawOp::Fill { .. } | DrawOp::Stroke { .. } if current == Some(stage) => {
                    out.push(op)
                }
                _ => {}
            }
        }
        out
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.depth()
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_frame(&mut self, scale: f64) {
        self.ops.clear();
        self.stack.reset(Affine::scale(scale));
        self.ops.push(DrawOp::Begin { scale });
    }

    fn save(&mut self) {
        self.stack.save();
    }

    fn restore(&mut self) {
        self.stack.restore();
    }

    fn transform(&mut self, affine: Affine) {
        self.stack.apply(affine);
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.ops.push(DrawOp::Fill {
            transform: self.stack.current(),
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, style: StrokeStyle, paint: &Paint) {
        self.ops.push(DrawOp::Stroke {
            transform: self.stack.current(),
            path: path.clone(),
            style,
            paint: paint.clone(),
        });
    }

    fn mark_stage(&mut self, stage: DrawStage) {
        self.ops.push(DrawOp::Stage(stage));
    }
}

/// Surface that discards everything. Lets the driver run state-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn begin_frame(&mut self, _scale: f64) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn transform(&mut self, _affine: Affine) {}
    fn fill_path(&mut self, _path: &BezPath, _paint: &Paint) {}
    fn stroke_path(&mut self, _path: &BezPath, _style: StrokeStyle, _paint: &Paint) {}
}

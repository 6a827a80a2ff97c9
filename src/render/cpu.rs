use crate::draw::surface::{DrawSurface, GradientStop, LineCap, Paint, StrokeStyle, TransformStack};
use crate::foundation::core::{Affine, BezPath, Canvas, Color, Point};
use crate::foundation::error::{ChaseError, ChaseResult};
use crate::render::backend::FrameRGBA;

/// Options for [`CpuCanvas`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuCanvasOpts {
    pub(crate) clear_rgba: Option<[u8; 4]>,
}

impl CpuCanvasOpts {
    /// Return options with a configured clear color applied at the start of every frame.
    pub fn with_clear_rgba(mut self, clear: Option<[u8; 4]>) -> Self {
        self.clear_rgba = clear;
        self
    }
}

/// Raster [`DrawSurface`] powered by `vello_cpu`.
///
/// Draw calls are recorded into the render context; pixels are produced by
/// [`CpuCanvas::read_frame`].
pub struct CpuCanvas {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
    stack: TransformStack,
    opts: CpuCanvasOpts,
}

impl CpuCanvas {
    /// Allocate a canvas with the given backing size.
    pub fn new(canvas: Canvas, opts: CpuCanvasOpts) -> ChaseResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ChaseError::validation("canvas width/height must be non-zero"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ChaseError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ChaseError::render("canvas height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
            stack: TransformStack::new(),
            opts,
        })
    }

    /// Backing size in device pixels.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Rasterize everything drawn since the last [`DrawSurface::begin_frame`].
    pub fn read_frame(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn apply_paint(&mut self, paint: &Paint) {
        self.ctx.set_transform(affine_to_cpu(self.stack.current()));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::Linear { start, end, stops } => {
                let g = vello_cpu::peniko::Gradient::new_linear(
                    point_to_cpu(*start),
                    point_to_cpu(*end),
                )
                .with_stops(stops_to_cpu(stops).as_slice());
                self.ctx.set_paint(g);
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let g =
                    vello_cpu::peniko::Gradient::new_radial(point_to_cpu(*center), *radius as f32)
                        .with_stops(stops_to_cpu(stops).as_slice());
                self.ctx.set_paint(g);
            }
        }
    }
}

impl DrawSurface for CpuCanvas {
    fn begin_frame(&mut self, scale: f64) {
        self.ctx.reset();
        self.stack.reset(Affine::scale(scale));
        if let Some([r, g, b, a]) = self.opts.clear_rgba {
            self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            self.ctx
                .set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
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
        self.apply_paint(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, style: StrokeStyle, paint: &Paint) {
        self.apply_paint(paint);
        let cap = match style.cap {
            LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
            LineCap::Round => vello_cpu::kurbo::Cap::Round,
        };
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(style.width).with_caps(cap));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.alpha_u8())
}

fn stops_to_cpu(stops: &[GradientStop]) -> Vec<vello_cpu::peniko::ColorStop> {
    stops
        .iter()
        .map(|(offset, c)| vello_cpu::peniko::ColorStop::from((*offset, color_to_cpu(*c))))
        .collect()
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

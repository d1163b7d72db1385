use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        core::{PlotParams, Point, Rect, Rgba8},
        error::{TexturedError, TexturedResult},
    },
    render::{
        axes::{AxesTransform, AxisLimits},
        backend::{FrameRGBA, unpremultiply_in_place},
        surface::{DrawSurface, ensure_parallel},
    },
};

/// Flattening tolerance for marker circles, in pixels.
const MARKER_TOLERANCE: f64 = 0.05;

#[derive(Clone, Debug)]
enum FigureOp {
    Polyline {
        points: Vec<Point>,
        colour: Rgba8,
        width_pt: f64,
    },
    Scatter {
        points: Vec<Point>,
        size_pt: f64,
        colour: Rgba8,
    },
}

impl FigureOp {
    fn points(&self) -> &[Point] {
        match self {
            Self::Polyline { points, .. } | Self::Scatter { points, .. } => points,
        }
    }
}

/// CPU raster figure with a single borderless axes.
///
/// Draw calls are recorded in data coordinates and only rasterized by
/// [`Figure::render`], so autoscaled limits see every line drawn so far.
#[derive(Clone, Debug)]
pub struct Figure {
    params: PlotParams,
    xlim: Option<AxisLimits>,
    ylim: Option<AxisLimits>,
    ops: Vec<FigureOp>,
}

impl Figure {
    pub fn new(params: PlotParams) -> TexturedResult<Self> {
        params.canvas_px()?;
        Ok(Self {
            params,
            xlim: None,
            ylim: None,
            ops: Vec::new(),
        })
    }

    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) -> TexturedResult<()> {
        self.xlim = Some(AxisLimits::new(min, max)?);
        Ok(())
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) -> TexturedResult<()> {
        self.ylim = Some(AxisLimits::new(min, max)?);
        Ok(())
    }

    /// Explicit limits where set, autoscaled from recorded data otherwise.
    pub fn limits(&self) -> (AxisLimits, AxisLimits) {
        let unit = AxisLimits { min: 0.0, max: 1.0 };
        let x = self.xlim.unwrap_or_else(|| {
            AxisLimits::autoscale(self.ops.iter().flat_map(|op| op.points()).map(|p| p.x))
                .unwrap_or(unit)
        });
        let y = self.ylim.unwrap_or_else(|| {
            AxisLimits::autoscale(self.ops.iter().flat_map(|op| op.points()).map(|p| p.y))
                .unwrap_or(unit)
        });
        (x, y)
    }

    pub fn op_count(&self) -> usize {
        self.ops.len()
    }

    #[tracing::instrument(skip(self), fields(ops = self.ops.len()))]
    pub fn render(&self) -> TexturedResult<FrameRGBA> {
        let (width, height) = self.params.canvas_px()?;
        let w_u16: u16 = width
            .try_into()
            .map_err(|_| TexturedError::render("canvas width exceeds u16"))?;
        let h_u16: u16 = height
            .try_into()
            .map_err(|_| TexturedError::render("canvas height exceeds u16"))?;

        let (x, y) = self.limits();
        tracing::debug!(?x, ?y, width, height, "resolved axes");
        let axes = AxesTransform::new(width, height, x, y);

        let mut ctx = vello_cpu::RenderContext::new(w_u16, h_u16);
        ctx.set_paint(paint(self.params.background_colour));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));

        ctx.push_clip_layer(&rect_to_cpu(axes.area).to_path(0.1));
        for op in &self.ops {
            draw_op(&mut ctx, &axes, &self.params, op);
        }
        ctx.pop_layer();
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w_u16, h_u16);
        ctx.render_to_pixmap(&mut pixmap);

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_in_place(&mut data);
        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }
}

impl DrawSurface for Figure {
    fn stroke_polyline(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        colour: Rgba8,
        width_pt: f64,
    ) -> TexturedResult<()> {
        ensure_parallel(xs, ys)?;
        if !(width_pt.is_finite() && width_pt > 0.0) {
            return Err(TexturedError::render("stroke width must be finite and > 0"));
        }
        self.ops.push(FigureOp::Polyline {
            points: zip_points(xs, ys),
            colour,
            width_pt,
        });
        Ok(())
    }

    fn scatter(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        marker_size_pt: f64,
        colour: Rgba8,
    ) -> TexturedResult<()> {
        ensure_parallel(xs, ys)?;
        if !(marker_size_pt.is_finite() && marker_size_pt > 0.0) {
            return Err(TexturedError::render("marker size must be finite and > 0"));
        }
        self.ops.push(FigureOp::Scatter {
            points: zip_points(xs, ys),
            size_pt: marker_size_pt,
            colour,
        });
        Ok(())
    }
}

fn zip_points(xs: &[f64], ys: &[f64]) -> Vec<Point> {
    xs.iter().zip(ys).map(|(&x, &y)| Point::new(x, y)).collect()
}

fn draw_op(
    ctx: &mut vello_cpu::RenderContext,
    axes: &AxesTransform,
    params: &PlotParams,
    op: &FigureOp,
) {
    match op {
        FigureOp::Polyline {
            points,
            colour,
            width_pt,
        } => {
            let mut path = vello_cpu::kurbo::BezPath::new();
            let mut pen_down = false;
            for p in points {
                // Non-finite vertices break the stroke, like gaps in a plotted series.
                if !(p.x.is_finite() && p.y.is_finite()) {
                    pen_down = false;
                    continue;
                }
                let px = point_to_cpu(axes.to_px(p.x, p.y));
                if pen_down {
                    path.line_to(px);
                } else {
                    path.move_to(px);
                    pen_down = true;
                }
            }

            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(params.points_to_px(*width_pt))
                    .with_join(vello_cpu::kurbo::Join::Round)
                    .with_caps(vello_cpu::kurbo::Cap::Butt),
            );
            ctx.set_paint(paint(*colour));
            ctx.stroke_path(&path);
        }
        FigureOp::Scatter {
            points,
            size_pt,
            colour,
        } => {
            let radius = params.points_to_px(*size_pt) / 2.0;
            let mut path = vello_cpu::kurbo::BezPath::new();
            for p in points.iter().filter(|p| p.x.is_finite() && p.y.is_finite()) {
                let centre = point_to_cpu(axes.to_px(p.x, p.y));
                let circle = vello_cpu::kurbo::Circle::new(centre, radius);
                for el in circle.path_elements(MARKER_TOLERANCE) {
                    path.push(el);
                }
            }

            ctx.set_paint(paint(*colour));
            ctx.fill_path(&path);
        }
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

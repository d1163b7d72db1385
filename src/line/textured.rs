use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{
    foundation::{
        core::Point,
        error::{TexturedError, TexturedResult},
    },
    line::{
        interp::{LinearInterpolant, linspace, validate_knots},
        style::LineStyleConfig,
    },
    render::surface::DrawSurface,
};

/// A polyline plus the noisy scatter halo traced along it.
///
/// Points are fixed at construction; `xs`/`ys` are derived eagerly from them.
#[derive(Clone, Debug)]
pub struct TexturedLine {
    points: Vec<Point>,
    style: LineStyleConfig,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl TexturedLine {
    /// Fails if there are fewer than 2 points, x is not strictly increasing,
    /// or the style is invalid.
    pub fn new(points: Vec<Point>, style: LineStyleConfig) -> TexturedResult<Self> {
        style.validate()?;
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        validate_knots(&xs, &ys)?;
        Ok(Self {
            points,
            style,
            xs,
            ys,
        })
    }

    pub fn with_default_style(points: Vec<Point>) -> TexturedResult<Self> {
        Self::new(points, LineStyleConfig::default())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn style(&self) -> &LineStyleConfig {
        &self.style
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// `num_scatter_points` samples lying exactly on the polyline, evenly
    /// spaced in x over `[min(x), max(x)]`.
    pub fn sample_points_along_line(&self) -> TexturedResult<(Vec<f64>, Vec<f64>)> {
        let f = LinearInterpolant::new(&self.xs, &self.ys)?;
        let (min, max) = f.domain();
        let xs = linspace(min, max, self.style.num_scatter_points);
        let ys = xs
            .iter()
            .map(|&x| f.eval(x))
            .collect::<Result<Vec<_>, _>>()?;
        Ok((xs, ys))
    }

    /// Baseline samples displaced by independent Gaussian noise per axis and
    /// per point.
    pub fn scatter_points<R>(&self, rng: &mut R) -> TexturedResult<(Vec<f64>, Vec<f64>)>
    where
        R: Rng + ?Sized,
    {
        let (mut xs, mut ys) = self.sample_points_along_line()?;

        let horizontal = normal(self.style.horizontal_variance())?;
        let vertical = normal(self.style.effective_vertical_variance())?;

        for x in &mut xs {
            *x += horizontal.sample(rng);
        }
        for y in &mut ys {
            *y += vertical.sample(rng);
        }
        Ok((xs, ys))
    }

    /// Stroke the exact polyline, then scatter the noisy halo on top of it.
    #[tracing::instrument(skip(self, surface, rng), fields(points = self.points.len(), scatter = self.style.num_scatter_points))]
    pub fn draw<S, R>(&self, surface: &mut S, rng: &mut R) -> TexturedResult<()>
    where
        S: DrawSurface + ?Sized,
        R: Rng + ?Sized,
    {
        surface.stroke_polyline(
            &self.xs,
            &self.ys,
            self.style.line_colour,
            self.style.stroke_width,
        )?;

        let (x_dots, y_dots) = self.scatter_points(rng)?;
        tracing::debug!(count = x_dots.len(), "scattering halo");
        surface.scatter(
            &x_dots,
            &y_dots,
            self.style.marker_size,
            self.style.line_colour,
        )
    }
}

fn normal(spread: f64) -> TexturedResult<Normal<f64>> {
    Normal::new(0.0, spread)
        .map_err(|e| TexturedError::validation(format!("noise spread {spread}: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/line/textured.rs"]
mod tests;

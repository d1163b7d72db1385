use std::path::{Path, PathBuf};

use rand::Rng;

use crate::{
    encode::png::save_png,
    foundation::{
        core::{PlotParams, Point},
        error::TexturedResult,
    },
    line::{style::LineStyleConfig, textured::TexturedLine},
    render::cpu::Figure,
};

/// Built-in showcase scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoScene {
    /// Four horizontal lines of increasing halo density.
    StraightLines,
    /// A parabola traced through 25 integer samples.
    CurvedLine,
}

impl DemoScene {
    pub const ALL: [DemoScene; 2] = [DemoScene::StraightLines, DemoScene::CurvedLine];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::StraightLines => "straight_lines.png",
            Self::CurvedLine => "curved_line.png",
        }
    }

    pub fn build<R>(self, params: &PlotParams, rng: &mut R) -> TexturedResult<Figure>
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::StraightLines => straight_lines(params, rng),
            Self::CurvedLine => curved_line(params, rng),
        }
    }
}

/// Empty figure themed with the plot background and no axis decorations.
pub fn figure_for(params: &PlotParams) -> TexturedResult<Figure> {
    Figure::new(*params)
}

pub fn straight_lines<R>(params: &PlotParams, rng: &mut R) -> TexturedResult<Figure>
where
    R: Rng + ?Sized,
{
    let mut fig = figure_for(params)?;

    let styles = [
        LineStyleConfig::new(0.001, 1000),
        LineStyleConfig::new(0.001, 2000),
        LineStyleConfig::new(0.001, 3000),
        LineStyleConfig::new(0.001, 4000),
    ];

    for (i, style) in styles.iter().enumerate() {
        let y = (i + 1) as f64;
        let line = TexturedLine::new(vec![Point::new(0.0, y), Point::new(1.0, y)], *style)?;
        line.draw(&mut fig, rng)?;
    }

    fig.set_ylim(0.0, (styles.len() + 1) as f64)?;
    Ok(fig)
}

pub fn curved_line<R>(params: &PlotParams, rng: &mut R) -> TexturedResult<Figure>
where
    R: Rng + ?Sized,
{
    let mut fig = figure_for(params)?;

    let points = (0..25)
        .map(|x| Point::new(f64::from(x), f64::from(x * x)))
        .collect();
    let line = TexturedLine::new(points, LineStyleConfig::new(0.001, 4000))?;
    line.draw(&mut fig, rng)?;

    let top = line.ys().iter().copied().fold(f64::NEG_INFINITY, f64::max);
    fig.set_ylim(0.0, top)?;
    Ok(fig)
}

/// Render `scenes` into `out_dir`, returning the written paths in order.
#[tracing::instrument(skip(params, rng))]
pub fn render_demos<R>(
    out_dir: &Path,
    params: &PlotParams,
    scenes: &[DemoScene],
    rng: &mut R,
) -> TexturedResult<Vec<PathBuf>>
where
    R: Rng + ?Sized,
{
    let mut written = Vec::with_capacity(scenes.len());
    for &scene in scenes {
        let frame = scene.build(params, rng)?.render()?;
        let path = out_dir.join(scene.file_name());
        save_png(&frame, &path)?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/demos.rs"]
mod tests;

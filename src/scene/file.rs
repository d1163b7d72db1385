use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;
use rand::Rng;

use crate::{
    foundation::{
        core::{PlotParams, Point},
        error::{TexturedError, TexturedResult},
    },
    line::{style::LineStyleConfig, textured::TexturedLine},
    render::cpu::Figure,
};

/// JSON description of a figure made of textured lines.
///
/// ```json
/// {
///   "plot": { "figsize": [10, 5], "background_colour": "#E7DACB" },
///   "ylim": [0, 5],
///   "lines": [
///     { "points": [[0, 1], [1, 1]], "style": { "variance": 0.001, "num_scatter_points": 1000 } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneFile {
    #[serde(default)]
    pub plot: PlotParams,
    #[serde(default)]
    pub xlim: Option<[f64; 2]>,
    #[serde(default)]
    pub ylim: Option<[f64; 2]>,
    pub lines: Vec<LineSpec>,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineSpec {
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub style: LineStyleConfig,
}

impl SceneFile {
    pub fn from_json_str(s: &str) -> TexturedResult<Self> {
        serde_json::from_str(s).map_err(|e| TexturedError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> TexturedResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open scene '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| TexturedError::serde(format!("parse scene '{}': {e}", path.display())))
    }

    /// Draw every line in order onto a fresh figure. The first invalid line
    /// aborts the whole scene with a [`TexturedError::Line`] naming it.
    pub fn build<R>(&self, rng: &mut R) -> TexturedResult<Figure>
    where
        R: Rng + ?Sized,
    {
        let mut fig = Figure::new(self.plot)?;

        for (i, spec) in self.lines.iter().enumerate() {
            let points = spec
                .points
                .iter()
                .map(|&[x, y]| Point::new(x, y))
                .collect();
            TexturedLine::new(points, spec.style)
                .and_then(|line| line.draw(&mut fig, rng))
                .map_err(|e| e.at_line(i))?;
        }

        if let Some([min, max]) = self.xlim {
            fig.set_xlim(min, max)?;
        }
        if let Some([min, max]) = self.ylim {
            fig.set_ylim(min, max)?;
        }
        Ok(fig)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/file.rs"]
mod tests;

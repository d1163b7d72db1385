use crate::foundation::{
    core::Rgba8,
    error::{TexturedError, TexturedResult},
};

/// Appearance of one textured line.
///
/// `variance` is the spread handed to the Gaussian noise generator for every
/// scatter point. Horizontal and vertical noise share it unless
/// `vertical_variance` is set.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LineStyleConfig {
    pub variance: f64,
    pub num_scatter_points: usize,
    pub line_colour: Rgba8,
    /// Spread of the vertical noise; `None` reuses `variance`.
    pub vertical_variance: Option<f64>,
    /// Marker diameter in points.
    pub marker_size: f64,
    /// Polyline width in points.
    pub stroke_width: f64,
}

impl Default for LineStyleConfig {
    fn default() -> Self {
        Self {
            variance: 1e3,
            num_scatter_points: 4000,
            line_colour: Rgba8::rgb(0x2F, 0x1E, 0x1E),
            vertical_variance: None,
            marker_size: 1.0,
            stroke_width: 1.5,
        }
    }
}

impl LineStyleConfig {
    /// Style with the given noise spread and halo density, defaults elsewhere.
    pub fn new(variance: f64, num_scatter_points: usize) -> Self {
        Self {
            variance,
            num_scatter_points,
            ..Self::default()
        }
    }

    pub fn with_colour(mut self, line_colour: Rgba8) -> Self {
        self.line_colour = line_colour;
        self
    }

    pub fn with_vertical_variance(mut self, vertical_variance: f64) -> Self {
        self.vertical_variance = Some(vertical_variance);
        self
    }

    pub fn horizontal_variance(&self) -> f64 {
        self.variance
    }

    pub fn effective_vertical_variance(&self) -> f64 {
        self.vertical_variance.unwrap_or(self.variance)
    }

    pub fn validate(&self) -> TexturedResult<()> {
        fn spread(name: &str, v: f64) -> TexturedResult<()> {
            if !v.is_finite() || v < 0.0 {
                return Err(TexturedError::validation(format!(
                    "LineStyleConfig {name} must be finite and >= 0, got {v}"
                )));
            }
            Ok(())
        }

        spread("variance", self.variance)?;
        if let Some(v) = self.vertical_variance {
            spread("vertical_variance", v)?;
        }
        if self.num_scatter_points == 0 {
            return Err(TexturedError::validation(
                "LineStyleConfig num_scatter_points must be > 0",
            ));
        }
        if !(self.marker_size.is_finite() && self.marker_size > 0.0) {
            return Err(TexturedError::validation(
                "LineStyleConfig marker_size must be finite and > 0",
            ));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(TexturedError::validation(
                "LineStyleConfig stroke_width must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/line/style.rs"]
mod tests;

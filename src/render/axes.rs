use crate::foundation::{
    core::{Point, Rect},
    error::{TexturedError, TexturedResult},
};

/// Fraction of the canvas left empty on each side of the axes area.
pub const AXES_LEFT: f64 = 0.125;
pub const AXES_RIGHT: f64 = 0.9;
pub const AXES_BOTTOM: f64 = 0.11;
pub const AXES_TOP: f64 = 0.88;

/// Autoscale padding, as a fraction of the data span, on each side.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

/// Closed data interval shown along one axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub fn new(min: f64, max: f64) -> TexturedResult<Self> {
        if !(min.is_finite() && max.is_finite()) {
            return Err(TexturedError::validation("axis limits must be finite"));
        }
        if min >= max {
            return Err(TexturedError::validation(format!(
                "axis limits must satisfy min < max, got ({min}, {max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn span(self) -> f64 {
        self.max - self.min
    }

    /// Limits covering `values` plus [`AUTOSCALE_MARGIN`]; `None` without
    /// finite values.
    pub fn autoscale(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })?;

        if lo == hi {
            let pad = (lo.abs() * AUTOSCALE_MARGIN).max(0.5);
            return Some(Self {
                min: lo - pad,
                max: hi + pad,
            });
        }
        let pad = (hi - lo) * AUTOSCALE_MARGIN;
        Some(Self {
            min: lo - pad,
            max: hi + pad,
        })
    }
}

/// Mapping from data coordinates to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxesTransform {
    /// Axes area in pixels, y growing downward.
    pub area: Rect,
    pub x: AxisLimits,
    pub y: AxisLimits,
}

impl AxesTransform {
    pub fn new(canvas_w: u32, canvas_h: u32, x: AxisLimits, y: AxisLimits) -> Self {
        let (w, h) = (f64::from(canvas_w), f64::from(canvas_h));
        let area = Rect::new(
            w * AXES_LEFT,
            h * (1.0 - AXES_TOP),
            w * AXES_RIGHT,
            h * (1.0 - AXES_BOTTOM),
        );
        Self { area, x, y }
    }

    /// Data y grows upward, pixel y grows downward.
    pub fn to_px(&self, x: f64, y: f64) -> Point {
        let tx = (x - self.x.min) / self.x.span();
        let ty = (y - self.y.min) / self.y.span();
        Point::new(
            self.area.x0 + tx * self.area.width(),
            self.area.y1 - ty * self.area.height(),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/axes.rs"]
mod tests;

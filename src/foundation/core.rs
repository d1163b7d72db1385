use std::{fmt, str::FromStr};

use crate::foundation::error::{TexturedError, TexturedResult};

pub use kurbo::{Point, Rect, Vec2};

/// Straight-alpha RGBA8 colour, written as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl FromStr for Rgba8 {
    type Err = TexturedError;

    fn from_str(s: &str) -> TexturedResult<Self> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| TexturedError::validation(format!("colour '{s}' must start with '#'")))?;
        if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
            return Err(TexturedError::validation(format!(
                "colour '{s}' must be #RRGGBB or #RRGGBBAA"
            )));
        }

        let byte = |i: usize| -> TexturedResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| TexturedError::validation(format!("colour '{s}' has invalid hex digits")))
        };

        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = TexturedError;

    fn try_from(value: String) -> TexturedResult<Self> {
        value.parse()
    }
}

impl From<Rgba8> for String {
    fn from(c: Rgba8) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Rgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// Figure-level settings owned by the scene composer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlotParams {
    /// Figure size in inches, `(width, height)`.
    pub figsize: (f64, f64),
    pub background_colour: Rgba8,
    /// Pixels per inch; also scales point-sized strokes and markers.
    pub dpi: f64,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            figsize: (10.0, 5.0),
            background_colour: Rgba8::rgb(0xE7, 0xDA, 0xCB),
            dpi: 100.0,
        }
    }
}

impl PlotParams {
    pub fn new(figsize: (f64, f64), background_colour: Rgba8) -> Self {
        Self {
            figsize,
            background_colour,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> TexturedResult<()> {
        let (w, h) = self.figsize;
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(TexturedError::validation("PlotParams figsize must be finite and > 0"));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(TexturedError::validation("PlotParams dpi must be finite and > 0"));
        }
        Ok(())
    }

    /// Canvas size in whole pixels.
    pub fn canvas_px(&self) -> TexturedResult<(u32, u32)> {
        self.validate()?;
        let w = (self.figsize.0 * self.dpi).round();
        let h = (self.figsize.1 * self.dpi).round();
        if w < 1.0 || h < 1.0 || w > f64::from(u16::MAX) || h > f64::from(u16::MAX) {
            return Err(TexturedError::validation(format!(
                "canvas {w}x{h} px is outside 1..={}",
                u16::MAX
            )));
        }
        Ok((w as u32, h as u32))
    }

    /// Convert a length in typographic points to pixels at this dpi.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

//! Textured lines: sketch-style line art rendered on the CPU.
//!
//! A [`TexturedLine`] is a polyline plus a halo of scatter markers. The halo is
//! resampled evenly along the interpolated path and pushed off it by Gaussian
//! noise, which gives the line a hand-drawn look while the stroke stays crisp.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: `Vec<Point> + LineStyleConfig -> TexturedLine` (validated up front)
//! 2. **Draw**: `TexturedLine::draw` onto any [`DrawSurface`], with an injected RNG
//! 3. **Render**: [`Figure::render`] rasterizes the recorded ops to a [`FrameRGBA`]
//! 4. **Encode**: [`save_png`] writes the frame to disk
//!
//! Noise is the only source of nondeterminism and always comes from the caller's
//! RNG; seed it for reproducible images.
#![forbid(unsafe_code)]

mod encode;
mod foundation;
mod line;
mod render;
mod scene;

pub use encode::png::{ensure_parent_dir, save_png};
pub use foundation::core::{PlotParams, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{InterpolationError, TexturedError, TexturedResult};
pub use line::interp::{LinearInterpolant, linspace, validate_knots};
pub use line::style::LineStyleConfig;
pub use line::textured::TexturedLine;
pub use render::axes::{AxesTransform, AxisLimits};
pub use render::backend::FrameRGBA;
pub use render::cpu::Figure;
pub use render::surface::DrawSurface;
pub use scene::demos::{DemoScene, curved_line, figure_for, render_demos, straight_lines};
pub use scene::file::{LineSpec, SceneFile};

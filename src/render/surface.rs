use crate::foundation::{
    core::Rgba8,
    error::{TexturedError, TexturedResult},
};

/// The two drawing capabilities a textured line needs.
///
/// Coordinates are in data space; mapping to pixels is the surface's job.
/// Sizes are in typographic points.
pub trait DrawSurface {
    /// Stroke one continuous polyline through `(xs[i], ys[i])`.
    fn stroke_polyline(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        colour: Rgba8,
        width_pt: f64,
    ) -> TexturedResult<()>;

    /// Plot one marker per `(xs[i], ys[i])`.
    fn scatter(
        &mut self,
        xs: &[f64],
        ys: &[f64],
        marker_size_pt: f64,
        colour: Rgba8,
    ) -> TexturedResult<()>;
}

/// Shared length check for [`DrawSurface`] implementations.
pub fn ensure_parallel(xs: &[f64], ys: &[f64]) -> TexturedResult<()> {
    if xs.len() != ys.len() {
        return Err(TexturedError::render(format!(
            "coordinate sequences differ in length ({} vs {})",
            xs.len(),
            ys.len()
        )));
    }
    Ok(())
}

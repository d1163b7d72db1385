use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{TexturedError, TexturedResult},
    render::backend::FrameRGBA,
};

pub fn ensure_parent_dir(path: &Path) -> TexturedResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write `frame` as a PNG, creating missing parent directories.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn save_png(frame: &FrameRGBA, path: &Path) -> TexturedResult<()> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(TexturedError::render(format!(
            "frame byte length {} does not match {}x{} RGBA8",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("failed to write png '{}'", path.display()))?;

    tracing::info!(path = %path.display(), "wrote png");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;

//! Image loading

use std::path::Path;

use easel_core::Surface;
use image::{DynamicImage, GenericImageView};

use crate::error::{ImageError, Result};

/// Read and decode an image file
pub fn load(path: impl AsRef<Path>) -> Result<Surface> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .map_err(|e| ImageError::FileLoad(format!("{}: {}", path.display(), e)))?;
    let surface = load_bytes(&data)
        .map_err(|e| ImageError::Decode(format!("{}: {}", path.display(), e)))?;
    tracing::debug!(
        "Decoded {} ({}x{})",
        path.display(),
        surface.width(),
        surface.height()
    );
    Ok(surface)
}

/// Decode an encoded image held in memory
pub fn load_bytes(data: &[u8]) -> Result<Surface> {
    let img = image::load_from_memory(data)?;
    from_dynamic_image(img)
}

fn from_dynamic_image(img: DynamicImage) -> Result<Surface> {
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_raw();
    Surface::from_rgba(pixels, width, height).map_err(|e| ImageError::Decode(e.to_string()))
}

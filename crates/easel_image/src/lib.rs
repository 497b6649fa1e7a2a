//! Image decoding for Easel
//!
//! Decodes PNG, JPEG, GIF and BMP files into straight-alpha RGBA
//! [`easel_core::Surface`]s that a renderer can turn into textures.

mod error;
mod loader;

pub use error::{ImageError, Result};
pub use loader::{load, load_bytes};

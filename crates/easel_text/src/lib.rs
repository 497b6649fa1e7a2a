//! Text rendering for Easel
//!
//! This crate provides:
//! - Font loading from a file or the system font database (ttf-parser, fontdb)
//! - Simple left-to-right measuring from horizontal advances
//! - Rasterization of a whole string into a [`easel_core::Surface`] (swash)

pub mod font;
pub mod rasterizer;

pub use font::{Font, FontMetrics};
pub use rasterizer::{GlyphRasterizer, RenderMode};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Could not open font: {0}")]
    FontLoad(String),

    #[error("Could not parse font: {0}")]
    FontParse(String),

    #[error("Invalid point size: {0}")]
    InvalidSize(f32),

    #[error("No system font available")]
    NoSystemFont,

    #[error("Could not rasterize text: {0}")]
    Rasterize(String),
}

pub type Result<T> = std::result::Result<T, TextError>;

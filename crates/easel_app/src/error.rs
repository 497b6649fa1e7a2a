//! Error types for easel_app

use easel_core::CoreError;
use easel_image::ImageError;
use easel_platform::PlatformError;
use easel_text::TextError;
use thiserror::Error;

/// Errors surfaced to sketches and runners
#[derive(Error, Debug)]
pub enum EaselError {
    /// Platform error (windowing, renderer creation)
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// Drawing core error (state stack, textures)
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Font loading or rasterization error
    #[error(transparent)]
    Text(#[from] TextError),

    /// Image loading error
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error raised by sketch code
    #[error("{0}")]
    Other(String),
}

/// Result type for easel_app operations
pub type Result<T> = std::result::Result<T, EaselError>;

//! Image error types

use thiserror::Error;

/// Errors that can occur while loading images
#[derive(Error, Debug)]
pub enum ImageError {
    /// The file could not be read
    #[error("Could not load image: {0}")]
    FileLoad(String),

    /// The data could not be decoded
    #[error("Could not decode image: {0}")]
    Decode(String),
}

impl From<image::ImageError> for ImageError {
    fn from(err: image::ImageError) -> Self {
        ImageError::Decode(err.to_string())
    }
}

/// Result type for image operations
pub type Result<T> = std::result::Result<T, ImageError>;

//! Core error types

use thiserror::Error;

/// Errors raised by the drawing core and renderers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// `pop` was called with only the default state on the stack
    #[error("State stack underflow: pop without matching push")]
    StackUnderflow,

    /// Pixel buffer does not match its declared dimensions
    #[error("Invalid surface: expected {expected} bytes, got {actual}")]
    InvalidSurface { expected: usize, actual: usize },

    /// The renderer could not create a texture
    #[error("Texture creation failed: {0}")]
    Texture(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

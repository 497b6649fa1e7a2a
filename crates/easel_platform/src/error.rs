//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to initialize the platform (event loop, display connection)
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Failed to create the window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// Failed to create the renderer for a window
    #[error("Failed to create renderer: {0}")]
    RendererCreation(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;

//! Easel Platform Abstraction Layer
//!
//! Platform-agnostic traits and types for windows and input.
//!
//! - [`Platform`] creates the window and its renderer and hands out events
//! - [`Window`] exposes the live window's size and title
//! - [`Event`] is what the frame loop drains once per frame
//!
//! # Platform Implementations
//!
//! - `easel_platform_desktop` - macOS, Windows and Linux using winit
//! - `easel_app::HeadlessPlatform` - scripted events, recorded drawing

mod error;
mod event;
mod input;
mod platform;
mod window;

pub use error::{PlatformError, Result};
pub use event::Event;
pub use input::{Key, MouseButton};
pub use platform::Platform;
pub use window::{Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::Event;
    pub use crate::input::{Key, MouseButton};
    pub use crate::platform::Platform;
    pub use crate::window::{Window, WindowConfig};
}

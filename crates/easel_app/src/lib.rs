//! Easel Sketch Runner
//!
//! Processing-style immediate-mode drawing: implement [`Sketch`], draw
//! through the [`Context`] each frame, and hand the sketch to a runner.
//!
//! # Example (Windowed)
//!
//! ```ignore
//! use easel_app::prelude::*;
//!
//! struct Follow;
//!
//! impl Sketch for Follow {
//!     fn draw(&mut self, ctx: &mut Context) {
//!         ctx.background(Color::BLACK);
//!         ctx.fill(Color::RED);
//!         ctx.rect(ctx.mouse_x() - 5, ctx.mouse_y() - 5, 10, 10);
//!     }
//! }
//!
//! fn main() {
//!     easel_app::start(Follow)
//! }
//! ```
//!
//! # Example (Headless)
//!
//! ```ignore
//! use easel_app::prelude::*;
//!
//! let platform = HeadlessPlatform::new().frames(3);
//! let log = platform.log();
//! let status = run_on(platform, SketchConfig::default().target_fps(0), Follow);
//! assert_eq!(log.frames(), 3);
//! ```

mod config;
mod context;
mod dispatch;
mod error;
mod fps;
mod frame_loop;
mod headless;
mod image;
mod input;
mod sketch;
mod status;

#[cfg(feature = "windowed")]
mod windowed;

#[cfg(test)]
mod tests;

pub use config::SketchConfig;
pub use context::Context;
pub use error::{EaselError, Result};
pub use fps::{FpsCounter, FpsGovernor};
pub use frame_loop::{run_on, FrameLoop, LoopState};
pub use headless::{HeadlessPlatform, HeadlessWindow};
pub use image::Image;
pub use input::InputState;
pub use sketch::Sketch;
pub use status::ExitStatus;

#[cfg(feature = "windowed")]
pub use windowed::{run, start};

// Re-export the building blocks sketches touch directly
pub use easel_core::{Color, DrawState, TextAlign, TextStyle};
pub use easel_platform::{Key, MouseButton};
pub use easel_text::Font;

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::config::SketchConfig;
    pub use crate::context::Context;
    pub use crate::error::{EaselError, Result};
    pub use crate::frame_loop::run_on;
    pub use crate::headless::HeadlessPlatform;
    pub use crate::image::Image;
    pub use crate::sketch::Sketch;
    pub use crate::status::ExitStatus;

    #[cfg(feature = "windowed")]
    pub use crate::windowed::{run, start};

    pub use easel_core::{Color, TextAlign, TextStyle};
    pub use easel_platform::{Key, MouseButton};
    pub use easel_text::Font;
}

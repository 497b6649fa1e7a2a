//! Desktop runner
//!
//! ```ignore
//! use easel_app::prelude::*;
//!
//! struct Hello;
//!
//! impl Sketch for Hello {
//!     fn draw(&mut self, ctx: &mut Context) {
//!         ctx.background(Color::BLACK);
//!         ctx.rect(10, 10, 100, 100);
//!     }
//! }
//!
//! fn main() -> std::process::ExitCode {
//!     easel_app::run(SketchConfig::new("Hello"), Hello).into()
//! }
//! ```
//!
//! The loop must run on the main thread on macOS and most Linux setups.

use tracing::error;

use crate::config::SketchConfig;
use crate::sketch::Sketch;
use crate::status::ExitStatus;

#[cfg(not(any(target_os = "android", target_os = "ios")))]
use easel_platform_desktop::DesktopPlatform;

/// Open a desktop window and run `sketch` until it is closed
#[cfg(not(any(target_os = "android", target_os = "ios")))]
pub fn run<S: Sketch>(config: SketchConfig, sketch: S) -> ExitStatus {
    let platform = match DesktopPlatform::new() {
        Ok(platform) => platform,
        Err(e) => {
            error!("could not initialize windowing: {}", e);
            return ExitStatus::PlatformInit;
        }
    };
    crate::frame_loop::run_on(platform, config, sketch)
}

#[cfg(any(target_os = "android", target_os = "ios"))]
pub fn run<S: Sketch>(_config: SketchConfig, _sketch: S) -> ExitStatus {
    error!("no windowed platform on this target");
    ExitStatus::PlatformInit
}

/// Run with the default configuration and exit the process with the
/// run's status code
pub fn start<S: Sketch>(sketch: S) -> ! {
    let status = run(SketchConfig::default(), sketch);
    std::process::exit(status.code())
}

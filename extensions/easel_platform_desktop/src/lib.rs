//! Easel Desktop Platform
//!
//! Windowing and input for macOS, Windows, and Linux using winit, with a
//! software renderer (tiny-skia) presented through softbuffer.
//!
//! # Example
//!
//! ```ignore
//! use easel_platform::prelude::*;
//! use easel_platform_desktop::DesktopPlatform;
//!
//! let mut platform = DesktopPlatform::new()?;
//! let window = platform.create_window(&WindowConfig::default())?;
//! let mut renderer = platform.create_renderer(&window)?;
//!
//! let mut events = Vec::new();
//! loop {
//!     platform.poll_events(&mut events);
//!     if events.drain(..).any(|e| e.is_quit()) {
//!         break;
//!     }
//!     renderer.clear();
//!     renderer.present();
//! }
//! ```
//!
//! Create the platform on the main thread; macOS and most Linux setups
//! refuse to run an event loop anywhere else.

mod event_loop;
pub mod input;
pub mod raster;
pub mod renderer;
pub mod window;

pub use raster::PixmapRenderer;
pub use renderer::DesktopRenderer;
pub use window::DesktopWindow;

use std::time::Duration;

use easel_platform::{Event, Platform, PlatformError, WindowConfig};
use winit::event_loop::EventLoop as WinitEventLoop;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};

use crate::event_loop::DesktopApp;

/// How many pumps to wait for a requested window to appear
const WINDOW_CREATE_ATTEMPTS: u32 = 200;
const WINDOW_CREATE_TIMEOUT: Duration = Duration::from_millis(10);

/// Desktop platform implementation
pub struct DesktopPlatform {
    event_loop: WinitEventLoop<()>,
    app: DesktopApp,
}

impl DesktopPlatform {
    pub fn new() -> Result<Self, PlatformError> {
        let event_loop =
            WinitEventLoop::new().map_err(|e| PlatformError::InitFailed(e.to_string()))?;
        Ok(Self {
            event_loop,
            app: DesktopApp::default(),
        })
    }

    fn pump(&mut self, timeout: Duration) -> PumpStatus {
        self.event_loop
            .pump_app_events(Some(timeout), &mut self.app)
    }
}

impl Platform for DesktopPlatform {
    type Window = DesktopWindow;
    type Renderer = DesktopRenderer;

    fn create_window(&mut self, config: &WindowConfig) -> Result<DesktopWindow, PlatformError> {
        self.app.window = None;
        self.app.pending = Some(window::window_attributes(config));

        for _ in 0..WINDOW_CREATE_ATTEMPTS {
            if let PumpStatus::Exit(code) = self.pump(WINDOW_CREATE_TIMEOUT) {
                return Err(PlatformError::WindowCreation(format!(
                    "event loop exited with code {}",
                    code
                )));
            }
            if let Some(err) = self.app.create_error.take() {
                return Err(PlatformError::WindowCreation(err));
            }
            if let Some(window) = self.app.window.clone() {
                tracing::info!(
                    "window \"{}\" opened at {}x{}",
                    config.title,
                    config.width,
                    config.height
                );
                return Ok(DesktopWindow::new(window));
            }
        }
        Err(PlatformError::WindowCreation(
            "timed out waiting for the window".to_string(),
        ))
    }

    fn create_renderer(&mut self, window: &DesktopWindow) -> Result<DesktopRenderer, PlatformError> {
        DesktopRenderer::new(window)
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        if let PumpStatus::Exit(code) = self.pump(Duration::ZERO) {
            tracing::debug!("event loop exited with code {}", code);
            self.app.events.push(Event::Quit);
        }
        events.append(&mut self.app.events);
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}

//! Desktop window implementation using winit

use std::sync::Arc;

use easel_platform::{Window, WindowConfig};
use winit::dpi::PhysicalSize;
use winit::window::{Window as WinitWindow, WindowAttributes};

/// Window attributes for a sketch window
///
/// Sizes are physical pixels so sketch coordinates map one-to-one onto the
/// framebuffer.
pub(crate) fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(config.resizable)
}

/// Desktop window wrapping a winit window
#[derive(Clone, Debug)]
pub struct DesktopWindow {
    window: Arc<WinitWindow>,
}

impl DesktopWindow {
    pub(crate) fn new(window: Arc<WinitWindow>) -> Self {
        Self { window }
    }

    /// Get the underlying winit window
    pub fn winit_window(&self) -> &WinitWindow {
        &self.window
    }

    /// Get an Arc to the winit window
    pub fn winit_window_arc(&self) -> Arc<WinitWindow> {
        Arc::clone(&self.window)
    }
}

impl Window for DesktopWindow {
    fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    fn set_size(&self, width: u32, height: u32) {
        // Applied asynchronously on some platforms; a Resized event follows
        let _ = self
            .window
            .request_inner_size(PhysicalSize::new(width, height));
    }

    fn title(&self) -> String {
        self.window.title()
    }

    fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }
}

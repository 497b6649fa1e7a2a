//! Platform trait

use easel_core::Renderer;

use crate::error::Result;
use crate::event::Event;
use crate::window::{Window, WindowConfig};

/// Backend that provides a window, a renderer for it and input events
///
/// All calls happen on the thread that drives the frame loop.
pub trait Platform {
    /// The window type for this platform
    type Window: Window + 'static;
    /// The renderer type for this platform
    type Renderer: Renderer + 'static;

    /// Open the sketch window
    fn create_window(&mut self, config: &WindowConfig) -> Result<Self::Window>;

    /// Create a renderer that draws into `window`
    fn create_renderer(&mut self, window: &Self::Window) -> Result<Self::Renderer>;

    /// Append every pending event to `events` without blocking
    fn poll_events(&mut self, events: &mut Vec<Event>);

    /// Platform name, e.g. "desktop" or "headless"
    fn name(&self) -> &'static str;
}

//! winit application handler
//!
//! The frame loop owns the thread, so winit is driven with
//! `pump_app_events` instead of `run_app`. Each pump feeds events into
//! [`DesktopApp`], which converts and queues them until the next poll.

use std::sync::Arc;

use easel_platform::Event;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window as WinitWindow, WindowAttributes, WindowId};

use crate::input;

#[derive(Default)]
pub(crate) struct DesktopApp {
    /// Window waiting for an active event loop
    pub(crate) pending: Option<WindowAttributes>,
    pub(crate) window: Option<Arc<WinitWindow>>,
    pub(crate) create_error: Option<String>,
    pub(crate) events: Vec<Event>,
    mouse_position: (i32, i32),
}

impl DesktopApp {
    fn create_pending(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attrs) = self.pending.take() else {
            return;
        };
        match event_loop.create_window(attrs) {
            Ok(window) => {
                tracing::debug!("window created: {:?}", window.id());
                self.window = Some(Arc::new(window));
            }
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                self.create_error = Some(e.to_string());
            }
        }
    }
}

impl ApplicationHandler for DesktopApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.create_pending(event_loop);
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        match event {
            WinitWindowEvent::CloseRequested => self.events.push(Event::Quit),

            WinitWindowEvent::Resized(size) => self.events.push(Event::Resized {
                width: size.width,
                height: size.height,
            }),

            WinitWindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                self.events.push(Event::KeyDown {
                    key: input::convert_key(&event.logical_key),
                });
            }

            WinitWindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as i32, position.y as i32);
                self.mouse_position = (x, y);
                self.events.push(Event::MouseMotion { x, y });
            }

            WinitWindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = self.mouse_position;
                self.events.push(Event::MouseButton {
                    button: input::convert_mouse_button(button),
                    pressed: state == ElementState::Pressed,
                    x,
                    y,
                });
            }

            _ => {}
        }
    }
}

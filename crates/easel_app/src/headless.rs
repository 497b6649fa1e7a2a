//! Headless platform
//!
//! Replays a scripted sequence of event batches, one batch per frame, and
//! records drawing into a [`CommandLog`]. Once the script runs out it reports
//! a quit, so a headless run always ends.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use easel_core::{CommandLog, RecordingRenderer};
use easel_platform::{Event, Platform, PlatformError, Result, Window, WindowConfig};

/// In-memory window; clones share state
#[derive(Clone, Debug)]
pub struct HeadlessWindow {
    title: Rc<RefCell<String>>,
    size: Rc<Cell<(u32, u32)>>,
}

impl HeadlessWindow {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: Rc::new(RefCell::new(title.into())),
            size: Rc::new(Cell::new((width, height))),
        }
    }
}

impl Window for HeadlessWindow {
    fn size(&self) -> (u32, u32) {
        self.size.get()
    }

    fn set_size(&self, width: u32, height: u32) {
        self.size.set((width, height));
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }
}

/// Scripted platform for tests and offscreen runs
#[derive(Debug, Default)]
pub struct HeadlessPlatform {
    script: VecDeque<Vec<Event>>,
    log: CommandLog,
    window: Option<HeadlessWindow>,
    fail_window: bool,
    fail_renderer: bool,
}

impl HeadlessPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `count` frames with no input
    pub fn frames(mut self, count: usize) -> Self {
        self.script.extend((0..count).map(|_| Vec::new()));
        self
    }

    /// Deliver `events` at the start of the next scripted frame
    pub fn then(mut self, events: Vec<Event>) -> Self {
        self.script.push_back(events);
        self
    }

    /// Make window creation fail
    pub fn fail_window(mut self) -> Self {
        self.fail_window = true;
        self
    }

    /// Make renderer creation fail
    pub fn fail_renderer(mut self) -> Self {
        self.fail_renderer = true;
        self
    }

    /// Commands recorded by every renderer this platform created
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    /// Handle to the window once created
    pub fn window(&self) -> Option<HeadlessWindow> {
        self.window.clone()
    }
}

impl Platform for HeadlessPlatform {
    type Window = HeadlessWindow;
    type Renderer = RecordingRenderer;

    fn create_window(&mut self, config: &WindowConfig) -> Result<HeadlessWindow> {
        if self.fail_window {
            return Err(PlatformError::WindowCreation(
                "headless window creation disabled".to_string(),
            ));
        }
        let window = HeadlessWindow::new(config.title.clone(), config.width, config.height);
        self.window = Some(window.clone());
        Ok(window)
    }

    fn create_renderer(&mut self, window: &HeadlessWindow) -> Result<RecordingRenderer> {
        if self.fail_renderer {
            return Err(PlatformError::RendererCreation(
                "headless renderer creation disabled".to_string(),
            ));
        }
        let (width, height) = window.size();
        Ok(RecordingRenderer::with_log(width, height, self.log.clone()))
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.script.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(Event::Quit),
        }
    }

    fn name(&self) -> &'static str {
        "headless"
    }
}

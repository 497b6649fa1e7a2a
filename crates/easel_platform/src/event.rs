//! Events delivered to the frame loop

use crate::input::{Key, MouseButton};

/// Platform events, drained once per frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The user asked to close the sketch
    Quit,
    /// A key went down (auto-repeat included)
    KeyDown {
        key: Key,
    },
    /// The cursor moved to a new window position
    MouseMotion {
        x: i32,
        y: i32,
    },
    /// A mouse button was pressed or released
    MouseButton {
        button: MouseButton,
        pressed: bool,
        x: i32,
        y: i32,
    },
    /// The window's drawable area changed
    Resized {
        width: u32,
        height: u32,
    },
}

impl Event {
    /// True for events that stop the frame loop
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Quit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        assert!(Event::Quit.is_quit());
        assert!(!Event::MouseMotion { x: 0, y: 0 }.is_quit());
    }
}

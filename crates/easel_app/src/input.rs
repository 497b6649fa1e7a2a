//! Input state written by the dispatcher

use easel_platform::Key;

/// Last key and mouse positions seen by the dispatcher
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    key: Option<Key>,
    mouse_x: i32,
    mouse_y: i32,
    pmouse_x: i32,
    pmouse_y: i32,
}

impl InputState {
    /// Most recent key pressed, if any
    pub fn key(&self) -> Option<Key> {
        self.key
    }

    pub fn mouse(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }

    /// Mouse position before the latest motion event
    pub fn previous_mouse(&self) -> (i32, i32) {
        (self.pmouse_x, self.pmouse_y)
    }

    pub(crate) fn press(&mut self, key: Key) {
        self.key = Some(key);
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.pmouse_x = self.mouse_x;
        self.pmouse_y = self.mouse_y;
        self.mouse_x = x;
        self.mouse_y = y;
    }
}

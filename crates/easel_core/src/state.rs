//! Draw state and the push/pop state stack
//!
//! Exactly one [`DrawState`] is current at any time. [`StateStack::push`]
//! copies it so that later style and transform changes stay local until the
//! matching [`StateStack::pop`].

use crate::color::Color;
use crate::error::{CoreError, Result};

/// How text coverage is turned into pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Anti-aliased (blended) glyph edges
    #[default]
    Normal,
    /// Hard (solid) glyph edges
    Bold,
}

/// Where text sits relative to the requested box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// Centered inside the requested width/height
    #[default]
    Center,
    /// Top-left corner at the requested position, natural size
    Left,
}

/// Current style and translation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawState {
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub fill_enabled: bool,
    pub stroke_enabled: bool,
    pub text_style: TextStyle,
    pub text_align: TextAlign,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Some(Color::BLACK),
            stroke: Some(Color::WHITE),
            fill_enabled: true,
            stroke_enabled: true,
            text_style: TextStyle::Normal,
            text_align: TextAlign::Center,
            offset_x: 0,
            offset_y: 0,
        }
    }
}

impl DrawState {
    /// Fill color if filling is enabled
    pub fn active_fill(&self) -> Option<Color> {
        self.fill.filter(|_| self.fill_enabled)
    }

    /// Stroke color if stroking is enabled
    pub fn active_stroke(&self) -> Option<Color> {
        self.stroke.filter(|_| self.stroke_enabled)
    }
}

/// Non-empty stack of draw states; the last entry is current
#[derive(Clone, Debug)]
pub struct StateStack {
    states: Vec<DrawState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self {
            states: vec![DrawState::default()],
        }
    }

    pub fn current(&self) -> &DrawState {
        // The stack never drops below one entry
        &self.states[self.states.len() - 1]
    }

    fn current_mut(&mut self) -> &mut DrawState {
        let last = self.states.len() - 1;
        &mut self.states[last]
    }

    /// Number of entries, including the default state
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Save the current state; the copy becomes current
    pub fn push(&mut self) {
        let copy = *self.current();
        self.states.push(copy);
    }

    /// Restore the state saved by the matching `push`
    pub fn pop(&mut self) -> Result<()> {
        if self.states.len() <= 1 {
            return Err(CoreError::StackUnderflow);
        }
        self.states.pop();
        Ok(())
    }

    /// Set the fill color and enable filling
    pub fn fill(&mut self, color: Color) {
        let state = self.current_mut();
        state.fill = Some(color);
        state.fill_enabled = true;
    }

    /// Set the stroke color and enable stroking
    pub fn stroke(&mut self, color: Color) {
        let state = self.current_mut();
        state.stroke = Some(color);
        state.stroke_enabled = true;
    }

    pub fn no_fill(&mut self) {
        self.current_mut().fill_enabled = false;
    }

    pub fn no_stroke(&mut self) {
        self.current_mut().stroke_enabled = false;
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.current_mut().text_align = align;
    }

    pub fn text_style(&mut self, style: TextStyle) {
        self.current_mut().text_style = style;
    }

    /// Accumulate a translation into the current offset; wraps on overflow
    pub fn translate(&mut self, dx: i32, dy: i32) {
        let state = self.current_mut();
        state.offset_x = state.offset_x.wrapping_add(dx);
        state.offset_y = state.offset_y.wrapping_add(dy);
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let stack = StateStack::new();
        let s = stack.current();
        assert_eq!(s.fill, Some(Color::BLACK));
        assert_eq!(s.stroke, Some(Color::WHITE));
        assert!(s.fill_enabled && s.stroke_enabled);
        assert_eq!((s.offset_x, s.offset_y), (0, 0));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_pop_on_default_is_underflow() {
        let mut stack = StateStack::new();
        assert_eq!(stack.pop(), Err(CoreError::StackUnderflow));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_balanced_push_pop_round_trip() {
        let mut stack = StateStack::new();
        stack.fill(Color::RED);
        stack.translate(3, 4);
        let before = *stack.current();

        stack.push();
        stack.translate(1, 1);
        stack.push();
        stack.no_stroke();
        stack.text_style(TextStyle::Bold);
        stack.pop().unwrap();
        stack.push();
        stack.text_align(TextAlign::Left);
        stack.pop().unwrap();
        stack.pop().unwrap();

        assert_eq!(*stack.current(), before);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_mutation_isolation() {
        let mutators: [fn(&mut StateStack); 7] = [
            |s| s.fill(Color::GREEN),
            |s| s.stroke(Color::BLUE),
            |s| s.no_fill(),
            |s| s.no_stroke(),
            |s| s.text_align(TextAlign::Left),
            |s| s.text_style(TextStyle::Bold),
            |s| s.translate(-7, 9),
        ];

        for mutate in mutators {
            let mut stack = StateStack::new();
            let before = *stack.current();
            stack.push();
            mutate(&mut stack);
            stack.pop().unwrap();
            assert_eq!(*stack.current(), before);
        }
    }

    #[test]
    fn test_translate_is_additive() {
        let mut twice = StateStack::new();
        twice.translate(5, -3);
        twice.translate(-2, 10);

        let mut once = StateStack::new();
        once.translate(3, 7);

        assert_eq!(twice.current(), once.current());
    }

    #[test]
    fn test_translate_wraps_at_extremes() {
        let mut stack = StateStack::new();
        stack.translate(i32::MAX, i32::MIN);
        stack.translate(1, -1);
        let s = stack.current();
        assert_eq!((s.offset_x, s.offset_y), (i32::MIN, i32::MAX));
    }

    #[test]
    fn test_fill_reenables_after_no_fill() {
        let mut stack = StateStack::new();
        stack.no_fill();
        assert_eq!(stack.current().active_fill(), None);
        stack.fill(Color::GRAY);
        assert_eq!(stack.current().active_fill(), Some(Color::GRAY));
    }
}

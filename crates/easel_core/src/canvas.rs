//! Canvas - immediate-mode primitives over a [`Renderer`]
//!
//! The canvas owns the [`StateStack`] and consults the current state on
//! every call: which colors are active and how far to translate.

use crate::color::Color;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::renderer::{Renderer, TextureId};
use crate::state::{DrawState, StateStack, TextAlign, TextStyle};

/// Style/transform state plus the primitives that read it
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    stack: StateStack,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            stack: StateStack::new(),
        }
    }

    /// The current draw state
    pub fn state(&self) -> &DrawState {
        self.stack.current()
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    pub fn push(&mut self) {
        self.stack.push();
    }

    pub fn pop(&mut self) -> Result<()> {
        self.stack.pop()
    }

    pub fn fill(&mut self, color: Color) {
        self.stack.fill(color);
    }

    pub fn stroke(&mut self, color: Color) {
        self.stack.stroke(color);
    }

    pub fn no_fill(&mut self) {
        self.stack.no_fill();
    }

    pub fn no_stroke(&mut self) {
        self.stack.no_stroke();
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.stack.text_align(align);
    }

    pub fn text_style(&mut self, style: TextStyle) {
        self.stack.text_style(style);
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.stack.translate(dx, dy);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Primitives
    // ─────────────────────────────────────────────────────────────────────────

    /// Fill then outline a rectangle, each only when active
    pub fn rect(&self, renderer: &mut dyn Renderer, x: i32, y: i32, w: i32, h: i32) {
        let state = self.stack.current();
        let rect = Rect::new(x, y, w, h).offset(state.offset_x, state.offset_y);

        if let Some(color) = state.active_fill() {
            renderer.fill_rect(rect, color);
        }
        if let Some(color) = state.active_stroke() {
            renderer.stroke_rect(rect, color);
        }
    }

    /// Stroke a line between two translated points
    pub fn line(&self, renderer: &mut dyn Renderer, x1: i32, y1: i32, x2: i32, y2: i32) {
        let state = self.stack.current();
        let Some(color) = state.active_stroke() else {
            return;
        };
        let (dx, dy) = (state.offset_x, state.offset_y);
        renderer.draw_line(
            Point::new(x1, y1).offset(dx, dy),
            Point::new(x2, y2).offset(dx, dy),
            color,
        );
    }

    /// Set and enable the fill color, then cover `size` from the origin
    pub fn background(&mut self, renderer: &mut dyn Renderer, color: Color, size: (u32, u32)) {
        self.stack.fill(color);
        let area = Rect::from_size(size.0, size.1);
        self.rect(renderer, area.x, area.y, area.w, area.h);
    }

    /// Blit a whole texture scaled into `(x, y, w, h)` after translation
    pub fn blit(
        &self,
        renderer: &mut dyn Renderer,
        texture: TextureId,
        source: (u32, u32),
        dst: Rect,
    ) {
        let state = self.stack.current();
        let src = Rect::from_size(source.0, source.1);
        renderer.copy(
            texture,
            Some(src),
            dst.offset(state.offset_x, state.offset_y),
        );
    }
}

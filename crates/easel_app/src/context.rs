//! Drawing context handed to every sketch hook
//!
//! The context bundles the canvas state, the renderer, the window, the
//! current font and the input state. It is the only way sketch code reaches
//! any of them.

use std::path::Path;

use easel_core::{text_rect, Canvas, Color, DrawState, Renderer, TextAlign, TextStyle};
use easel_platform::{Key, Window};
use easel_text::{Font, GlyphRasterizer, RenderMode};
use tracing::{debug, warn};

use crate::error::Result;
use crate::image::Image;
use crate::input::InputState;

/// Per-run drawing context
pub struct Context {
    pub(crate) canvas: Canvas,
    pub(crate) renderer: Box<dyn Renderer>,
    window: Box<dyn Window>,
    font: Option<Font>,
    rasterizer: GlyphRasterizer,
    pub(crate) input: InputState,
    pub(crate) fps: u32,
    pub(crate) exit_requested: bool,
}

impl Context {
    /// Build a context over a window and the renderer that draws into it
    pub fn new(window: Box<dyn Window>, renderer: Box<dyn Renderer>) -> Self {
        Self {
            canvas: Canvas::new(),
            renderer,
            window,
            font: None,
            rasterizer: GlyphRasterizer::new(),
            input: InputState::default(),
            fps: 0,
            exit_requested: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window
    // ─────────────────────────────────────────────────────────────────────────

    pub fn title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Resize the window
    pub fn size(&mut self, width: u32, height: u32) {
        self.window.set_size(width, height);
    }

    pub fn window_title(&self) -> String {
        self.window.title()
    }

    /// Current window width
    pub fn width(&self) -> u32 {
        self.window.size().0
    }

    /// Current window height
    pub fn height(&self) -> u32 {
        self.window.size().1
    }

    /// Ask the frame loop to stop after the current frame
    pub fn exit(&mut self) {
        debug!("exit requested by sketch");
        self.exit_requested = true;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State
    // ─────────────────────────────────────────────────────────────────────────

    pub fn state(&self) -> &DrawState {
        self.canvas.state()
    }

    /// Set and enable the fill color
    pub fn fill(&mut self, color: impl Into<Color>) {
        self.canvas.fill(color.into());
    }

    /// Set and enable the stroke color
    pub fn stroke(&mut self, color: impl Into<Color>) {
        self.canvas.stroke(color.into());
    }

    pub fn no_fill(&mut self) {
        self.canvas.no_fill();
    }

    pub fn no_stroke(&mut self) {
        self.canvas.no_stroke();
    }

    pub fn text_align(&mut self, align: TextAlign) {
        self.canvas.text_align(align);
    }

    pub fn text_style(&mut self, style: TextStyle) {
        self.canvas.text_style(style);
    }

    /// Shift everything drawn afterwards; offsets accumulate
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.canvas.translate(dx, dy);
    }

    /// Save a copy of the current state
    pub fn push(&mut self) {
        self.canvas.push();
    }

    /// Restore the state saved by the matching [`Context::push`]
    pub fn pop(&mut self) -> Result<()> {
        self.canvas.pop()?;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Primitives
    // ─────────────────────────────────────────────────────────────────────────

    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        self.canvas.rect(&mut *self.renderer, x, y, w, h);
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.canvas.line(&mut *self.renderer, x1, y1, x2, y2);
    }

    /// Fill the whole window; also makes `color` the fill color
    pub fn background(&mut self, color: impl Into<Color>) {
        let size = self.window.size();
        self.canvas.background(&mut *self.renderer, color.into(), size);
    }

    /// Draw `text` in the current font and fill color, placed inside
    /// `(x, y, w, h)` by the current text alignment
    ///
    /// Text that cannot be rendered is skipped with a warning.
    pub fn text(&mut self, text: &str, x: i32, y: i32, w: i32, h: i32) {
        if text.is_empty() {
            return;
        }
        let Some(font) = self.font.as_ref() else {
            warn!("text({:?}) skipped: no font set", text);
            return;
        };

        let state = *self.canvas.state();
        let color = state.fill.unwrap_or_default();
        let mode = match state.text_style {
            TextStyle::Normal => RenderMode::Blended,
            TextStyle::Bold => RenderMode::Solid,
        };

        let surface = match self.rasterizer.rasterize(font, text, color, mode) {
            Ok(surface) => surface,
            Err(e) => {
                warn!("text({:?}) skipped: {}", text, e);
                return;
            }
        };
        if surface.is_empty() {
            return;
        }

        let texture = match self.renderer.create_texture(&surface) {
            Ok(texture) => texture,
            Err(e) => {
                warn!("text({:?}) skipped: {}", text, e);
                return;
            }
        };
        let dst = text_rect(&state, x, y, w, h, surface.dimensions());
        self.renderer.copy(texture, None, dst);
        self.renderer.destroy_texture(texture);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Resources
    // ─────────────────────────────────────────────────────────────────────────

    /// Load a font file at `size` points
    pub fn create_font(&self, path: impl AsRef<Path>, size: f32) -> Result<Font> {
        Ok(Font::load(path, size)?)
    }

    /// Make `font` current for later [`Context::text`] calls
    ///
    /// The previously current font is dropped.
    pub fn set_font(&mut self, font: Font) {
        self.font = Some(font);
    }

    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// Natural size of `text` in the current font
    pub fn text_size(&self, text: &str) -> Option<(u32, u32)> {
        self.font.as_ref().map(|font| font.measure(text))
    }

    /// Decode an image file and upload it as a texture
    pub fn load_image(&mut self, path: impl AsRef<Path>) -> Result<Image> {
        let path = path.as_ref();
        let surface = easel_image::load(path)?;
        let texture = self.renderer.create_texture(&surface)?;
        let (width, height) = self
            .renderer
            .texture_size(texture)
            .unwrap_or_else(|| surface.dimensions());
        debug!("loaded image {} ({}x{})", path.display(), width, height);
        Ok(Image::new(texture, width, height))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Most recent key pressed
    pub fn key(&self) -> Option<Key> {
        self.input.key()
    }

    pub fn mouse_x(&self) -> i32 {
        self.input.mouse().0
    }

    pub fn mouse_y(&self) -> i32 {
        self.input.mouse().1
    }

    /// Mouse x before the latest motion event
    pub fn pmouse_x(&self) -> i32 {
        self.input.previous_mouse().0
    }

    pub fn pmouse_y(&self) -> i32 {
        self.input.previous_mouse().1
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Frames per second, refreshed once per sample window
    pub fn fps(&self) -> u32 {
        self.fps
    }
}

//! Renderer abstraction and the recording backend
//!
//! [`Renderer`] is the seam between Easel's primitives and a concrete
//! backend. The desktop backend rasterizes in software; the
//! [`RecordingRenderer`] here only records what it was asked to do, which
//! is what the headless platform and the tests use.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::error::{CoreError, Result};
use crate::geometry::{Point, Rect};
use crate::surface::Surface;

/// Opaque handle to a texture owned by a renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(u64);

impl TextureId {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Backend drawing operations
///
/// Colors are drawn opaque; their alpha channel is ignored.
pub trait Renderer {
    /// Clear the whole target to black
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// One-pixel outline along the inside edge of `rect`
    fn stroke_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Upload a surface; the texture lives until `destroy_texture`
    fn create_texture(&mut self, surface: &Surface) -> Result<TextureId>;

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)>;

    /// Blit `src` (whole texture when `None`) scaled into `dst`
    fn copy(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect);

    fn destroy_texture(&mut self, texture: TextureId);

    /// Show the finished frame
    fn present(&mut self);

    /// Size of the render target in pixels
    fn output_size(&self) -> (u32, u32);
}

/// A recorded renderer call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Clear,
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
    },
    CreateTexture {
        texture: TextureId,
        width: u32,
        height: u32,
    },
    Copy {
        texture: TextureId,
        src: Option<Rect>,
        dst: Rect,
    },
    DestroyTexture(TextureId),
    Present,
}

/// Shared handle to the commands recorded by a [`RecordingRenderer`]
///
/// Clones observe the same log, so a test can keep one while the renderer
/// itself is boxed away inside a context.
#[derive(Clone, Debug, Default)]
pub struct CommandLog {
    commands: Rc<RefCell<Vec<DrawCommand>>>,
}

impl CommandLog {
    fn record(&self, command: DrawCommand) {
        self.commands.borrow_mut().push(command);
    }

    /// Snapshot of every command recorded so far
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.commands.borrow().clone()
    }

    /// Remove and return the recorded commands
    pub fn take(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.borrow().is_empty()
    }

    /// Number of presented frames
    pub fn frames(&self) -> usize {
        self.commands
            .borrow()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Present))
            .count()
    }
}

/// Renderer that records commands instead of drawing
#[derive(Debug)]
pub struct RecordingRenderer {
    log: CommandLog,
    textures: FxHashMap<TextureId, (u32, u32)>,
    next_texture: u64,
    size: (u32, u32),
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_log(width, height, CommandLog::default())
    }

    /// Record into an existing log
    pub fn with_log(width: u32, height: u32, log: CommandLog) -> Self {
        Self {
            log,
            textures: FxHashMap::default(),
            next_texture: 1,
            size: (width, height),
        }
    }

    /// Handle to the command log
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }

    pub fn set_output_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Number of textures created and not yet destroyed
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self) {
        self.log.record(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.log.record(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.log.record(DrawCommand::StrokeRect { rect, color });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.log.record(DrawCommand::Line { from, to, color });
    }

    fn create_texture(&mut self, surface: &Surface) -> Result<TextureId> {
        if surface.is_empty() {
            return Err(CoreError::Texture(format!(
                "empty surface {}x{}",
                surface.width(),
                surface.height()
            )));
        }
        let texture = TextureId(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(texture, surface.dimensions());
        self.log.record(DrawCommand::CreateTexture {
            texture,
            width: surface.width(),
            height: surface.height(),
        });
        Ok(texture)
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&texture).copied()
    }

    fn copy(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect) {
        if !self.textures.contains_key(&texture) {
            tracing::warn!("copy from unknown texture {:?}", texture);
            return;
        }
        self.log.record(DrawCommand::Copy { texture, src, dst });
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        if self.textures.remove(&texture).is_some() {
            self.log.record(DrawCommand::DestroyTexture(texture));
        }
    }

    fn present(&mut self) {
        self.log.record(DrawCommand::Present);
    }

    fn output_size(&self) -> (u32, u32) {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_shared_between_clones() {
        let mut renderer = RecordingRenderer::new(10, 10);
        let log = renderer.log();
        renderer.clear();
        renderer.present();
        assert_eq!(log.commands(), vec![DrawCommand::Clear, DrawCommand::Present]);
        assert_eq!(log.frames(), 1);
        assert_eq!(log.take().len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn test_texture_lifecycle() {
        let mut renderer = RecordingRenderer::new(10, 10);
        let id = renderer.create_texture(&Surface::new(3, 2)).unwrap();
        assert_eq!(renderer.texture_size(id), Some((3, 2)));
        assert_eq!(renderer.live_textures(), 1);

        renderer.destroy_texture(id);
        renderer.destroy_texture(id);
        assert_eq!(renderer.live_textures(), 0);
        assert_eq!(
            renderer
                .log()
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::DestroyTexture(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_empty_surface_rejected() {
        let mut renderer = RecordingRenderer::new(10, 10);
        assert!(renderer.create_texture(&Surface::new(0, 4)).is_err());
        assert!(renderer.log().is_empty());
    }

    #[test]
    fn test_copy_from_unknown_texture_is_dropped() {
        let mut renderer = RecordingRenderer::new(10, 10);
        renderer.copy(TextureId::from_raw(99), None, Rect::new(0, 0, 1, 1));
        assert!(renderer.log().is_empty());
    }
}

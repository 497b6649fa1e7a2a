//! Loaded images

use easel_core::{Rect, TextureId};

use crate::context::Context;

/// A decoded image living as a texture in the context's renderer
///
/// The texture stays alive until [`Image::free`] or until the renderer is
/// dropped at the end of the run. `Image` is not `Clone`, so it can only be
/// freed once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an image keeps its texture until freed"]
pub struct Image {
    texture: TextureId,
    width: u32,
    height: u32,
}

impl Image {
    pub(crate) fn new(texture: TextureId, width: u32, height: u32) -> Self {
        Self {
            texture,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texture(&self) -> TextureId {
        self.texture
    }

    /// Draw at natural size with its top-left corner at `(x, y)`
    pub fn draw(&self, ctx: &mut Context, x: i32, y: i32) {
        let (w, h) = self.extent();
        self.draw_rect(ctx, x, y, w, h);
    }

    /// Natural size in drawing coordinates, saturating at `i32::MAX`
    pub fn extent(&self) -> (i32, i32) {
        (
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    /// Draw the whole image scaled into `(x, y, w, h)`
    pub fn draw_rect(&self, ctx: &mut Context, x: i32, y: i32, w: i32, h: i32) {
        ctx.canvas.blit(
            &mut *ctx.renderer,
            self.texture,
            (self.width, self.height),
            Rect::new(x, y, w, h),
        );
    }

    /// Release the texture
    pub fn free(self, ctx: &mut Context) {
        ctx.renderer.destroy_texture(self.texture);
    }
}

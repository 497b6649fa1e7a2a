//! Window renderer: draws into a pixmap, presents through softbuffer

use std::num::NonZeroU32;
use std::sync::Arc;

use easel_core::{Color, Point, Rect, Renderer, Surface, TextureId};
use easel_platform::PlatformError;
use winit::window::Window as WinitWindow;

use crate::raster::PixmapRenderer;
use crate::window::DesktopWindow;

/// Renderer bound to one desktop window
pub struct DesktopRenderer {
    raster: PixmapRenderer,
    // Dropped before the context it was created from
    surface: softbuffer::Surface<Arc<WinitWindow>, Arc<WinitWindow>>,
    _context: softbuffer::Context<Arc<WinitWindow>>,
    window: Arc<WinitWindow>,
    surface_size: Option<(u32, u32)>,
}

impl DesktopRenderer {
    pub fn new(window: &DesktopWindow) -> Result<Self, PlatformError> {
        let window = window.winit_window_arc();
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| PlatformError::RendererCreation(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| PlatformError::RendererCreation(e.to_string()))?;

        let size = window.inner_size();
        let raster = PixmapRenderer::new(size.width, size.height).ok_or_else(|| {
            PlatformError::RendererCreation(format!(
                "cannot allocate {}x{} framebuffer",
                size.width, size.height
            ))
        })?;

        tracing::debug!("software renderer {}x{}", size.width, size.height);
        Ok(Self {
            raster,
            surface,
            _context: context,
            window,
            surface_size: None,
        })
    }

    fn resize_surface(&mut self, width: u32, height: u32) -> bool {
        if self.surface_size == Some((width, height)) {
            return true;
        }
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return false;
        };
        match self.surface.resize(w, h) {
            Ok(()) => {
                self.surface_size = Some((width, height));
                true
            }
            Err(e) => {
                tracing::warn!("softbuffer resize failed: {}", e);
                false
            }
        }
    }
}

impl Renderer for DesktopRenderer {
    fn clear(&mut self) {
        // Follow the window size at frame start
        let size = self.window.inner_size();
        self.raster.resize(size.width, size.height);
        self.raster.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.raster.fill_rect(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.raster.stroke_rect(rect, color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.raster.draw_line(from, to, color);
    }

    fn create_texture(&mut self, surface: &Surface) -> easel_core::Result<TextureId> {
        self.raster.create_texture(surface)
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.raster.texture_size(texture)
    }

    fn copy(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect) {
        self.raster.copy(texture, src, dst);
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.raster.destroy_texture(texture);
    }

    fn present(&mut self) {
        let (width, height) = self.raster.output_size();
        if !self.resize_surface(width, height) {
            return;
        }

        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                tracing::warn!("softbuffer buffer unavailable: {}", e);
                return;
            }
        };
        // Pixmap colors are opaque, so premultiplied equals straight
        for (dst, px) in buffer.iter_mut().zip(self.raster.pixmap().pixels()) {
            *dst = (u32::from(px.red()) << 16) | (u32::from(px.green()) << 8) | u32::from(px.blue());
        }
        if let Err(e) = buffer.present() {
            tracing::warn!("present failed: {}", e);
        }
    }

    fn output_size(&self) -> (u32, u32) {
        self.raster.output_size()
    }
}

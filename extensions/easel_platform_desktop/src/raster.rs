//! Software renderer on a tiny-skia pixmap
//!
//! Shapes are drawn without anti-aliasing at whole-pixel positions, so a
//! 1px outline covers exactly one row or column of pixels.

use easel_core::{Color, CoreError, Point, Rect, Renderer, Surface, TextureId};
use rustc_hash::FxHashMap;
use tiny_skia::{
    ColorU8, FilterQuality, IntRect, IntSize, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

/// CPU renderer; textures are premultiplied pixmaps
pub struct PixmapRenderer {
    canvas: Pixmap,
    textures: FxHashMap<TextureId, Pixmap>,
    next_texture: u64,
}

impl PixmapRenderer {
    /// Zero sizes are clamped to one pixel; `None` if the target is too
    /// large to allocate
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            canvas: blank(width, height)?,
            textures: FxHashMap::default(),
            next_texture: 1,
        })
    }

    /// Resize the target; contents are discarded when the size changes
    pub fn resize(&mut self, width: u32, height: u32) {
        if (self.canvas.width(), self.canvas.height()) == (width.max(1), height.max(1)) {
            return;
        }
        match blank(width, height) {
            Some(canvas) => self.canvas = canvas,
            None => tracing::warn!("cannot resize render target to {}x{}", width, height),
        }
    }

    fn overlaps(&self, rect: Rect) -> bool {
        let (x, y) = (i64::from(rect.x), i64::from(rect.y));
        x < i64::from(self.canvas.width())
            && y < i64::from(self.canvas.height())
            && x + i64::from(rect.w) > 0
            && y + i64::from(rect.h) > 0
    }

    /// The finished frame
    pub fn pixmap(&self) -> &Pixmap {
        &self.canvas
    }

    fn fill(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() || !self.overlaps(rect) {
            return;
        }
        if let Some(r) = tiny_skia::Rect::from_xywh(
            rect.x as f32,
            rect.y as f32,
            rect.w as f32,
            rect.h as f32,
        ) {
            self.canvas
                .fill_rect(r, &paint(color), Transform::identity(), None);
        }
    }
}

fn blank(width: u32, height: u32) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(width.max(1), height.max(1))?;
    pixmap.fill(tiny_skia::Color::BLACK);
    Some(pixmap)
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

impl Renderer for PixmapRenderer {
    fn clear(&mut self) {
        self.canvas.fill(tiny_skia::Color::BLACK);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.fill(rect, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let Rect { x, y, w, h } = rect;
        self.fill(Rect::new(x, y, w, 1), color);
        self.fill(Rect::new(x, y.wrapping_add(h - 1), w, 1), color);
        self.fill(Rect::new(x, y, 1, h), color);
        self.fill(Rect::new(x.wrapping_add(w - 1), y, 1, h), color);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        if from == to {
            self.fill(Rect::new(from.x, from.y, 1, 1), color);
            return;
        }
        // Pixel centers
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32 + 0.5, from.y as f32 + 0.5);
        pb.line_to(to.x as f32 + 0.5, to.y as f32 + 0.5);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: 1.0,
                ..Default::default()
            };
            self.canvas
                .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        }
    }

    fn create_texture(&mut self, surface: &Surface) -> easel_core::Result<TextureId> {
        let mut data = Vec::with_capacity(surface.pixels().len());
        for px in surface.pixels().chunks_exact(4) {
            let c = ColorU8::from_rgba(px[0], px[1], px[2], px[3]).premultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let pixmap = IntSize::from_wh(surface.width(), surface.height())
            .and_then(|size| Pixmap::from_vec(data, size))
            .ok_or_else(|| {
                CoreError::Texture(format!(
                    "cannot create {}x{} texture",
                    surface.width(),
                    surface.height()
                ))
            })?;

        let texture = TextureId::from_raw(self.next_texture);
        self.next_texture += 1;
        self.textures.insert(texture, pixmap);
        Ok(texture)
    }

    fn texture_size(&self, texture: TextureId) -> Option<(u32, u32)> {
        self.textures
            .get(&texture)
            .map(|pixmap| (pixmap.width(), pixmap.height()))
    }

    fn copy(&mut self, texture: TextureId, src: Option<Rect>, dst: Rect) {
        let Some(pixmap) = self.textures.get(&texture) else {
            tracing::warn!("copy from unknown texture {:?}", texture);
            return;
        };
        if dst.is_empty() {
            return;
        }

        let full = Rect::from_size(pixmap.width(), pixmap.height());
        let cropped;
        let source = match src {
            Some(src) if src != full => {
                let crop = IntRect::from_xywh(src.x, src.y, src.w.max(0) as u32, src.h.max(0) as u32)
                    .and_then(|rect| pixmap.clone_rect(rect));
                let Some(crop) = crop else {
                    return;
                };
                cropped = crop;
                cropped.as_ref()
            }
            _ => pixmap.as_ref(),
        };

        let sx = dst.w as f32 / source.width() as f32;
        let sy = dst.h as f32 / source.height() as f32;
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..Default::default()
        };
        self.canvas.draw_pixmap(
            0,
            0,
            source,
            &paint,
            Transform::from_row(sx, 0.0, 0.0, sy, dst.x as f32, dst.y as f32),
            None,
        );
    }

    fn destroy_texture(&mut self, texture: TextureId) {
        self.textures.remove(&texture);
    }

    fn present(&mut self) {}

    fn output_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(renderer: &PixmapRenderer, x: u32, y: u32) -> (u8, u8, u8) {
        let px = renderer.pixmap().pixel(x, y).unwrap();
        (px.red(), px.green(), px.blue())
    }

    #[test]
    fn test_clear_is_black() {
        let mut renderer = PixmapRenderer::new(4, 4).unwrap();
        renderer.fill_rect(Rect::new(0, 0, 4, 4), Color::WHITE);
        renderer.clear();
        assert_eq!(rgb(&renderer, 2, 2), (0, 0, 0));
    }

    #[test]
    fn test_fill_rect_ignores_alpha() {
        let mut renderer = PixmapRenderer::new(10, 10).unwrap();
        renderer.fill_rect(Rect::new(2, 2, 3, 3), Color::rgb(255, 0, 0));
        assert_eq!(rgb(&renderer, 2, 2), (255, 0, 0));
        assert_eq!(rgb(&renderer, 4, 4), (255, 0, 0));
        assert_eq!(rgb(&renderer, 5, 5), (0, 0, 0));
    }

    #[test]
    fn test_stroke_rect_far_off_target_is_ignored() {
        let mut renderer = PixmapRenderer::new(4, 4).unwrap();
        renderer.stroke_rect(Rect::new(i32::MAX - 1, i32::MAX - 1, 8, 8), Color::WHITE);
        assert_eq!(rgb(&renderer, 0, 0), (0, 0, 0));
        assert_eq!(rgb(&renderer, 3, 3), (0, 0, 0));
    }

    #[test]
    fn test_stroke_rect_is_one_pixel_outline() {
        let mut renderer = PixmapRenderer::new(10, 10).unwrap();
        renderer.stroke_rect(Rect::new(1, 1, 5, 5), Color::WHITE);
        assert_eq!(rgb(&renderer, 1, 1), (255, 255, 255));
        assert_eq!(rgb(&renderer, 5, 3), (255, 255, 255));
        assert_eq!(rgb(&renderer, 3, 5), (255, 255, 255));
        assert_eq!(rgb(&renderer, 3, 3), (0, 0, 0));
        assert_eq!(rgb(&renderer, 6, 6), (0, 0, 0));
    }

    #[test]
    fn test_horizontal_line() {
        let mut renderer = PixmapRenderer::new(10, 10).unwrap();
        renderer.draw_line(Point::new(1, 4), Point::new(8, 4), Color::GREEN);
        assert_eq!(rgb(&renderer, 4, 4), (0, 255, 0));
        assert_eq!(rgb(&renderer, 4, 6), (0, 0, 0));
    }

    #[test]
    fn test_point_line() {
        let mut renderer = PixmapRenderer::new(4, 4).unwrap();
        renderer.draw_line(Point::new(2, 2), Point::new(2, 2), Color::BLUE);
        assert_eq!(rgb(&renderer, 2, 2), (0, 0, 255));
    }

    #[test]
    fn test_copy_scales_texture() {
        let mut renderer = PixmapRenderer::new(8, 8).unwrap();
        let surface = Surface::from_rgba(vec![255, 0, 0, 255], 1, 1).unwrap();
        let texture = renderer.create_texture(&surface).unwrap();
        assert_eq!(renderer.texture_size(texture), Some((1, 1)));

        renderer.copy(texture, None, Rect::new(2, 2, 4, 4));
        assert_eq!(rgb(&renderer, 2, 2), (255, 0, 0));
        assert_eq!(rgb(&renderer, 5, 5), (255, 0, 0));
        assert_eq!(rgb(&renderer, 6, 6), (0, 0, 0));

        renderer.destroy_texture(texture);
        assert_eq!(renderer.texture_size(texture), None);
    }

    #[test]
    fn test_copy_blends_transparent_pixels() {
        let mut renderer = PixmapRenderer::new(2, 1).unwrap();
        renderer.fill_rect(Rect::new(0, 0, 2, 1), Color::BLUE);
        let surface = Surface::from_rgba(vec![255, 255, 255, 255, 255, 255, 255, 0], 2, 1).unwrap();
        let texture = renderer.create_texture(&surface).unwrap();

        renderer.copy(texture, None, Rect::new(0, 0, 2, 1));
        assert_eq!(rgb(&renderer, 0, 0), (255, 255, 255));
        assert_eq!(rgb(&renderer, 1, 0), (0, 0, 255));
    }

    #[test]
    fn test_resize_keeps_minimum() {
        let mut renderer = PixmapRenderer::new(0, 0).unwrap();
        assert_eq!(renderer.output_size(), (1, 1));
        renderer.resize(20, 10);
        assert_eq!(renderer.output_size(), (20, 10));
    }
}

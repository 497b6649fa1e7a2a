//! String rasterization using swash
//!
//! Glyph outlines are scaled and rendered to 8-bit coverage masks, then
//! composited into one straight-alpha [`Surface`] whose size matches
//! [`Font::measure`].

use easel_core::{Color, Surface};
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::{Format, Vector};

use crate::font::Font;
use crate::{Result, TextError};

/// How glyph coverage becomes alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Keep anti-aliased coverage
    #[default]
    Blended,
    /// Threshold coverage to fully on or off
    Solid,
}

impl RenderMode {
    fn alpha(self, coverage: u8) -> u8 {
        match self {
            RenderMode::Blended => coverage,
            RenderMode::Solid if coverage >= 128 => 255,
            RenderMode::Solid => 0,
        }
    }
}

/// Glyph rasterizer; keeps swash's scaling caches between calls
pub struct GlyphRasterizer {
    scale_context: ScaleContext,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
        }
    }

    /// Render `text` in `color` into a new surface
    ///
    /// Empty or fully advance-less text yields an empty surface.
    pub fn rasterize(
        &mut self,
        font: &Font,
        text: &str,
        color: Color,
        mode: RenderMode,
    ) -> Result<Surface> {
        let (glyphs, advance) = font.layout(text);
        let width = advance.ceil() as u32;
        let height = font.height();
        let mut surface = Surface::new(width, height);
        if surface.is_empty() {
            return Ok(surface);
        }

        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or_else(|| TextError::Rasterize("invalid font data".to_string()))?;
        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font.size())
            .hint(mode == RenderMode::Solid)
            .build();

        let baseline = font.ascender_px().round() as i32;

        for glyph in glyphs {
            let origin = glyph.x.floor();
            let mut render = Render::new(&[Source::Outline]);
            render
                .format(Format::Alpha)
                .offset(Vector::new(glyph.x - origin, 0.0));

            // Spaces and other blank glyphs have no image
            let Some(image) = render.render(&mut scaler, glyph.id) else {
                continue;
            };

            let left = origin as i32 + image.placement.left;
            let top = baseline - image.placement.top;
            let glyph_width = image.placement.width as usize;

            for (i, &coverage) in image.data.iter().enumerate() {
                let alpha = mode.alpha(coverage);
                if alpha == 0 {
                    continue;
                }
                let px = left + (i % glyph_width) as i32;
                let py = top + (i / glyph_width) as i32;
                if px < 0 || py < 0 {
                    continue;
                }
                let (px, py) = (px as u32, py as u32);
                let existing = surface.pixel(px, py).map_or(0, |p| p[3]);
                surface.put_pixel(px, py, [color.r, color.g, color.b, existing.max(alpha)]);
            }
        }

        Ok(surface)
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Font {
    /// One-off rasterization with a fresh scaling cache
    ///
    /// Prefer a long-lived [`GlyphRasterizer`] when drawing every frame.
    pub fn rasterize(&self, text: &str, color: Color, mode: RenderMode) -> Result<Surface> {
        GlyphRasterizer::new().rasterize(self, text, color, mode)
    }
}

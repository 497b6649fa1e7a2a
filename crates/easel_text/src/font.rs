//! Font loading and measuring
//!
//! A [`Font`] is one face at one point size. The raw bytes are shared, so
//! cloning is cheap and dropping the last clone releases them.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::{Result, TextError};

/// Vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    /// Units per em (typically 1000 or 2048)
    pub units_per_em: u16,
    /// Distance from baseline to the top of the tallest glyph
    pub ascender: i16,
    /// Distance from baseline to the bottom, typically negative
    pub descender: i16,
    pub line_gap: i16,
}

/// Glyph id plus its pen position in pixels
pub(crate) struct PlacedGlyph {
    pub id: u16,
    pub x: f32,
}

/// A font face at a fixed point size
#[derive(Clone)]
pub struct Font {
    data: Arc<Vec<u8>>,
    face_index: u32,
    size: f32,
    metrics: FontMetrics,
}

impl Font {
    /// Load face 0 of a TTF/OTF file at `size` points
    pub fn load(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .map_err(|e| TextError::FontLoad(format!("{}: {}", path.display(), e)))?;
        let font = Self::from_data(data, 0, size)?;
        tracing::debug!("Loaded font {} at {}pt", path.display(), size);
        Ok(font)
    }

    /// Parse raw font data; `face_index` selects a face inside collections
    pub fn from_data(data: Vec<u8>, face_index: u32, size: f32) -> Result<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(TextError::InvalidSize(size));
        }

        let face = ttf_parser::Face::parse(&data, face_index)
            .map_err(|e| TextError::FontParse(e.to_string()))?;
        let metrics = FontMetrics {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            line_gap: face.line_gap(),
        };

        Ok(Self {
            data: Arc::new(data),
            face_index,
            size,
            metrics,
        })
    }

    /// First sans-serif face in the system font database
    pub fn system(size: f32) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            ..Default::default()
        };
        let id = db
            .query(&query)
            .or_else(|| db.faces().next().map(|face| face.id))
            .ok_or(TextError::NoSystemFont)?;

        let (data, index) = db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or(TextError::NoSystemFont)?;
        Self::from_data(data, index, size)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    /// Pixels per font unit at this size
    pub(crate) fn scale(&self) -> f32 {
        self.size / f32::from(self.metrics.units_per_em.max(1))
    }

    pub(crate) fn ascender_px(&self) -> f32 {
        f32::from(self.metrics.ascender) * self.scale()
    }

    /// Line height without the gap, in whole pixels
    pub fn height(&self) -> u32 {
        let units = i32::from(self.metrics.ascender) - i32::from(self.metrics.descender);
        (units.max(0) as f32 * self.scale()).ceil() as u32
    }

    /// Natural rendered size of `text`
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let (_, width) = self.layout(text);
        (width.ceil() as u32, self.height())
    }

    /// Glyph ids with pen positions, and the total advance
    pub(crate) fn layout(&self, text: &str) -> (Vec<PlacedGlyph>, f32) {
        let Ok(face) = ttf_parser::Face::parse(&self.data, self.face_index) else {
            return (Vec::new(), 0.0);
        };
        let scale = self.scale();

        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = 0.0;
        for ch in text.chars() {
            let id = face.glyph_index(ch).unwrap_or(ttf_parser::GlyphId(0));
            glyphs.push(PlacedGlyph { id: id.0, x: pen });
            pen += f32::from(face.glyph_hor_advance(id).unwrap_or(0)) * scale;
        }
        (glyphs, pen)
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("face_index", &self.face_index)
            .field("size", &self.size)
            .field("metrics", &self.metrics)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system_font(size: f32) -> Option<Font> {
        match Font::system(size) {
            Ok(font) => Some(font),
            Err(e) => {
                eprintln!("skipping: {}", e);
                None
            }
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = Font::load("/definitely/not/here.ttf", 12.0).unwrap_err();
        assert!(matches!(err, TextError::FontLoad(_)));
    }

    #[test]
    fn test_load_garbage_file() {
        let path = std::env::temp_dir().join(format!("easel_garbage_{}.ttf", std::process::id()));
        std::fs::write(&path, b"this is not a font").unwrap();
        let err = Font::load(&path, 12.0).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, TextError::FontParse(_)));
    }

    #[test]
    fn test_invalid_size_rejected_before_parsing() {
        let err = Font::from_data(Vec::new(), 0, 0.0).unwrap_err();
        assert!(matches!(err, TextError::InvalidSize(_)));
        let err = Font::from_data(Vec::new(), 0, f32::NAN).unwrap_err();
        assert!(matches!(err, TextError::InvalidSize(_)));
    }

    #[test]
    fn test_measure_grows_with_text() {
        let Some(font) = system_font(16.0) else {
            return;
        };
        let (w1, h1) = font.measure("Hi");
        let (w2, h2) = font.measure("Hi there");
        assert!(w1 > 0);
        assert!(w2 > w1);
        assert_eq!(h1, h2);
        assert_eq!(font.measure("").0, 0);
    }

    #[test]
    fn test_height_scales_with_size() {
        let Some(small) = system_font(10.0) else {
            return;
        };
        let large = system_font(40.0).unwrap();
        assert!(large.height() > small.height());
    }
}

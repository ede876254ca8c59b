use std::fmt;
use std::path::Path;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Handle for the `index`-th font loaded. Only meaningful for the
    /// [`FontSystem`] that loaded it; unknown ids measure as an empty line.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and handed to the scene renderer each frame so new glyphs can be
/// rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Reads and loads a font file.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FontLoadError(format!("{}: {e}", path.display())))?;
        self.load_font(&bytes)
    }

    /// Loads the first candidate path that exists and parses.
    pub fn load_first<P: AsRef<Path>>(
        &mut self,
        candidates: impl IntoIterator<Item = P>,
    ) -> Result<FontId, FontLoadError> {
        let mut tried = Vec::new();
        for path in candidates {
            let path = path.as_ref();
            match self.load_font_file(path) {
                Ok(id) => {
                    log::info!("loaded font {}", path.display());
                    return Ok(id);
                }
                Err(e) => {
                    log::debug!("{e}");
                    tried.push(path.display().to_string());
                }
            }
        }
        Err(FontLoadError(format!("no usable font among [{}]", tried.join(", "))))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Bounding size of laid-out text in logical pixels.
    ///
    /// Width follows pen advances rather than bitmap edges so that passing the
    /// result back as `max_width` never causes an extra wrap.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings { max_width, ..LayoutSettings::default() });
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = layout.height().max(size);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let m = fonts.measure_text("hello", FontId(3), 10.0, None);
        assert_eq!(m, Vec2::new(0.0, 12.0));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }

    #[test]
    fn load_first_reports_every_candidate() {
        let mut fonts = FontSystem::new();
        let err = fonts
            .load_first(["/nonexistent/a.ttf", "/nonexistent/b.ttf"])
            .unwrap_err();
        assert!(err.0.contains("a.ttf") && err.0.contains("b.ttf"), "{err}");
    }
}

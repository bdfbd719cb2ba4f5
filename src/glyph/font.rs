//! Font glyph providers for font-based glyph sources

use crate::glyph::mask::{MaskSurface, PaintMode};
use crate::io::error::{Result, TypocutError};
use crate::io::style::GlyphSource;
use crate::math::random::below;
use rand::Rng;
use std::path::PathBuf;
use std::sync::Arc;

/// A font that can measure and draw single characters
pub trait GlyphFont {
    /// Display name
    fn name(&self) -> &str;

    /// Horizontal advance of `character` at `size` pixels
    fn measure_width(&self, character: char, size: f32) -> f32;

    /// Draw `character` with its bounding box centred on `center`
    fn draw_centered(
        &self,
        character: char,
        size: f32,
        center: [f32; 2],
        surface: &mut MaskSurface,
        mode: PaintMode,
    );
}

/// TrueType/OpenType outline font rasterized with `fontdue`
pub struct OutlineFont {
    name: String,
    font: fontdue::Font,
}

impl std::fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutlineFont").field("name", &self.name).finish()
    }
}

impl OutlineFont {
    /// Parse a font from its file contents
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a parsable font
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default()).map_err(
            |reason| TypocutError::FontLoad {
                path: PathBuf::from(&name),
                reason: reason.to_string(),
            },
        )?;
        Ok(Self { name, font })
    }
}

impl GlyphFont for OutlineFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure_width(&self, character: char, size: f32) -> f32 {
        self.font.metrics(character, size).advance_width
    }

    fn draw_centered(
        &self,
        character: char,
        size: f32,
        center: [f32; 2],
        surface: &mut MaskSurface,
        mode: PaintMode,
    ) {
        if size <= 0.0 {
            return;
        }
        let (metrics, bitmap) = self.font.rasterize(character, size);
        if metrics.width == 0 || metrics.height == 0 {
            return;
        }
        let left = (center[0] - metrics.width as f32 / 2.0).round() as i64;
        let top = (center[1] - metrics.height as f32 / 2.0).round() as i64;

        for (row, line) in bitmap.chunks_exact(metrics.width).enumerate() {
            for (col, &coverage) in line.iter().enumerate() {
                surface.blend_coverage(left + col as i64, top + row as i64, coverage, mode);
            }
        }
    }
}

/// Built-in and uploaded font collections
#[derive(Clone, Default)]
pub struct FontLibrary {
    built_in: Vec<Arc<dyn GlyphFont>>,
    uploaded: Vec<Arc<dyn GlyphFont>>,
}

impl std::fmt::Debug for FontLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |fonts: &[Arc<dyn GlyphFont>]| -> Vec<String> {
            fonts.iter().map(|font| font.name().to_string()).collect()
        };
        f.debug_struct("FontLibrary")
            .field("built_in", &names(&self.built_in))
            .field("uploaded", &names(&self.uploaded))
            .finish()
    }
}

impl FontLibrary {
    /// Create a library from two collections
    pub fn new(built_in: Vec<Arc<dyn GlyphFont>>, uploaded: Vec<Arc<dyn GlyphFont>>) -> Self {
        Self { built_in, uploaded }
    }

    /// Add a built-in font
    pub fn add_built_in(&mut self, font: Arc<dyn GlyphFont>) {
        self.built_in.push(font);
    }

    /// Add an uploaded font
    pub fn add_uploaded(&mut self, font: Arc<dyn GlyphFont>) {
        self.uploaded.push(font);
    }

    /// Fonts available to a glyph source (empty for procedural glyphs)
    pub fn collection(&self, source: GlyphSource) -> &[Arc<dyn GlyphFont>] {
        match source {
            GlyphSource::Procedural => &[],
            GlyphSource::BuiltInFonts => &self.built_in,
            GlyphSource::UploadedFonts => &self.uploaded,
        }
    }

    /// Resolve a stored font index for a glyph source
    pub fn resolve(&self, source: GlyphSource, index: Option<usize>) -> Option<&dyn GlyphFont> {
        index
            .and_then(|index| self.collection(source).get(index))
            .map(|font| &**font)
    }

    /// Pick a uniformly random font index, `None` when the collection is empty
    ///
    /// Always consumes one random value so font choice does not shift later draws.
    pub fn pick<R: Rng>(&self, source: GlyphSource, rng: &mut R) -> Option<usize> {
        let count = self.collection(source).len();
        let index = below(rng, count.max(1));
        (count > 0).then_some(index)
    }
}

//! Opacity masks compiled from glyph definitions or font outlines
//!
//! A mask only carries coverage; it is painted in opaque white and read back
//! through its alpha channel. Inversion fills the whole surface first and then
//! erases every primitive (or the font glyph) out of it.

use crate::glyph::definitions::{codes, definition_for, is_empty_definition};
use crate::glyph::font::GlyphFont;
use crate::glyph::primitives::{CellRect, Primitive, Shape};
use crate::io::configuration::{
    CELLS_PER_LETTER, FONT_SIZE_RATIO, FONT_VERTICAL_OFFSET, FONT_WIDTH_LIMIT,
};
use crate::io::error::{Result, surface_error};
use rand::Rng;
use tiny_skia::{
    BlendMode, Color, FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform,
};

/// How a shape affects the coverage already on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Add opaque coverage
    Fill,
    /// Remove coverage
    Erase,
}

impl PaintMode {
    /// Mode used for glyph shapes given the inversion flag
    pub const fn for_glyph(inverted: bool) -> Self {
        if inverted { Self::Erase } else { Self::Fill }
    }
}

/// Single-channel coverage surface backed by a premultiplied RGBA pixmap
#[derive(Debug, Clone)]
pub struct MaskSurface {
    pixmap: Pixmap,
}

impl MaskSurface {
    /// Allocate a fully transparent mask
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or too large to rasterize
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| surface_error(width, height))?;
        Ok(Self { pixmap })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Clear to transparent, reallocating only when the size changes
    ///
    /// # Errors
    ///
    /// Returns an error if a new surface of the requested size cannot be allocated
    pub fn reset(&mut self, width: u32, height: u32) -> Result<()> {
        if self.width() == width && self.height() == height {
            self.clear();
        } else {
            *self = Self::new(width, height)?;
        }
        Ok(())
    }

    /// Remove all coverage
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    /// Cover the whole surface
    pub fn fill_opaque(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    /// Coverage at a pixel, 0 outside the surface
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        self.pixmap.pixel(x, y).map_or(0, |pixel| pixel.alpha())
    }

    /// Row-major coverage values
    pub fn coverage_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.pixmap.pixels().iter().map(|pixel| pixel.alpha())
    }

    /// Number of pixels with any coverage
    pub fn covered_pixels(&self) -> usize {
        self.coverage_values().filter(|&alpha| alpha > 0).count()
    }

    /// Raw premultiplied bytes, used for bit-exact comparisons
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Rasterize a shape with anti-aliasing and an even-odd fill rule
    pub fn fill_shape(&mut self, shape: &Shape, mode: PaintMode) {
        let mut builder = PathBuilder::new();
        append_contour(&mut builder, &shape.outline);
        if let Some(hole) = &shape.hole {
            append_contour(&mut builder, hole);
        }
        let Some(path) = builder.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;
        if mode == PaintMode::Erase {
            paint.blend_mode = BlendMode::Clear;
        }

        self.pixmap
            .fill_path(&path, &paint, FillRule::EvenOdd, Transform::identity(), None);
    }

    /// Composite one pixel of external coverage (used by font rasterizers)
    ///
    /// Fill is source-over, erase is destination-out. Pixels outside the
    /// surface are ignored.
    pub fn blend_coverage(&mut self, x: i64, y: i64, coverage: u8, mode: PaintMode) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x >= self.width() || y >= self.height() || coverage == 0 {
            return;
        }
        let index = y as usize * self.width() as usize + x as usize;
        let Some(pixel) = self.pixmap.pixels_mut().get_mut(index) else {
            return;
        };

        let current = u32::from(pixel.alpha());
        let source = u32::from(coverage);
        let remaining = current * (255 - source) / 255;
        let alpha = match mode {
            PaintMode::Fill => source + remaining,
            PaintMode::Erase => remaining,
        };
        let alpha = u8::try_from(alpha).unwrap_or(u8::MAX);
        if let Some(color) = PremultipliedColorU8::from_rgba(alpha, alpha, alpha, alpha) {
            *pixel = color;
        }
    }
}

fn append_contour(builder: &mut PathBuilder, points: &[[f32; 2]]) {
    let mut iter = points.iter();
    let Some(&[x, y]) = iter.next() else {
        return;
    };
    builder.move_to(x, y);
    for &[x, y] in iter {
        builder.line_to(x, y);
    }
    builder.close();
}

/// Placement of the 3x3 glyph grid on a mask surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphFrame {
    /// Left edge of the grid
    pub origin_x: f32,
    /// Top edge of the grid
    pub origin_y: f32,
    /// Width of one grid cell
    pub cell_width: f32,
    /// Height of one grid cell
    pub cell_height: f32,
}

impl GlyphFrame {
    /// Grid placed at the surface origin
    pub const fn at_origin(cell_width: f32, cell_height: f32) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_width,
            cell_height,
        }
    }

    /// Rectangle of the cell at `row`, `col`
    pub fn cell(&self, row: u32, col: u32) -> CellRect {
        CellRect::new(
            (col as f32).mul_add(self.cell_width, self.origin_x),
            (row as f32).mul_add(self.cell_height, self.origin_y),
            self.cell_width,
            self.cell_height,
        )
    }

    /// Height of the whole letter
    pub fn letter_height(&self) -> f32 {
        self.cell_height * CELLS_PER_LETTER as f32
    }
}

/// One primitive drawn while compiling a procedural glyph
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveInvocation {
    /// Grid row (0..3)
    pub row: u32,
    /// Grid column (0..3)
    pub col: u32,
    /// Two-character primitive code
    pub code: String,
    /// Decoded primitive
    pub primitive: Primitive,
    /// Target cell on the surface
    pub rect: CellRect,
}

/// List the primitives a definition draws, in row-major order
///
/// Empty (`00`) and unknown codes produce no invocation.
pub fn plan_primitives(definition: &str, frame: &GlyphFrame) -> Vec<PrimitiveInvocation> {
    codes(definition)
        .zip(0u32..)
        .filter_map(|(code, index)| {
            let primitive = Primitive::from_code(code)?;
            let row = index / CELLS_PER_LETTER;
            let col = index % CELLS_PER_LETTER;
            Some(PrimitiveInvocation {
                row,
                col,
                code: code.to_string(),
                primitive,
                rect: frame.cell(row, col),
            })
        })
        .collect()
}

/// Draw a procedural glyph definition onto a cleared surface
///
/// An empty definition leaves the surface untouched regardless of inversion.
/// Returns the primitives that were drawn.
pub fn draw_procedural<R: Rng>(
    surface: &mut MaskSurface,
    definition: &str,
    frame: &GlyphFrame,
    noise: f32,
    inverted: bool,
    rng: &mut R,
) -> Vec<PrimitiveInvocation> {
    if is_empty_definition(definition) {
        return Vec::new();
    }
    if inverted {
        surface.fill_opaque();
    }
    let mode = PaintMode::for_glyph(inverted);
    let invocations = plan_primitives(definition, frame);
    for invocation in &invocations {
        invocation
            .primitive
            .draw(invocation.rect, noise, rng, surface, mode);
    }
    invocations
}

/// Draw a font glyph centred on a cleared surface
///
/// The size starts at `0.8 × letter_height` and shrinks until the measured
/// advance fits 95% of the surface width.
pub fn draw_font_glyph(
    surface: &mut MaskSurface,
    character: char,
    font: &dyn GlyphFont,
    letter_height: f32,
    inverted: bool,
) {
    let surface_width = surface.width() as f32;
    let surface_height = surface.height() as f32;

    let mut size = letter_height * FONT_SIZE_RATIO;
    let max_width = surface_width * FONT_WIDTH_LIMIT;
    let measured = font.measure_width(character, size);
    if measured > max_width && measured > 0.0 {
        size *= max_width / measured;
    }

    if inverted {
        surface.fill_opaque();
    }
    let center = [
        surface_width / 2.0,
        size.mul_add(-FONT_VERTICAL_OFFSET, surface_height / 2.0),
    ];
    font.draw_centered(character, size, center, surface, PaintMode::for_glyph(inverted));
}

/// Compile a standalone procedural mask for one character
///
/// The surface spans exactly `3 × cell_width` by `3 × cell_height`.
///
/// # Errors
///
/// Returns an error if the surface cannot be allocated
pub fn compile_mask<R: Rng>(
    character: char,
    cell_width: u32,
    cell_height: u32,
    inverted: bool,
    noise: f32,
    rng: &mut R,
) -> Result<MaskSurface> {
    let width = cell_width.max(1).saturating_mul(CELLS_PER_LETTER);
    let height = cell_height.max(1).saturating_mul(CELLS_PER_LETTER);
    let mut surface = MaskSurface::new(width, height)?;
    let frame = GlyphFrame::at_origin(cell_width.max(1) as f32, cell_height.max(1) as f32);
    draw_procedural(
        &mut surface,
        definition_for(character),
        &frame,
        noise,
        inverted,
        rng,
    );
    Ok(surface)
}

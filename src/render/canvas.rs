//! Render passes: draw every tile of a layout onto a target image
//!
//! A pass never aborts. Tiles that reference a missing image or font are drawn
//! as translucent placeholder rectangles, tiles whose surfaces cannot be
//! allocated are drawn in red and reported as failed, and spaces are skipped.

use crate::glyph::definitions::{definition_for, is_empty_definition};
use crate::glyph::font::{FontLibrary, GlyphFont};
use crate::glyph::mask::{GlyphFrame, draw_font_glyph, draw_procedural};
use crate::io::error::{Result, TypocutError, surface_error};
use crate::io::progress::RenderProgress;
use crate::io::style::StyleConfig;
use crate::layout::tile::{Tile, TileGeometry};
use crate::math::random::tile_stream;
use crate::render::compositor::composite_into;
use crate::render::distortion::distort;
use crate::render::scratch::ScratchSurfaces;
use crate::source::ImagePool;
use image::{Rgba, RgbaImage, imageops};
use log::{error, warn};

/// Why a tile was drawn as a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// Image index does not resolve in the active pool
    InvalidImage,
    /// Font-based glyphs requested without a resolvable font
    MissingFont,
}

impl PlaceholderKind {
    /// Translucent fill color of the placeholder
    pub const fn color(self) -> Rgba<u8> {
        match self {
            Self::InvalidImage => Rgba([128, 128, 128, 50]),
            Self::MissingFont => Rgba([255, 100, 0, 100]),
        }
    }
}

/// Fill color for tiles whose render failed
pub const FAILURE_COLOR: Rgba<u8> = Rgba([255, 0, 0, 100]);

/// Result of drawing one tile
#[derive(Debug)]
pub enum TileOutcome {
    /// Masked image tile drawn
    Rendered,
    /// Nothing to draw (space or empty definition)
    Skipped,
    /// Placeholder rectangle drawn instead of the tile
    Placeholder(PlaceholderKind),
    /// Surface allocation failed; an error rectangle was drawn
    Failed(TypocutError),
}

/// Outcomes of a render pass in tile order
#[derive(Debug, Default)]
pub struct RenderReport {
    /// One outcome per tile
    pub outcomes: Vec<TileOutcome>,
}

impl RenderReport {
    /// Tiles drawn normally
    pub fn rendered(&self) -> usize {
        self.count(|outcome| matches!(outcome, TileOutcome::Rendered))
    }

    /// Tiles skipped
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, TileOutcome::Skipped))
    }

    /// Tiles replaced by placeholders
    pub fn placeholders(&self) -> usize {
        self.count(|outcome| matches!(outcome, TileOutcome::Placeholder(_)))
    }

    /// Tiles that failed
    pub fn failures(&self) -> usize {
        self.count(|outcome| matches!(outcome, TileOutcome::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&TileOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|outcome| predicate(outcome)).count()
    }
}

/// Read-only inputs shared by every tile in a pass
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Style snapshot
    pub style: &'a StyleConfig,
    /// Active image pool
    pub pool: &'a ImagePool,
    /// Font collections
    pub fonts: &'a FontLibrary,
    /// Surface pixels per layout pixel
    pub density: u32,
}

enum Glyph<'a> {
    Procedural(&'static str),
    Font(&'a dyn GlyphFont),
}

/// Draws tiles one at a time through shared scratch surfaces
#[derive(Debug, Clone)]
pub struct Renderer {
    scratch: ScratchSurfaces,
}

impl Renderer {
    /// Create a renderer with empty scratch surfaces
    ///
    /// # Errors
    ///
    /// Returns an error if the initial scratch surfaces cannot be allocated
    pub fn new() -> Result<Self> {
        Ok(Self {
            scratch: ScratchSurfaces::new()?,
        })
    }

    /// Render one tile to its own image, including margins
    ///
    /// Returns `None` when the tile draws nothing or would be a placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile surfaces cannot be allocated
    pub fn render_tile(
        &mut self,
        tile: &Tile,
        context: &RenderContext<'_>,
    ) -> Result<Option<RgbaImage>> {
        let Ok(glyph) = resolve_glyph(tile, context) else {
            return Ok(None);
        };
        let Some(glyph) = glyph else {
            return Ok(None);
        };
        let Some(source) = context.pool.get(tile.image_index) else {
            return Ok(None);
        };
        self.composite_tile(tile, context, &glyph, source).map(Some)
    }

    /// Draw one tile onto `target`
    pub fn draw_tile(
        &mut self,
        target: &mut RgbaImage,
        tile: &Tile,
        context: &RenderContext<'_>,
    ) -> TileOutcome {
        let glyph = match resolve_glyph(tile, context) {
            Ok(Some(glyph)) => glyph,
            Ok(None) => return TileOutcome::Skipped,
            Err(kind) => {
                warn!("No font for '{}', drawing placeholder", tile.character);
                fill_letter_area(target, tile, context.density, kind.color());
                return TileOutcome::Placeholder(kind);
            }
        };

        let Some(source) = context.pool.get(tile.image_index) else {
            warn!(
                "Image index {} invalid for '{}', drawing placeholder",
                tile.image_index, tile.character
            );
            let kind = PlaceholderKind::InvalidImage;
            fill_letter_area(target, tile, context.density, kind.color());
            return TileOutcome::Placeholder(kind);
        };

        match self.composite_tile(tile, context, &glyph, source) {
            Ok(image) => {
                let geometry = tile_geometry(tile, context.style);
                let density = f64::from(context.density);
                let left = (tile.x - f64::from(geometry.margin_x)) * density;
                let top = (tile.y - f64::from(geometry.margin_y)) * density;
                imageops::overlay(target, &image, left.round() as i64, top.round() as i64);
                TileOutcome::Rendered
            }
            Err(err) => {
                error!("Failed to render '{}': {err}", tile.character);
                fill_letter_area(target, tile, context.density, FAILURE_COLOR);
                TileOutcome::Failed(err)
            }
        }
    }

    /// Draw tiles in order, continuing past placeholders and failures
    pub fn draw_tiles(
        &mut self,
        target: &mut RgbaImage,
        tiles: &[Tile],
        context: &RenderContext<'_>,
        progress: &RenderProgress,
    ) -> RenderReport {
        let outcomes = tiles
            .iter()
            .map(|tile| {
                let outcome = self.draw_tile(target, tile, context);
                progress.tick();
                outcome
            })
            .collect();
        progress.finish();
        RenderReport { outcomes }
    }

    fn composite_tile(
        &mut self,
        tile: &Tile,
        context: &RenderContext<'_>,
        glyph: &Glyph<'_>,
        source: &RgbaImage,
    ) -> Result<RgbaImage> {
        let style = context.style;
        let density = context.density.max(1);
        let geometry = tile_geometry(tile, style);
        let (width, height) = geometry.scaled(density);
        if width == 0 || height == 0 {
            return Err(surface_error(width, height));
        }

        let scratch = self.scratch.acquire(width, height)?;
        let mut rng = tile_stream(tile.seed);
        let noise = style.noise_amount as f32;
        let scale = density as f32;

        match glyph {
            Glyph::Procedural(definition) => {
                let frame = GlyphFrame {
                    origin_x: geometry.margin_x as f32 * scale,
                    origin_y: geometry.margin_y as f32 * scale,
                    cell_width: tile.cell_width as f32 * scale,
                    cell_height: tile.cell_height as f32 * scale,
                };
                draw_procedural(
                    scratch.mask,
                    definition,
                    &frame,
                    noise,
                    style.inverted_mask,
                    &mut rng,
                );
            }
            Glyph::Font(font) => draw_font_glyph(
                scratch.mask,
                tile.character,
                *font,
                geometry.letter_height as f32 * scale,
                style.inverted_mask,
            ),
        }

        composite_into(
            scratch.mask,
            source,
            tile.crop,
            (geometry.total_width, geometry.total_height),
            scratch.section,
        );
        if noise > 0.0 && matches!(glyph, Glyph::Font(_)) {
            distort(scratch.section, noise, &mut rng);
        }

        Ok(scratch.section.clone())
    }
}

fn tile_geometry(tile: &Tile, style: &StyleConfig) -> TileGeometry {
    TileGeometry::new(
        tile.cell_width,
        tile.cell_height,
        style.noise_amount,
        style.margin_factor,
    )
}

// Ok(None) means there is nothing to draw; Err names the placeholder to use.
fn resolve_glyph<'a>(
    tile: &Tile,
    context: &RenderContext<'a>,
) -> std::result::Result<Option<Glyph<'a>>, PlaceholderKind> {
    if tile.character == ' ' {
        return Ok(None);
    }
    let source = context.style.glyph_source;
    if source.is_font() {
        return context
            .fonts
            .resolve(source, tile.fonts.index_for(source))
            .map(|font| Some(Glyph::Font(font)))
            .ok_or(PlaceholderKind::MissingFont);
    }
    let definition = definition_for(tile.character);
    if is_empty_definition(definition) {
        return Ok(None);
    }
    Ok(Some(Glyph::Procedural(definition)))
}

fn fill_letter_area(target: &mut RgbaImage, tile: &Tile, density: u32, color: Rgba<u8>) {
    let density = density.max(1);
    let width = tile.width().saturating_mul(density);
    let height = tile.height().saturating_mul(density);
    if width == 0 || height == 0 {
        return;
    }
    let patch = RgbaImage::from_pixel(width, height, color);
    let scale = f64::from(density);
    imageops::overlay(
        target,
        &patch,
        (tile.x * scale).round() as i64,
        (tile.y * scale).round() as i64,
    );
}

/// Render tiles onto a fresh canvas of `width × height` layout pixels
///
/// The canvas is `density` times larger in each dimension.
///
/// # Errors
///
/// Returns an error if the scratch surfaces cannot be allocated
pub fn render_canvas(
    width: u32,
    height: u32,
    background: Rgba<u8>,
    tiles: &[Tile],
    context: &RenderContext<'_>,
    progress: &RenderProgress,
) -> Result<(RgbaImage, RenderReport)> {
    let density = context.density.max(1);
    let mut target = RgbaImage::from_pixel(
        width.saturating_mul(density),
        height.saturating_mul(density),
        background,
    );
    let mut renderer = Renderer::new()?;
    let report = renderer.draw_tiles(&mut target, tiles, context, progress);
    Ok((target, report))
}

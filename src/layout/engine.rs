//! Layout engine: owns the text, the live tiles and the image pool
//!
//! Every edit re-runs the flow layout with the previous tiles as the reuse
//! source, so characters that did not change keep their appearance.

use crate::glyph::font::FontLibrary;
use crate::io::configuration::{
    DEFAULT_BOUNDARY_PERCENT, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_SEED,
};
use crate::io::error::Result;
use crate::io::progress::RenderProgress;
use crate::io::style::StyleConfig;
use crate::layout::flow::{self, CanvasArea, Capacity, FlowContext};
use crate::layout::sheet::{PageSpec, SheetLayout, pack_sheet};
use crate::layout::tile::{Tile, TileGeometry};
use crate::render::canvas::{RenderContext, RenderReport, render_canvas};
use crate::source::{ImagePool, ImageSource};
use image::{Rgba, RgbaImage};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Canvas and randomness settings for a layout engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Boundary on each side as a fraction of canvas width
    pub boundary_percent: f64,
    /// Seed for image assignment and tile seeds
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            boundary_percent: DEFAULT_BOUNDARY_PERCENT,
            seed: DEFAULT_SEED,
        }
    }
}

/// Stateful owner of text, tiles, style and sources
#[derive(Debug)]
pub struct LayoutEngine {
    config: EngineConfig,
    area: CanvasArea,
    style: StyleConfig,
    pool: ImagePool,
    fonts: FontLibrary,
    text: String,
    tiles: Vec<Tile>,
    rng: StdRng,
}

impl LayoutEngine {
    /// Create an engine with gradient images for the style's colors
    pub fn new(config: EngineConfig, style: StyleConfig) -> Self {
        let style = style.sanitize();
        Self {
            area: CanvasArea::new(
                config.canvas_width,
                config.canvas_height,
                config.boundary_percent,
            ),
            pool: ImagePool::new(style.start_color, style.end_color),
            fonts: FontLibrary::default(),
            text: String::new(),
            tiles: Vec::new(),
            rng: StdRng::seed_from_u64(config.seed),
            config,
            style,
        }
    }

    /// Current style
    pub const fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Current text after upper-casing and truncation
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Live tiles in drawing order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Image pool
    pub const fn pool(&self) -> &ImagePool {
        &self.pool
    }

    /// Font collections
    pub const fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Canvas region
    pub const fn area(&self) -> &CanvasArea {
        &self.area
    }

    /// Character limit for the current style and canvas
    pub fn capacity(&self) -> Capacity {
        flow::max_capacity(&self.style, self.area.usable_width(), self.area.usable_height())
    }

    /// Replace the text, upper-cased and truncated to capacity
    ///
    /// Returns the number of characters kept.
    pub fn set_text(&mut self, text: &str) -> usize {
        let limit = self.capacity().total();
        let upper = text.to_uppercase();
        if upper.chars().count() > limit {
            info!("Input truncated to {limit} characters");
        }
        self.text = flow::truncate_to_capacity(&upper, limit);
        self.relayout();
        self.text.chars().count()
    }

    /// Append one printable ASCII character while below capacity
    pub fn type_char(&mut self, character: char) -> bool {
        if !(character.is_ascii_graphic() || character == ' ') {
            return false;
        }
        if self.text.chars().count() >= self.capacity().total() {
            debug!("Capacity reached, ignoring '{character}'");
            return false;
        }
        self.text.push(character.to_ascii_uppercase());
        self.relayout();
        true
    }

    /// Remove the last character
    pub fn backspace(&mut self) -> bool {
        if self.text.pop().is_none() {
            return false;
        }
        self.relayout();
        true
    }

    /// Replace the style, regenerating gradients when colors change
    ///
    /// Text that no longer fits the new capacity is truncated.
    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style.sanitize();
        self.pool.set_colors(self.style.start_color, self.style.end_color);
        let limit = self.capacity().total();
        if self.text.chars().count() > limit {
            info!("Style change truncated text to {limit} characters");
            self.text = flow::truncate_to_capacity(&self.text, limit);
        }
        self.relayout();
    }

    /// Replace the font collections
    pub fn set_fonts(&mut self, fonts: FontLibrary) {
        self.fonts = fonts;
        self.randomize_images();
    }

    /// Replace the uploaded images, keeping tile indices valid
    pub fn set_uploaded_images(&mut self, images: Vec<RgbaImage>) -> usize {
        let kept = self.pool.set_uploaded(images);
        self.relayout();
        kept
    }

    /// Switch the active image source and re-randomize every tile
    pub fn select_source(&mut self, source: ImageSource) -> ImageSource {
        let active = self.pool.select(source);
        self.randomize_images();
        active
    }

    /// Give every tile a fresh image, seed, crop and fonts
    pub fn randomize_images(&mut self) {
        let geometry = TileGeometry::for_style(&self.style);
        for tile in &mut self.tiles {
            tile.reassign(&self.pool, &geometry, &self.fonts, &mut self.rng);
        }
        self.relayout();
    }

    /// Index of the topmost tile under a point
    pub fn tile_at(&self, px: f64, py: f64) -> Option<usize> {
        self.tiles.iter().rposition(|tile| tile.contains(px, py))
    }

    /// Move a tile without changing its appearance
    pub fn move_tile(&mut self, index: usize, x: f64, y: f64) -> bool {
        let Some(tile) = self.tiles.get_mut(index) else {
            return false;
        };
        tile.move_to(x, y);
        true
    }

    /// Put every tile back at its flow position
    pub fn reset_layout(&mut self) {
        self.relayout();
    }

    fn relayout(&mut self) {
        let context = FlowContext {
            style: &self.style,
            area: &self.area,
            pool: &self.pool,
            fonts: &self.fonts,
        };
        let tiles = flow::layout(&self.text, &context, &self.tiles, &mut self.rng);
        debug!("Laid out {} tiles", tiles.len());
        self.tiles = tiles;
    }

    fn render_context(&self, density: u32) -> RenderContext<'_> {
        RenderContext {
            style: &self.style,
            pool: &self.pool,
            fonts: &self.fonts,
            density: density.max(1),
        }
    }

    /// Render the live tiles onto a transparent canvas
    ///
    /// # Errors
    ///
    /// Returns an error if scratch surfaces cannot be allocated
    pub fn render(
        &self,
        density: u32,
        progress: &RenderProgress,
    ) -> Result<(RgbaImage, RenderReport)> {
        render_canvas(
            self.config.canvas_width,
            self.config.canvas_height,
            Rgba([0, 0, 0, 0]),
            &self.tiles,
            &self.render_context(density),
            progress,
        )
    }

    /// Pack and render a sticker sheet on a white page
    ///
    /// Sheet tiles are independent of the live tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if scratch surfaces cannot be allocated
    pub fn render_sheet(
        &mut self,
        page: &PageSpec,
        density: u32,
        progress_enabled: bool,
    ) -> Result<(SheetLayout, RgbaImage, RenderReport)> {
        let (layout, tiles) =
            pack_sheet(&self.style, page, &self.pool, &self.fonts, &mut self.rng);
        let progress = RenderProgress::new(tiles.len(), "Sheet", progress_enabled);
        let (image, report) = render_canvas(
            page.width,
            page.height,
            Rgba([255, 255, 255, 255]),
            &tiles,
            &self.render_context(density),
            &progress,
        )?;
        Ok((layout, image, report))
    }
}

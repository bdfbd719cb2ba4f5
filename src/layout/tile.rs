//! Tile records: one placed character with its stable image and noise assignment

use crate::glyph::font::FontLibrary;
use crate::io::configuration::CELLS_PER_LETTER;
use crate::io::style::{GlyphSource, StyleConfig};
use crate::math::random::{below, next_tile_seed};
use crate::source::ImagePool;
use log::warn;
use rand::Rng;

/// Pixel extents of a tile surface
///
/// The surface is larger than the letter by a margin on each side so jittered
/// vertices and distortion never clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    /// Letter width (3 cells)
    pub letter_width: u32,
    /// Letter height (3 cells)
    pub letter_height: u32,
    /// Horizontal margin on each side
    pub margin_x: u32,
    /// Vertical margin on each side
    pub margin_y: u32,
    /// Letter width plus both margins, at least 1
    pub total_width: u32,
    /// Letter height plus both margins, at least 1
    pub total_height: u32,
}

impl TileGeometry {
    /// Compute tile extents for a cell size, noise intensity and margin factor
    pub fn new(cell_width: u32, cell_height: u32, noise: f64, margin_factor: f64) -> Self {
        let letter_width = cell_width.saturating_mul(CELLS_PER_LETTER);
        let letter_height = cell_height.saturating_mul(CELLS_PER_LETTER);
        let max_noise = f64::from(cell_width.max(cell_height)) * noise.max(0.0);
        let margin = |letter: u32| {
            f64::from(letter)
                .mul_add(margin_factor.max(0.0), max_noise)
                .floor() as u32
        };
        let margin_x = margin(letter_width);
        let margin_y = margin(letter_height);
        Self {
            letter_width,
            letter_height,
            margin_x,
            margin_y,
            total_width: letter_width
                .saturating_add(margin_x.saturating_mul(2))
                .max(1),
            total_height: letter_height
                .saturating_add(margin_y.saturating_mul(2))
                .max(1),
        }
    }

    /// Geometry for the cell size in a style
    pub fn for_style(style: &StyleConfig) -> Self {
        Self::new(
            style.cell_width,
            style.cell_height,
            style.noise_amount,
            style.margin_factor,
        )
    }

    /// Surface size at a render density
    pub const fn scaled(&self, density: u32) -> (u32, u32) {
        (
            self.total_width.saturating_mul(density),
            self.total_height.saturating_mul(density),
        )
    }
}

/// Font chosen for a tile in each font-based glyph source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FontAssignment {
    /// Index into the built-in collection
    pub built_in: Option<usize>,
    /// Index into the uploaded collection
    pub uploaded: Option<usize>,
}

impl FontAssignment {
    /// Pick one font per collection uniformly at random
    pub fn choose<R: Rng>(library: &FontLibrary, rng: &mut R) -> Self {
        Self {
            built_in: library.pick(GlyphSource::BuiltInFonts, rng),
            uploaded: library.pick(GlyphSource::UploadedFonts, rng),
        }
    }

    /// Font index for a glyph source, `None` for procedural glyphs
    pub const fn index_for(&self, source: GlyphSource) -> Option<usize> {
        match source {
            GlyphSource::Procedural => None,
            GlyphSource::BuiltInFonts => self.built_in,
            GlyphSource::UploadedFonts => self.uploaded,
        }
    }
}

/// One placed character
///
/// Position can change freely; image index, seed, crop offset and fonts are
/// chosen once and kept so redraws look identical.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Character drawn by this tile
    pub character: char,
    /// Left edge of the letter area on the canvas
    pub x: f64,
    /// Top edge of the letter area on the canvas
    pub y: f64,
    /// Width of one glyph cell
    pub cell_width: u32,
    /// Height of one glyph cell
    pub cell_height: u32,
    /// Index into the active image pool
    pub image_index: usize,
    /// Seed for the tile's jitter stream
    pub seed: u64,
    /// Top-left corner of the source crop window
    pub crop: (u32, u32),
    /// Position of the character in the input text
    pub text_index: usize,
    /// Fonts used in font-based glyph modes
    pub fonts: FontAssignment,
}

impl Tile {
    /// Create a tile, clamping an out-of-range image index to 0
    ///
    /// Draws the seed and then the crop offset from `rng`.
    #[allow(clippy::too_many_arguments)]
    pub fn new<R: Rng>(
        character: char,
        x: f64,
        y: f64,
        geometry: &TileGeometry,
        cell_size: (u32, u32),
        image_index: usize,
        pool: &ImagePool,
        rng: &mut R,
    ) -> Self {
        let image_index = validated_index(pool, image_index);
        let seed = next_tile_seed(rng);
        let crop = random_crop(pool, image_index, geometry, rng);
        Self {
            character,
            x,
            y,
            cell_width: cell_size.0,
            cell_height: cell_size.1,
            image_index,
            seed,
            crop,
            text_index: 0,
            fonts: FontAssignment::default(),
        }
    }

    /// Letter area width
    pub const fn width(&self) -> u32 {
        self.cell_width.saturating_mul(CELLS_PER_LETTER)
    }

    /// Letter area height
    pub const fn height(&self) -> u32 {
        self.cell_height.saturating_mul(CELLS_PER_LETTER)
    }

    /// Whether a point lies inside the letter area (edges inclusive)
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x
            && px <= self.x + f64::from(self.width())
            && py >= self.y
            && py <= self.y + f64::from(self.height())
    }

    /// Reposition without touching appearance
    pub const fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Re-draw image index, seed, crop and fonts
    pub fn reassign<R: Rng>(
        &mut self,
        pool: &ImagePool,
        geometry: &TileGeometry,
        fonts: &FontLibrary,
        rng: &mut R,
    ) {
        self.image_index = validated_index(pool, below(rng, pool.len()));
        self.seed = next_tile_seed(rng);
        self.crop = random_crop(pool, self.image_index, geometry, rng);
        self.fonts = FontAssignment::choose(fonts, rng);
    }

    /// Clamp the image index and crop after a pool or geometry change
    ///
    /// A clamped tile gets a fresh crop for its new image. Otherwise the crop
    /// is pulled back inside the window its image allows for `geometry`, and
    /// left alone when it already fits. Returns whether the index changed.
    pub fn revalidate<R: Rng>(
        &mut self,
        pool: &ImagePool,
        geometry: &TileGeometry,
        rng: &mut R,
    ) -> bool {
        let valid = validated_index(pool, self.image_index);
        if valid == self.image_index {
            self.crop = clamp_crop(pool, valid, geometry, self.crop);
            return false;
        }
        self.image_index = valid;
        self.crop = random_crop(pool, valid, geometry, rng);
        true
    }
}

fn validated_index(pool: &ImagePool, index: usize) -> usize {
    let clamped = pool.clamp_index(index);
    if clamped != index {
        warn!(
            "Image index {index} out of range for a pool of {}, using 0",
            pool.len()
        );
    }
    clamped
}

// Largest crop origin per axis, 0 where the image is not larger than the tile
fn max_crop(pool: &ImagePool, image_index: usize, geometry: &TileGeometry) -> (u32, u32) {
    pool.get(image_index).map_or((0, 0), |image| {
        (
            image.width().saturating_sub(geometry.total_width),
            image.height().saturating_sub(geometry.total_height),
        )
    })
}

/// Pull a crop origin back inside the window allowed for a geometry
pub fn clamp_crop(
    pool: &ImagePool,
    image_index: usize,
    geometry: &TileGeometry,
    crop: (u32, u32),
) -> (u32, u32) {
    let (max_x, max_y) = max_crop(pool, image_index, geometry);
    (crop.0.min(max_x), crop.1.min(max_y))
}

/// Random crop origin keeping the tile window inside the image
///
/// Returns `(0, 0)` along any axis where the image is not larger than the tile.
pub fn random_crop<R: Rng>(
    pool: &ImagePool,
    image_index: usize,
    geometry: &TileGeometry,
    rng: &mut R,
) -> (u32, u32) {
    let (max_x, max_y) = max_crop(pool, image_index, geometry);
    let offset = |rng: &mut R, max: u32| {
        if max > 0 {
            u32::try_from(below(rng, max as usize)).unwrap_or(0)
        } else {
            0
        }
    };
    let x = offset(rng, max_x);
    let y = offset(rng, max_y);
    (x, y)
}

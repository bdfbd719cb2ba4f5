//! Sticker sheet packing: fit the alphabet on a page and fill the rest by letter frequency
//!
//! Packing starts at the style's full letter size and shrinks in 5% steps until
//! all 26 letters fit or the minimum scale is reached. Spacing is scaled by a
//! multiplier derived from the letter aspect ratio so wide and tall letters get
//! comparable gaps.

use crate::glyph::font::FontLibrary;
use crate::io::configuration::{
    A4_HEIGHT_PX, A4_WIDTH_PX, ALPHABET_SIZE, CELLS_PER_LETTER, DEFAULT_BOUNDARY_PERCENT,
    INCH_TO_CM, SHEET_DPI, SHEET_MIN_SCALE, SHEET_SHRINK_STEP,
};
use crate::io::style::StyleConfig;
use crate::layout::tile::{FontAssignment, Tile, TileGeometry};
use crate::math::random::below;
use crate::source::ImagePool;
use log::{debug, info, warn};
use rand::Rng;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Letters ordered by English frequency, with relative weights
const LETTER_FREQUENCIES: [(char, u32); 26] = [
    ('E', 12),
    ('T', 9),
    ('A', 8),
    ('O', 8),
    ('I', 7),
    ('N', 7),
    ('S', 6),
    ('H', 6),
    ('R', 6),
    ('D', 4),
    ('L', 4),
    ('C', 3),
    ('U', 3),
    ('M', 2),
    ('W', 2),
    ('F', 2),
    ('G', 2),
    ('Y', 2),
    ('P', 2),
    ('B', 1),
    ('V', 1),
    ('K', 1),
    ('J', 1),
    ('X', 1),
    ('Q', 1),
    ('Z', 1),
];

/// Physical page in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    /// Page width
    pub width: u32,
    /// Page height
    pub height: u32,
    /// Margin on every side as a fraction of page width
    pub margin_percent: f64,
    /// Resolution used for physical sizes
    pub dpi: f64,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::a4(DEFAULT_BOUNDARY_PERCENT)
    }
}

impl PageSpec {
    /// A4 portrait at 200 DPI
    pub const fn a4(margin_percent: f64) -> Self {
        Self {
            width: A4_WIDTH_PX,
            height: A4_HEIGHT_PX,
            margin_percent,
            dpi: SHEET_DPI,
        }
    }

    /// Margin in pixels
    pub fn margin(&self) -> f64 {
        f64::from(self.width) * self.margin_percent.max(0.0)
    }

    /// Width inside the margins
    pub fn available_width(&self) -> f64 {
        2.0f64.mul_add(-self.margin(), f64::from(self.width))
    }

    /// Height inside the margins
    pub fn available_height(&self) -> f64 {
        2.0f64.mul_add(-self.margin(), f64::from(self.height))
    }

    /// Convert pixels to centimetres at the page resolution
    pub fn to_cm(&self, pixels: f64) -> f64 {
        pixels / (self.dpi / INCH_TO_CM)
    }
}

/// Grid fitted for one letter size
#[derive(Debug, Clone, Copy, PartialEq)]
struct GridFit {
    cols: usize,
    rows: usize,
    letter_spacing: f64,
    line_spacing: f64,
}

impl GridFit {
    const fn capacity(&self) -> usize {
        self.cols.saturating_mul(self.rows)
    }
}

fn fit_grid(
    letter_width: u32,
    letter_height: u32,
    space_multiplier: f64,
    style: &StyleConfig,
    page: &PageSpec,
) -> GridFit {
    let lw = f64::from(letter_width.max(1));
    let lh = f64::from(letter_height.max(1));
    let letter_spacing = (lw * space_multiplier * style.spacing_factor).max(0.0);
    let line_spacing = (lh * space_multiplier * style.line_spacing_factor).max(0.0);
    let count = |available: f64, size: f64, gap: f64| {
        ((available + gap) / (size + gap)).floor().max(0.0) as usize
    };
    GridFit {
        cols: count(page.available_width(), lw, letter_spacing),
        rows: count(page.available_height(), lh, line_spacing),
        letter_spacing,
        line_spacing,
    }
}

/// Realized sheet grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetLayout {
    /// Columns in the grid
    pub cols: usize,
    /// Rows in the grid
    pub rows: usize,
    /// Tiles on the sheet (`cols × rows`)
    pub capacity: usize,
    /// Letter width in pixels after shrinking
    pub letter_width: u32,
    /// Letter height in pixels after shrinking
    pub letter_height: u32,
    /// Cell width used by sheet tiles
    pub cell_width: u32,
    /// Cell height used by sheet tiles
    pub cell_height: u32,
    /// Letter width in centimetres
    pub width_cm: f64,
    /// Letter height in centimetres
    pub height_cm: f64,
    /// Horizontal gap between letters
    pub letter_spacing: f64,
    /// Vertical gap between rows
    pub line_spacing: f64,
    /// Left edge of the grid
    pub origin_x: f64,
    /// Top edge of the grid
    pub origin_y: f64,
    /// Whether the full alphabet fits
    pub fits: bool,
}

impl SheetLayout {
    /// Result for a page where not even one tile fits
    pub const fn no_fit() -> Self {
        Self {
            cols: 0,
            rows: 0,
            capacity: 0,
            letter_width: 0,
            letter_height: 0,
            cell_width: 0,
            cell_height: 0,
            width_cm: 0.0,
            height_cm: 0.0,
            letter_spacing: 0.0,
            line_spacing: 0.0,
            origin_x: 0.0,
            origin_y: 0.0,
            fits: false,
        }
    }

    /// Whether the grid holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.capacity == 0
    }

    /// Top-left corner of the letter area at a grid slot
    pub fn slot_position(&self, slot: usize) -> (f64, f64) {
        let cols = self.cols.max(1);
        let (row, col) = (slot / cols, slot % cols);
        (
            (col as f64).mul_add(f64::from(self.letter_width) + self.letter_spacing, self.origin_x),
            (row as f64).mul_add(f64::from(self.letter_height) + self.line_spacing, self.origin_y),
        )
    }
}

/// Fit a grid of letters on the page, shrinking until the alphabet fits
pub fn plan_sheet(style: &StyleConfig, page: &PageSpec) -> SheetLayout {
    if page.available_width() <= 0.0 || page.available_height() <= 0.0 {
        warn!("Page margins leave no usable area");
        return SheetLayout::no_fit();
    }

    let base_width = style.cell_width.max(1).saturating_mul(CELLS_PER_LETTER);
    let base_height = style.cell_height.max(1).saturating_mul(CELLS_PER_LETTER);
    let aspect_ratio = style.aspect_ratio();
    let space_multiplier = 2.0 * aspect_ratio.max(1.0 / aspect_ratio);

    let (mut letter_width, mut letter_height) = (base_width, base_height);
    let mut grid = fit_grid(letter_width, letter_height, space_multiplier, style, page);

    if grid.capacity() < ALPHABET_SIZE {
        debug!("Shrinking sheet letters to fit the alphabet");
        let mut scale = 1.0 - SHEET_SHRINK_STEP;
        while grid.capacity() < ALPHABET_SIZE && scale > SHEET_MIN_SCALE {
            let width = (f64::from(base_width) * scale).floor() as u32;
            let height = (f64::from(base_height) * scale).floor() as u32;
            letter_width = width.max(1);
            letter_height = height.max(1);
            grid = fit_grid(letter_width, letter_height, space_multiplier, style, page);
            if width < 1 || height < 1 {
                warn!("Sheet letters reached the 1 pixel floor");
                break;
            }
            scale -= SHEET_SHRINK_STEP;
        }
        if grid.capacity() < ALPHABET_SIZE {
            warn!(
                "Only {} letters fit on the sheet, the alphabet needs {ALPHABET_SIZE}",
                grid.capacity()
            );
        }
    }

    if grid.cols == 0 || grid.rows == 0 {
        warn!("Sheet grid has {} columns and {} rows", grid.cols, grid.rows);
        return SheetLayout::no_fit();
    }

    let grid_width = (grid.cols as f64).mul_add(
        f64::from(letter_width) + grid.letter_spacing,
        -grid.letter_spacing,
    );
    let grid_height = (grid.rows as f64).mul_add(
        f64::from(letter_height) + grid.line_spacing,
        -grid.line_spacing,
    );

    let layout = SheetLayout {
        cols: grid.cols,
        rows: grid.rows,
        capacity: grid.capacity(),
        letter_width,
        letter_height,
        cell_width: (letter_width / CELLS_PER_LETTER).max(1),
        cell_height: (letter_height / CELLS_PER_LETTER).max(1),
        width_cm: page.to_cm(f64::from(letter_width)),
        height_cm: page.to_cm(f64::from(letter_height)),
        letter_spacing: grid.letter_spacing,
        line_spacing: grid.line_spacing,
        origin_x: page.margin() + (page.available_width() - grid_width) / 2.0,
        origin_y: page.margin() + (page.available_height() - grid_height) / 2.0,
        fits: grid.capacity() >= ALPHABET_SIZE,
    };
    info!(
        "Sticker sheet: {}x{} = {} letters of {:.1}x{:.1} cm",
        layout.cols, layout.rows, layout.capacity, layout.width_cm, layout.height_cm
    );
    layout
}

/// Letters to print on a sheet holding `capacity` tiles
///
/// The alphabet comes first in order. Extra slots are shared out in
/// proportion to English letter frequency, leftovers go to the most frequent
/// letters first, and the extras are appended grouped alphabetically. Below 26
/// slots the alphabet is cut short.
pub fn letter_sequence(capacity: usize) -> String {
    if capacity <= ALPHABET_SIZE {
        if capacity < ALPHABET_SIZE {
            warn!("Sheet holds {capacity} letters, printing a partial alphabet");
        }
        return ALPHABET.chars().take(capacity).collect();
    }

    let remaining = capacity - ALPHABET_SIZE;
    let weight_total: u32 = LETTER_FREQUENCIES.iter().map(|&(_, weight)| weight).sum();
    let mut extras = [0usize; ALPHABET_SIZE];
    let mut added = 0;

    for &(letter, weight) in &LETTER_FREQUENCIES {
        if added >= remaining {
            break;
        }
        let share = f64::from(weight) / f64::from(weight_total.max(1));
        let ideal = (share * remaining as f64).round() as usize;
        let addition = ideal.min(remaining - added);
        if let Some(count) = extras.get_mut(alphabet_index(letter)) {
            *count += addition;
        }
        added += addition;
    }

    for &(letter, _) in LETTER_FREQUENCIES.iter().cycle() {
        if added >= remaining {
            break;
        }
        if let Some(count) = extras.get_mut(alphabet_index(letter)) {
            *count += 1;
        }
        added += 1;
    }

    let mut sequence = String::with_capacity(capacity);
    sequence.push_str(ALPHABET);
    for (letter, &count) in ALPHABET.chars().zip(extras.iter()) {
        sequence.extend(std::iter::repeat_n(letter, count));
    }
    sequence
}

fn alphabet_index(letter: char) -> usize {
    (letter as usize).saturating_sub('A' as usize)
}

/// Pack a sheet and create one tile per sequence letter in row-major order
///
/// Every tile gets an independent random image, seed, crop and fonts.
pub fn pack_sheet<R: Rng>(
    style: &StyleConfig,
    page: &PageSpec,
    pool: &ImagePool,
    fonts: &FontLibrary,
    rng: &mut R,
) -> (SheetLayout, Vec<Tile>) {
    let layout = plan_sheet(style, page);
    if layout.is_empty() {
        return (layout, Vec::new());
    }

    let geometry = TileGeometry::new(
        layout.cell_width,
        layout.cell_height,
        style.noise_amount,
        style.margin_factor,
    );
    let tiles = letter_sequence(layout.capacity)
        .chars()
        .take(layout.capacity)
        .enumerate()
        .map(|(slot, character)| {
            let (x, y) = layout.slot_position(slot);
            let image_index = below(rng, pool.len());
            let mut tile = Tile::new(
                character,
                x,
                y,
                &geometry,
                (layout.cell_width, layout.cell_height),
                image_index,
                pool,
                rng,
            );
            tile.text_index = slot;
            tile.fonts = FontAssignment::choose(fonts, rng);
            tile
        })
        .collect();
    (layout, tiles)
}

//! Greedy text flow: line breaking, centring, capacity and tile reuse
//!
//! Characters are packed left to right into lines of fixed-width letters. The
//! block of lines is centred vertically and each line is centred on its own.
//! The same packing arithmetic drives the capacity query, so text that passes
//! the capacity check always fits.

use crate::glyph::font::FontLibrary;
use crate::io::configuration::CELLS_PER_LETTER;
use crate::io::style::StyleConfig;
use crate::layout::tile::{FontAssignment, Tile, TileGeometry};
use crate::math::random::below;
use crate::source::ImagePool;
use log::{debug, warn};
use rand::Rng;
use std::collections::HashMap;

/// Canvas size and the boundary kept clear on every side
///
/// The boundary is a fraction of the canvas width on both axes, so a
/// 1000x600 canvas at 5% keeps 900x500 usable, not 900x540.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasArea {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Boundary width in pixels
    pub boundary: f64,
}

impl CanvasArea {
    /// Canvas with a boundary of `boundary_percent × width` on each side
    pub fn new(width: u32, height: u32, boundary_percent: f64) -> Self {
        let width = f64::from(width);
        Self {
            width,
            height: f64::from(height),
            boundary: width * boundary_percent.max(0.0),
        }
    }

    /// Width available to text
    pub fn usable_width(&self) -> f64 {
        2.0f64.mul_add(-self.boundary, self.width)
    }

    /// Height available to text
    pub fn usable_height(&self) -> f64 {
        2.0f64.mul_add(-self.boundary, self.height)
    }
}

/// Letter and spacing sizes derived from a style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterMetrics {
    /// Width of one letter (3 cells)
    pub letter_width: f64,
    /// Height of one letter (3 cells)
    pub letter_height: f64,
    /// Gap between letters on a line
    pub letter_spacing: f64,
    /// Gap between lines
    pub line_spacing: f64,
}

impl LetterMetrics {
    /// Metrics for a style
    pub fn for_style(style: &StyleConfig) -> Self {
        let letter_width = f64::from(style.cell_width) * f64::from(CELLS_PER_LETTER);
        let letter_height = f64::from(style.cell_height) * f64::from(CELLS_PER_LETTER);
        Self {
            letter_width,
            letter_height,
            letter_spacing: letter_width * style.spacing_factor,
            line_spacing: letter_height * style.line_spacing_factor,
        }
    }

    /// Vertical distance between consecutive line tops
    pub fn line_height(&self) -> f64 {
        self.letter_height + self.line_spacing
    }

    /// Width of a line holding `count` letters
    pub fn line_width(&self, count: usize) -> f64 {
        let count = count as f64;
        count.mul_add(self.letter_width, (count - 1.0).max(0.0) * self.letter_spacing)
    }

    /// Height of a block of `lines` lines
    pub fn block_height(&self, lines: usize) -> f64 {
        let lines = lines as f64;
        lines.mul_add(self.letter_height, (lines - 1.0).max(0.0) * self.line_spacing)
    }
}

/// Largest grid of characters a canvas can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    /// Letters per line
    pub chars_per_line: usize,
    /// Lines per canvas
    pub max_lines: usize,
}

impl Capacity {
    /// Total characters, the hard limit on input length
    pub const fn total(&self) -> usize {
        self.chars_per_line.saturating_mul(self.max_lines)
    }
}

/// Simulate greedy packing of a single representative letter
///
/// The first letter and the first line always count, so the result is at
/// least 1 x 1.
pub fn max_capacity(style: &StyleConfig, usable_width: f64, usable_height: f64) -> Capacity {
    let metrics = LetterMetrics::for_style(style);
    let step = metrics.letter_width + metrics.letter_spacing;

    let mut chars_per_line = 1;
    let mut running_width = metrics.letter_width;
    while step > 0.0 && running_width + step <= usable_width {
        chars_per_line += 1;
        running_width += step;
    }

    let mut max_lines = 1;
    while metrics.letter_height > 0.0 && metrics.block_height(max_lines + 1) <= usable_height {
        max_lines += 1;
    }

    let capacity = Capacity {
        chars_per_line,
        max_lines,
    };
    debug!(
        "Capacity for {usable_width}x{usable_height}: {chars_per_line} per line x {max_lines} lines = {}",
        capacity.total()
    );
    capacity
}

/// Keep the first `limit` characters
pub fn truncate_to_capacity(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Break `count` letters into lines, returning text indices per line
///
/// A letter wraps when it would overflow the usable width, unless its line is
/// still empty.
pub fn break_lines(count: usize, metrics: &LetterMetrics, usable_width: f64) -> Vec<Vec<usize>> {
    let mut lines = Vec::new();
    let mut current: Vec<usize> = Vec::new();
    let mut current_width = 0.0;

    for index in 0..count {
        let advance = if current.is_empty() {
            metrics.letter_width
        } else {
            metrics.letter_width + metrics.letter_spacing
        };
        if !current.is_empty() && current_width + advance > usable_width {
            lines.push(std::mem::take(&mut current));
            current_width = metrics.letter_width;
        } else {
            current_width += advance;
        }
        current.push(index);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Where one character of the text lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Character at this position
    pub character: char,
    /// Index in the text
    pub text_index: usize,
    /// Left edge of the letter area
    pub x: f64,
    /// Top edge of the letter area
    pub y: f64,
}

/// Position every character of `text` on the canvas
pub fn place_text(text: &str, style: &StyleConfig, area: &CanvasArea) -> Vec<Placement> {
    let characters: Vec<char> = text.chars().collect();
    let metrics = LetterMetrics::for_style(style);
    let lines = break_lines(characters.len(), &metrics, area.usable_width());

    let start_y = area.boundary + (area.usable_height() - metrics.block_height(lines.len())) / 2.0;
    let mut placements = Vec::with_capacity(characters.len());
    for (line_index, line) in lines.iter().enumerate() {
        let start_x = area.boundary + (area.usable_width() - metrics.line_width(line.len())) / 2.0;
        let y = (line_index as f64).mul_add(metrics.line_height(), start_y);
        for (column, &text_index) in line.iter().enumerate() {
            let Some(&character) = characters.get(text_index) else {
                continue;
            };
            placements.push(Placement {
                character,
                text_index,
                x: (column as f64).mul_add(metrics.letter_width + metrics.letter_spacing, start_x),
                y,
            });
        }
    }
    placements
}

/// Shared inputs for building tiles
#[derive(Debug, Clone, Copy)]
pub struct FlowContext<'a> {
    /// Current style snapshot
    pub style: &'a StyleConfig,
    /// Canvas region
    pub area: &'a CanvasArea,
    /// Active image pool
    pub pool: &'a ImagePool,
    /// Font collections
    pub fonts: &'a FontLibrary,
}

/// Lay out `text` as tiles, inheriting appearance from `previous`
///
/// Text beyond capacity is truncated. A previous tile with the same character
/// at the same text index passes on its image index, seed, crop and fonts;
/// every other character gets fresh random assignments.
pub fn layout<R: Rng>(
    text: &str,
    context: &FlowContext<'_>,
    previous: &[Tile],
    rng: &mut R,
) -> Vec<Tile> {
    let FlowContext {
        style,
        area,
        pool,
        fonts,
    } = *context;
    if area.usable_width() <= 0.0 || area.usable_height() <= 0.0 {
        warn!("Canvas leaves no usable area, nothing to lay out");
        return Vec::new();
    }

    let limit = max_capacity(style, area.usable_width(), area.usable_height()).total();
    let length = text.chars().count();
    let text = if length > limit {
        warn!("Text of {length} characters truncated to capacity {limit}");
        truncate_to_capacity(text, limit)
    } else {
        text.to_string()
    };

    let reusable: HashMap<(char, usize), &Tile> = previous
        .iter()
        .map(|tile| ((tile.character, tile.text_index), tile))
        .collect();
    let geometry = TileGeometry::for_style(style);
    let cell_size = (style.cell_width, style.cell_height);

    place_text(&text, style, area)
        .into_iter()
        .map(|placement| {
            let mut tile = match reusable.get(&(placement.character, placement.text_index)) {
                Some(&existing) => {
                    let mut tile = existing.clone();
                    tile.move_to(placement.x, placement.y);
                    tile.cell_width = cell_size.0;
                    tile.cell_height = cell_size.1;
                    tile.revalidate(pool, &geometry, rng);
                    tile
                }
                None => {
                    let image_index = below(rng, pool.len());
                    let mut tile = Tile::new(
                        placement.character,
                        placement.x,
                        placement.y,
                        &geometry,
                        cell_size,
                        image_index,
                        pool,
                        rng,
                    );
                    tile.fonts = FontAssignment::choose(fonts, rng);
                    tile
                }
            };
            tile.text_index = placement.text_index;
            tile
        })
        .collect()
}

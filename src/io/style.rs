//! User-editable style parameters with bounds enforcement and TOML loading

use crate::io::configuration::{
    CELL_SIZE_STEP, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_END_COLOR,
    DEFAULT_LINE_SPACING, DEFAULT_MARGIN_FACTOR, DEFAULT_NOISE, DEFAULT_SPACING,
    DEFAULT_START_COLOR, MAX_CELL_SIZE, MAX_LINE_SPACING, MAX_MARGIN_FACTOR, MAX_NOISE,
    MAX_SPACING, MIN_CELL_SIZE, MIN_LINE_SPACING, MIN_NOISE, MIN_SPACING,
};
use crate::io::error::{Result, TypocutError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where glyph shapes come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GlyphSource {
    /// 3x3 grids of procedural primitives
    #[default]
    Procedural,
    /// Fonts shipped alongside the application
    BuiltInFonts,
    /// Fonts supplied by the user
    UploadedFonts,
}

impl GlyphSource {
    /// Whether glyphs are drawn from a font rather than primitives
    pub const fn is_font(self) -> bool {
        matches!(self, Self::BuiltInFonts | Self::UploadedFonts)
    }
}

/// Style snapshot threaded through layout and rendering
///
/// Every factor stays within its documented bounds after [`StyleConfig::sanitize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StyleConfig {
    /// Width of one primitive cell in pixels
    pub cell_width: u32,
    /// Height of one primitive cell in pixels
    pub cell_height: u32,
    /// Vertex jitter and distortion intensity
    pub noise_amount: f64,
    /// Letter spacing as a fraction of letter width
    pub spacing_factor: f64,
    /// Line spacing as a fraction of letter height
    pub line_spacing_factor: f64,
    /// Tile margin as a fraction of letter size
    pub margin_factor: f64,
    /// Cut glyphs out of a filled block instead of filling them
    pub inverted_mask: bool,
    /// Glyph shape provider
    pub glyph_source: GlyphSource,
    /// Gradient start color, written as `#RRGGBB`
    #[serde(with = "hex_color")]
    pub start_color: [u8; 3],
    /// Gradient end color, written as `#RRGGBB`
    #[serde(with = "hex_color")]
    pub end_color: [u8; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
            noise_amount: DEFAULT_NOISE,
            spacing_factor: DEFAULT_SPACING,
            line_spacing_factor: DEFAULT_LINE_SPACING,
            margin_factor: DEFAULT_MARGIN_FACTOR,
            inverted_mask: false,
            glyph_source: GlyphSource::Procedural,
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
        }
    }
}

impl StyleConfig {
    /// Load a style from a TOML file; missing keys keep their defaults
    ///
    /// The loaded style is sanitized before it is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| TypocutError::FileSystem {
            path: path.to_path_buf(),
            operation: "read style file",
            source: e,
        })?;
        let style: Self = toml::from_str(&contents).map_err(|e| TypocutError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(style.sanitize())
    }

    /// Snap cell sizes to the step grid and clamp every field into bounds
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            cell_width: snap_cell_size(self.cell_width),
            cell_height: snap_cell_size(self.cell_height),
            noise_amount: clamp_factor(self.noise_amount, MIN_NOISE, MAX_NOISE, DEFAULT_NOISE),
            spacing_factor: clamp_factor(
                self.spacing_factor,
                MIN_SPACING,
                MAX_SPACING,
                DEFAULT_SPACING,
            ),
            line_spacing_factor: clamp_factor(
                self.line_spacing_factor,
                MIN_LINE_SPACING,
                MAX_LINE_SPACING,
                DEFAULT_LINE_SPACING,
            ),
            margin_factor: clamp_factor(
                self.margin_factor,
                0.0,
                MAX_MARGIN_FACTOR,
                DEFAULT_MARGIN_FACTOR,
            ),
            ..self
        }
    }

    /// Cell width and height over height, used by sheet packing
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.cell_width.max(1)) / f64::from(self.cell_height.max(1))
    }
}

// Rounds to the nearest step (half up), then clamps
fn snap_cell_size(value: u32) -> u32 {
    let snapped = value.saturating_add(CELL_SIZE_STEP / 2) / CELL_SIZE_STEP * CELL_SIZE_STEP;
    num_traits::clamp(snapped, MIN_CELL_SIZE, MAX_CELL_SIZE)
}

fn clamp_factor(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        num_traits::clamp(value, min, max)
    } else {
        fallback
    }
}

/// Parse `#RGB` or `#RRGGBB` (leading `#` optional) into an RGB triple
///
/// # Errors
///
/// Returns an error if the string has the wrong length or non-hex digits
pub fn parse_hex_color(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || {
        crate::io::error::invalid_parameter("color", &hex, &"expected #RGB or #RRGGBB")
    };

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format an RGB triple as `#RRGGBB`
pub fn format_hex_color([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse a hex color, falling back to black with a warning
pub fn hex_color_or_black(hex: &str) -> [u8; 3] {
    parse_hex_color(hex).unwrap_or_else(|err| {
        warn!("{err}, using black");
        [0, 0, 0]
    })
}

// Style files carry colors as hex strings
mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        color: &[u8; 3],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex_color(*color))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[u8; 3], D::Error> {
        let hex = String::deserialize(deserializer)?;
        Ok(super::hex_color_or_black(&hex))
    }
}

//! Style bounds, layout constants and runtime configuration defaults

// Glyph grid
/// Number of primitive cells along each axis of a glyph
pub const CELLS_PER_LETTER: u32 = 3;
/// Length of a glyph definition string (nine 2-character codes)
pub const DEFINITION_LENGTH: usize = 18;

// Style bounds, matching the interactive controls
/// Smallest allowed cell edge in pixels
pub const MIN_CELL_SIZE: u32 = 20;
/// Largest allowed cell edge in pixels
pub const MAX_CELL_SIZE: u32 = 200;
/// Cell sizes snap to multiples of this step
pub const CELL_SIZE_STEP: u32 = 5;
/// Lower bound for vertex jitter and distortion
pub const MIN_NOISE: f64 = 0.0;
/// Upper bound for vertex jitter and distortion
pub const MAX_NOISE: f64 = 0.5;
/// Lower bound for letter spacing as a fraction of letter width
pub const MIN_SPACING: f64 = 0.0;
/// Upper bound for letter spacing as a fraction of letter width
pub const MAX_SPACING: f64 = 1.0;
/// Lower bound for line spacing as a fraction of letter height
pub const MIN_LINE_SPACING: f64 = 0.1;
/// Upper bound for line spacing as a fraction of letter height
pub const MAX_LINE_SPACING: f64 = 0.5;
/// Upper bound for the tile margin factor
pub const MAX_MARGIN_FACTOR: f64 = 0.5;

// Style defaults
/// Default cell width in pixels
pub const DEFAULT_CELL_WIDTH: u32 = 30;
/// Default cell height in pixels (2:1 letters)
pub const DEFAULT_CELL_HEIGHT: u32 = 60;
/// Default jitter intensity
pub const DEFAULT_NOISE: f64 = 0.10;
/// Default letter spacing factor
pub const DEFAULT_SPACING: f64 = 0.15;
/// Default line spacing factor
pub const DEFAULT_LINE_SPACING: f64 = 0.1;
/// Default tile margin factor
pub const DEFAULT_MARGIN_FACTOR: f64 = 0.05;
/// Default gradient start color
pub const DEFAULT_START_COLOR: [u8; 3] = [0xD3, 0xF1, 0x1E];
/// Default gradient end color
pub const DEFAULT_END_COLOR: [u8; 3] = [0xFF, 0xAD, 0xCF];

// Canvas defaults
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1200;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;
/// Canvas boundary on each side as a fraction of canvas width
pub const DEFAULT_BOUNDARY_PERCENT: f64 = 0.01;
/// Default render density (surface pixels per layout pixel)
pub const DEFAULT_DENSITY: u32 = 1;
/// Highest accepted render density
pub const MAX_DENSITY: u32 = 8;

// Source pools
/// Number of procedural gradient images
pub const GRADIENT_COUNT: usize = 4;
/// Edge length of each gradient image
pub const GRADIENT_SIZE: u32 = MAX_CELL_SIZE * CELLS_PER_LETTER;
/// Maximum number of uploaded images kept in the pool
pub const MAX_UPLOADED_IMAGES: usize = 10;
/// Largest accepted image file in bytes
pub const MAX_IMAGE_FILE_BYTES: u64 = 2_621_440;
/// Maximum number of uploaded fonts
pub const MAX_UPLOADED_FONTS: usize = 10;
/// Largest accepted font file in bytes
pub const MAX_FONT_FILE_BYTES: u64 = 1_048_576;
/// Extensions recognised as font files
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

// Randomness
/// Fixed seed for reproducible renders
pub const DEFAULT_SEED: u64 = 42;
/// Exclusive upper bound for per-tile noise seeds
pub const TILE_SEED_RANGE: u64 = 1_000_000;

// Sticker sheet (A4 at 200 DPI)
/// Page width in pixels
pub const A4_WIDTH_PX: u32 = 1654;
/// Page height in pixels
pub const A4_HEIGHT_PX: u32 = 2339;
/// Page resolution
pub const SHEET_DPI: f64 = 200.0;
/// Centimetres per inch
pub const INCH_TO_CM: f64 = 2.54;
/// Letters a sheet must hold to carry the full alphabet
pub const ALPHABET_SIZE: usize = 26;
/// Tile size reduction per shrink step
pub const SHEET_SHRINK_STEP: f64 = 0.05;
/// Shrinking stops once the scale reaches this value
pub const SHEET_MIN_SCALE: f64 = 0.1;

// Rendering
/// Segments used to approximate half an ellipse
pub const ARC_SEGMENTS: usize = 20;
/// Initial font size relative to letter height
pub const FONT_SIZE_RATIO: f32 = 0.8;
/// Fraction of the surface width a font glyph may occupy
pub const FONT_WIDTH_LIMIT: f32 = 0.95;
/// Upward shift of font glyphs relative to their size
pub const FONT_VERTICAL_OFFSET: f32 = 0.1;
/// Progress bars are shown only for passes with at least this many tiles
pub const PROGRESS_MIN_TILES: usize = 32;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Default canvas output file
pub const DEFAULT_RENDER_OUTPUT: &str = "typocut.png";
/// Default sticker sheet output file
pub const DEFAULT_SHEET_OUTPUT: &str = "sticker_sheet.png";

//! Generative typography: text rendered as tiles of image fragments cut by procedural glyph masks
//!
//! Each character maps to a 3x3 grid of jittered primitive shapes (or a font
//! glyph). The resulting mask selects a cropped window of a gradient or photo,
//! and tiles are flowed into centred lines on a canvas or packed onto a
//! printable sticker sheet.

#![forbid(unsafe_code)]

/// Glyph definitions, primitive shapes, masks and fonts
pub mod glyph;
/// Input/output operations and error handling
pub mod io;
/// Tile records, text flow, sheet packing and the layout engine
pub mod layout;
/// Mathematical utilities for interpolation and seeded randomness
pub mod math;
/// Compositing, distortion and render passes
pub mod render;
/// Gradient and uploaded source images
pub mod source;

pub use io::error::{Result, TypocutError};

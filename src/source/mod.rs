//! Source images that glyph tiles are cut from

/// Procedural gradient generation
pub mod gradient;
/// Active image pool and source switching
pub mod pool;

pub use pool::{ImagePool, ImageSource};

//! Glyph shapes and opacity masks
//!
//! This module contains:
//! - Procedural primitive shapes
//! - Character to primitive-grid definitions
//! - Mask compilation for procedural and font glyphs
//! - Font providers

/// Character to 18-character primitive grid lookup
pub mod definitions;
/// Font glyph providers and font collections
pub mod font;
/// Mask surfaces and glyph compilation
pub mod mask;
/// Jittered primitive shape generators
pub mod primitives;

pub use mask::{MaskSurface, PaintMode};

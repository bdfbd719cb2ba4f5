//! Tile compositing and render passes
//!
//! This module contains:
//! - Mask and source-image compositing
//! - Domain-warp distortion
//! - Shared scratch surfaces
//! - Canvas render passes with per-tile outcomes

/// Canvas render passes and tile outcomes
pub mod canvas;
/// Mask plus crop compositing
pub mod compositor;
/// Domain-warp displacement
pub mod distortion;
/// Reusable scratch surfaces
pub mod scratch;

pub use canvas::{RenderContext, RenderReport, Renderer, TileOutcome};

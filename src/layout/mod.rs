//! Tile layout on canvases and sticker sheets
//!
//! This module contains:
//! - Tile records and tile geometry
//! - Greedy text flow with capacity limits
//! - Sticker sheet packing
//! - The stateful layout engine

/// Layout engine owning text, tiles and sources
pub mod engine;
/// Greedy line flow, centring and capacity
pub mod flow;
/// Alphabet sticker sheet packing
pub mod sheet;
/// Tile records and margins
pub mod tile;

pub use engine::{EngineConfig, LayoutEngine};
pub use tile::{Tile, TileGeometry};

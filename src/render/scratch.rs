//! Reusable per-pass scratch surfaces
//!
//! One mask surface and one image section are shared by every tile in a
//! render pass. `acquire` hands out both as mutable borrows, so a tile must
//! finish with them before the next tile can acquire.

use crate::glyph::MaskSurface;
use crate::io::error::Result;
use image::{Rgba, RgbaImage};

/// Mask and image-section buffers reused across tiles
#[derive(Debug, Clone)]
pub struct ScratchSurfaces {
    mask: MaskSurface,
    section: RgbaImage,
}

/// Both scratch buffers, cleared and sized for one tile
#[derive(Debug)]
pub struct TileScratch<'a> {
    /// Cleared mask surface
    pub mask: &'a mut MaskSurface,
    /// Cleared image section
    pub section: &'a mut RgbaImage,
}

impl ScratchSurfaces {
    /// Create minimal buffers; they grow on first use
    ///
    /// # Errors
    ///
    /// Returns an error if the rasterizer cannot allocate a 1x1 surface
    pub fn new() -> Result<Self> {
        Ok(Self {
            mask: MaskSurface::new(1, 1)?,
            section: RgbaImage::new(1, 1),
        })
    }

    /// Clear both buffers and resize them when the tile size changed
    ///
    /// # Errors
    ///
    /// Returns an error if a surface of the requested size cannot be allocated
    pub fn acquire(&mut self, width: u32, height: u32) -> Result<TileScratch<'_>> {
        self.mask.reset(width, height)?;
        if self.section.dimensions() == (width, height) {
            for pixel in self.section.pixels_mut() {
                *pixel = Rgba([0, 0, 0, 0]);
            }
        } else {
            self.section = RgbaImage::new(width, height);
        }
        Ok(TileScratch {
            mask: &mut self.mask,
            section: &mut self.section,
        })
    }
}

//! Combine a glyph mask with a cropped source-image window into an RGBA tile

use crate::glyph::MaskSurface;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Source rectangle actually read for a crop request
///
/// The window is shrunk so it never reads outside the image; a crop that
/// starts outside the image yields an empty window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropWindow {
    /// Left edge in source pixels
    pub x: u32,
    /// Top edge in source pixels
    pub y: u32,
    /// Width in source pixels
    pub width: u32,
    /// Height in source pixels
    pub height: u32,
}

impl CropWindow {
    /// Clamp a `size` window at `offset` to the bounds of an image
    pub const fn clamped(image_size: (u32, u32), offset: (u32, u32), size: (u32, u32)) -> Self {
        let available_width = image_size.0.saturating_sub(offset.0);
        let available_height = image_size.1.saturating_sub(offset.1);
        Self {
            x: offset.0,
            y: offset.1,
            width: if size.0 < available_width {
                size.0
            } else {
                available_width
            },
            height: if size.1 < available_height {
                size.1
            } else {
                available_height
            },
        }
    }

    /// Whether nothing can be copied
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Copy a crop window of `source` into `section`, stretched to fill it
///
/// An empty window leaves `section` untouched.
pub fn copy_section(source: &RgbaImage, window: CropWindow, section: &mut RgbaImage) {
    if window.is_empty() {
        return;
    }
    let cropped =
        imageops::crop_imm(source, window.x, window.y, window.width, window.height).to_image();
    if section.dimensions() == cropped.dimensions() {
        imageops::replace(section, &cropped, 0, 0);
    } else {
        let scaled = imageops::resize(
            &cropped,
            section.width(),
            section.height(),
            FilterType::Triangle,
        );
        imageops::replace(section, &scaled, 0, 0);
    }
}

/// Replace the alpha channel of `section` with mask coverage
pub fn apply_mask(section: &mut RgbaImage, mask: &MaskSurface) {
    for (x, y, pixel) in section.enumerate_pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        *pixel = Rgba([r, g, b, mask.coverage(x, y)]);
    }
}

/// Composite a mask over a crop of `source` into a new tile image
///
/// `window_size` is measured in source pixels; the result has the mask's size.
pub fn composite(
    mask: &MaskSurface,
    source: &RgbaImage,
    crop: (u32, u32),
    window_size: (u32, u32),
) -> RgbaImage {
    let mut section = RgbaImage::new(mask.width(), mask.height());
    composite_into(mask, source, crop, window_size, &mut section);
    section
}

/// Composite into an existing, cleared section buffer of the mask's size
pub fn composite_into(
    mask: &MaskSurface,
    source: &RgbaImage,
    crop: (u32, u32),
    window_size: (u32, u32),
    section: &mut RgbaImage,
) {
    let window = CropWindow::clamped(source.dimensions(), crop, window_size);
    copy_section(source, window, section);
    apply_mask(section, mask);
}

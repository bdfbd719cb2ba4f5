//! Procedural two-color gradient images

use crate::io::configuration::{GRADIENT_COUNT, GRADIENT_SIZE};
use crate::math::interpolation::lerp_rgb;
use image::{Rgba, RgbaImage};

/// Direction of a gradient ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Centre outwards
    Radial,
    /// Top-left to bottom-right
    Diagonal,
}

impl GradientKind {
    /// Kind used for the gradient at `index`, cycling every four images
    pub const fn for_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Horizontal,
            1 => Self::Vertical,
            2 => Self::Radial,
            _ => Self::Diagonal,
        }
    }

    /// Blend ratio in `[0, 1]` at a pixel
    pub fn ratio(self, x: u32, y: u32, width: u32, height: u32) -> f64 {
        let (x, y) = (f64::from(x), f64::from(y));
        let (w, h) = (f64::from(width.max(1)), f64::from(height.max(1)));
        let ratio = match self {
            Self::Horizontal => x / w,
            Self::Vertical => y / h,
            Self::Radial => {
                let distance = (x - w / 2.0).hypot(y - h / 2.0);
                let max_distance = (w / 2.0).hypot(h / 2.0);
                distance / max_distance
            }
            Self::Diagonal => (x + y) / (w + h),
        };
        ratio.clamp(0.0, 1.0)
    }
}

/// Render one opaque gradient image
pub fn render_gradient(
    kind: GradientKind,
    start: [u8; 3],
    end: [u8; 3],
    width: u32,
    height: u32,
) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b] = lerp_rgb(start, end, kind.ratio(x, y, width, height));
        Rgba([r, g, b, 255])
    })
}

/// Render the standard gradient set for a color pair
pub fn gradient_set(start: [u8; 3], end: [u8; 3]) -> Vec<RgbaImage> {
    (0..GRADIENT_COUNT)
        .map(|index| {
            render_gradient(
                GradientKind::for_index(index),
                start,
                end,
                GRADIENT_SIZE,
                GRADIENT_SIZE,
            )
        })
        .collect()
}

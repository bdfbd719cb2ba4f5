//! Procedural primitive shapes for the 3x3 glyph grid
//!
//! Every primitive turns a cell rectangle into a closed polygon (cutouts add
//! an inner contour) whose vertices are jittered by up to `width * noise` and
//! `height * noise`. All jitter is drawn from the caller's random stream in a
//! fixed order, so the same stream state reproduces the same vertices.

use crate::glyph::mask::{MaskSurface, PaintMode};
use crate::io::configuration::ARC_SEGMENTS;
use crate::math::random::jitter;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI};

/// Cell rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl CellRect {
    /// Create a cell rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    const fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }
}

/// Closed polygon, optionally with a hole
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Outer contour in surface pixels
    pub outline: Vec<[f32; 2]>,
    /// Inner contour removed from the outline (even-odd fill)
    pub hole: Option<Vec<[f32; 2]>>,
}

/// One of the twelve primitive shapes a glyph cell can hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Half-ellipse dome standing on the cell's bottom edge
    Arc {
        /// Rotation about the cell centre in radians
        rotation: f32,
    },
    /// Axis-aligned quad filling the cell
    Rectangle,
    /// Right triangle with its right angle in one corner
    Triangle {
        /// Rotation about the cell centre in radians
        rotation: f32,
        /// Horizontal mirror (1 or -1) applied before rotation
        flip: f32,
    },
    /// Quad with a notch pulled into its top edge
    Polygon {
        /// Rotation about the cell centre in radians
        rotation: f32,
    },
    /// Block with a half-ellipse bitten out of one edge
    Cutout {
        /// Rotation about the cell centre in radians
        rotation: f32,
        /// Swap width and height before rotating (quarter turns)
        swap: bool,
    },
}

impl Primitive {
    /// Decode a 2-character primitive code
    ///
    /// Returns `None` for the empty code `00` and for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let primitive = match code {
            "01" => Self::Arc { rotation: 0.0 },
            "02" => Self::Arc { rotation: PI },
            "10" => Self::Rectangle,
            "20" => Self::Triangle {
                rotation: PI,
                flip: 1.0,
            },
            "21" => Self::Triangle {
                rotation: PI,
                flip: -1.0,
            },
            "22" => Self::Triangle {
                rotation: 0.0,
                flip: 1.0,
            },
            "23" => Self::Triangle {
                rotation: 0.0,
                flip: -1.0,
            },
            "30" => Self::Polygon { rotation: 0.0 },
            "31" => Self::Polygon { rotation: PI },
            "11" => Self::Cutout {
                rotation: 0.0,
                swap: false,
            },
            "12" => Self::Cutout {
                rotation: PI,
                swap: false,
            },
            "13" => Self::Cutout {
                rotation: -FRAC_PI_2,
                swap: true,
            },
            "14" => Self::Cutout {
                rotation: FRAC_PI_2,
                swap: true,
            },
            _ => return None,
        };
        Some(primitive)
    }

    /// Generate the jittered shape for a cell
    ///
    /// Returns `None` when the cell has no area.
    pub fn shape<R: Rng>(&self, rect: CellRect, noise: f32, rng: &mut R) -> Option<Shape> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let shape = match *self {
            Self::Arc { rotation } => arc(rect, noise, rotation, rng),
            Self::Rectangle => rectangle(rect, noise, rng),
            Self::Triangle { rotation, flip } => triangle(rect, noise, rotation, flip, rng),
            Self::Polygon { rotation } => polygon(rect, noise, rotation, rng),
            Self::Cutout { rotation, swap } => return cutout(rect, noise, rotation, swap, rng),
        };
        Some(shape)
    }

    /// Generate the shape and paint it onto a mask surface
    pub fn draw<R: Rng>(
        &self,
        rect: CellRect,
        noise: f32,
        rng: &mut R,
        surface: &mut MaskSurface,
        mode: PaintMode,
    ) {
        if let Some(shape) = self.shape(rect, noise, rng) {
            surface.fill_shape(&shape, mode);
        }
    }
}

// Maps a point given relative to the cell centre into surface space:
// mirror horizontally, rotate, then translate.
fn place(center: [f32; 2], rotation: f32, flip: f32, local: [f32; 2]) -> [f32; 2] {
    let (sin, cos) = rotation.sin_cos();
    let x = local[0] * flip;
    let y = local[1];
    [
        center[0] + x.mul_add(cos, -(y * sin)),
        center[1] + x.mul_add(sin, y * cos),
    ]
}

// Points are generated in a box whose origin is its top-left corner.
fn place_from_corner(
    center: [f32; 2],
    rotation: f32,
    size: [f32; 2],
    local: [f32; 2],
) -> [f32; 2] {
    place(
        center,
        rotation,
        1.0,
        [local[0] - size[0] / 2.0, local[1] - size[1] / 2.0],
    )
}

fn arc<R: Rng>(rect: CellRect, noise: f32, rotation: f32, rng: &mut R) -> Shape {
    let (w, h) = (rect.width, rect.height);
    let center_x = w / 2.0 + jitter(rng, -w / 2.0 * noise, w / 2.0 * noise);
    let center_y = h + jitter(rng, 0.0, h / 2.0 * noise);
    let radius_x = (w / 2.0 + jitter(rng, 0.0, w * noise)).ceil();
    let radius_y = (h / 2.0 + jitter(rng, 0.0, h * noise)).ceil();

    let step = PI / ARC_SEGMENTS as f32;
    let outline = (0..=ARC_SEGMENTS + 1)
        .map(|i| {
            let angle = (i as f32).mul_add(step, PI);
            let local = [
                radius_x.mul_add(angle.cos(), center_x),
                radius_y.mul_add(angle.sin(), center_y),
            ];
            place_from_corner(rect.center(), rotation, [w, h], local)
        })
        .collect();

    Shape {
        outline,
        hole: None,
    }
}

fn rectangle<R: Rng>(rect: CellRect, noise: f32, rng: &mut R) -> Shape {
    let noise_x = rect.width * noise / 2.0;
    let noise_y = rect.height * noise / 2.0;
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.x + rect.width, rect.y + rect.height);

    let a = [
        (left - jitter(rng, 0.0, noise_x)).floor(),
        (top - jitter(rng, 0.0, noise_y)).floor(),
    ];
    let b = [
        (right + jitter(rng, 0.0, noise_x)).ceil(),
        (top - jitter(rng, 0.0, noise_y)).floor(),
    ];
    let c = [
        (left - jitter(rng, 0.0, noise_x)).floor(),
        (bottom + jitter(rng, 0.0, noise_y)).ceil(),
    ];
    let d = [
        (right + jitter(rng, 0.0, noise_x)).ceil(),
        (bottom + jitter(rng, 0.0, noise_y)).ceil(),
    ];

    Shape {
        outline: vec![a, b, d, c],
        hole: None,
    }
}

fn triangle<R: Rng>(rect: CellRect, noise: f32, rotation: f32, flip: f32, rng: &mut R) -> Shape {
    let (w, h) = (rect.width, rect.height);
    let noise_w = w * noise / 2.0;
    let noise_h = h * noise / 2.0;

    let first = [
        (-w / 2.0 + jitter(rng, -noise_w, 0.0)).floor(),
        (-h / 2.0 + jitter(rng, -noise_h, 0.0)).floor(),
    ];
    let second = [
        (w / 2.0 + jitter(rng, 0.0, noise_w)).ceil(),
        (-h / 2.0 + jitter(rng, -noise_h, 0.0)).floor(),
    ];
    let third = [
        (-w / 2.0 + jitter(rng, -noise_w, 0.0)).floor(),
        (h / 2.0 + jitter(rng, 0.0, noise_h)).ceil(),
    ];

    let center = rect.center();
    Shape {
        outline: [first, second, third]
            .into_iter()
            .map(|local| place(center, rotation, flip, local))
            .collect(),
        hole: None,
    }
}

fn polygon<R: Rng>(rect: CellRect, noise: f32, rotation: f32, rng: &mut R) -> Shape {
    let (w, h) = (rect.width, rect.height);
    let noise_w = w * noise / 2.0;
    let noise_h = h * noise / 2.0;

    let a = [
        (-jitter(rng, 0.0, noise_w)).floor(),
        (-jitter(rng, 0.0, noise_h)).floor(),
    ];
    let b = [
        (w + jitter(rng, 0.0, noise_w)).ceil(),
        (-jitter(rng, 0.0, noise_h)).floor(),
    ];
    // The notch sits a fixed noise-width right of centre; the draw still
    // advances the stream.
    let notch = [
        w / 2.0 + jitter(rng, noise_w, noise_w),
        jitter(rng, 0.0, noise_h),
    ];
    let c = [
        (-jitter(rng, 0.0, noise_w)).floor(),
        (h + jitter(rng, 0.0, noise_h)).ceil(),
    ];
    let d = [
        (w + jitter(rng, 0.0, noise_w)).ceil(),
        (h + jitter(rng, 0.0, noise_h)).ceil(),
    ];

    let center = rect.center();
    Shape {
        outline: [a, b, d, notch, c]
            .into_iter()
            .map(|local| place_from_corner(center, rotation, [w, h], local))
            .collect(),
        hole: None,
    }
}

fn cutout<R: Rng>(
    rect: CellRect,
    noise: f32,
    rotation: f32,
    swap: bool,
    rng: &mut R,
) -> Option<Shape> {
    let (use_w, use_h) = if swap {
        (rect.height, rect.width)
    } else {
        (rect.width, rect.height)
    };
    if use_w <= 0.0 || use_h <= 0.0 {
        return None;
    }

    let right = use_w.ceil();
    let bottom = use_h.ceil();
    let corners = [[0.0, 0.0], [right, 0.0], [right, bottom], [0.0, bottom]];

    let half_width = right / 2.0;
    let half_height = bottom / 2.0;
    let radius_x = (0.8f32.mul_add(half_width, jitter(rng, 0.0, use_w / 2.0 * noise)))
        .min(half_width)
        .max(1.0);
    let radius_y = (0.8f32.mul_add(half_height, jitter(rng, 0.0, use_h / 2.0 * noise)))
        .min(half_height)
        .max(1.0);

    let step = PI / ARC_SEGMENTS as f32;
    let bite = (0..=ARC_SEGMENTS).map(|i| {
        let angle = i as f32 * step;
        [
            radius_x.mul_add(angle.cos(), half_width),
            (-radius_y).mul_add(angle.sin(), bottom),
        ]
    });

    let center = rect.center();
    let size = [use_w, use_h];
    Some(Shape {
        outline: corners
            .into_iter()
            .map(|local| place_from_corner(center, rotation, size, local))
            .collect(),
        hole: Some(
            bite.map(|local| place_from_corner(center, rotation, size, local))
                .collect(),
        ),
    })
}

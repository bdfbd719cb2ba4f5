//! Domain-warp distortion of composited tiles
//!
//! A coarse grid of random displacement vectors is blended bilinearly across
//! the image; each output pixel copies the source pixel at its displaced,
//! wrapped coordinate. Reads come from an untouched copy, never the output.

use crate::math::interpolation::bilinear;
use image::RgbaImage;
use ndarray::Array2;
use rand::Rng;
use std::f32::consts::TAU;

/// Random displacement vectors at the corners of a coarse grid
#[derive(Debug, Clone)]
pub struct DisplacementGrid {
    nodes: Array2<[f32; 2]>,
    cols: usize,
    rows: usize,
    cell_width: f32,
    cell_height: f32,
}

impl DisplacementGrid {
    /// Build a grid of `ceil(1 + 2t)` cells per axis for an image
    ///
    /// Node vectors have a random angle and a length of half the cell size
    /// times the intensity. Nodes are drawn row by row.
    pub fn random<R: Rng>(width: u32, height: u32, intensity: f32, rng: &mut R) -> Self {
        let cells = 2.0f32.mul_add(intensity.max(0.0), 1.0).ceil().max(1.0) as usize;
        let cell_width = width as f32 / cells as f32;
        let cell_height = height as f32 / cells as f32;
        let nodes = Array2::from_shape_simple_fn((cells + 1, cells + 1), || {
            let angle = rng.random::<f32>() * TAU;
            let (sin, cos) = angle.sin_cos();
            [
                cos * cell_width * intensity * 0.5,
                sin * cell_height * intensity * 0.5,
            ]
        });
        Self {
            nodes,
            cols: cells,
            rows: cells,
            cell_width,
            cell_height,
        }
    }

    /// Cells per axis
    pub const fn cells(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn node(&self, row: usize, col: usize) -> [f32; 2] {
        self.nodes.get((row, col)).copied().unwrap_or([0.0, 0.0])
    }

    fn corners(&self, row: usize, col: usize) -> [[f32; 2]; 4] {
        [
            self.node(row, col),
            self.node(row, col + 1),
            self.node(row + 1, col),
            self.node(row + 1, col + 1),
        ]
    }

    /// Displacement at a pixel inside cell `row`, `col`
    pub fn displacement_in_cell(&self, row: usize, col: usize, x: u32, y: u32) -> [f32; 2] {
        let tx = (col as f32).mul_add(-self.cell_width, x as f32) / self.cell_width;
        let ty = (row as f32).mul_add(-self.cell_height, y as f32) / self.cell_height;
        bilinear(self.corners(row, col), tx, ty)
    }
}

/// Warp `image` in place by a random displacement field
///
/// Does nothing for a zero intensity or an empty image.
pub fn distort<R: Rng>(image: &mut RgbaImage, intensity: f32, rng: &mut R) {
    let (width, height) = image.dimensions();
    if intensity <= 0.0 || width == 0 || height == 0 {
        return;
    }
    let grid = DisplacementGrid::random(width, height, intensity, rng);
    let original = image.clone();
    let (cols, rows) = grid.cells();

    let span = |cell: usize, size: f32, limit: u32| {
        let start = (cell as f32 * size).floor() as u32;
        let end = (((cell + 1) as f32 * size).floor() as u32).min(limit);
        start..end
    };

    for row in 0..rows {
        for y in span(row, grid.cell_height, height) {
            for col in 0..cols {
                for x in span(col, grid.cell_width, width) {
                    let [dx, dy] = grid.displacement_in_cell(row, col, x, y);
                    let source_x = wrap(x as f32 + dx, width);
                    let source_y = wrap(y as f32 + dy, height);
                    let pixel = *original.get_pixel(source_x, source_y);
                    image.put_pixel(x, y, pixel);
                }
            }
        }
    }
}

// Toroidal wrap followed by truncation, clamped against float rounding at the edge
fn wrap(coordinate: f32, size: u32) -> u32 {
    let wrapped = coordinate.rem_euclid(size as f32);
    (wrapped as u32).min(size.saturating_sub(1))
}

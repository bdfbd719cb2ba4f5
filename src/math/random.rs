//! Seeded random streams and bounded jitter draws
//!
//! Each tile owns a seed; rendering re-creates the stream from that seed so
//! repeated draws of an unchanged tile consume identical random values.

use crate::io::configuration::TILE_SEED_RANGE;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Create the random stream used while drawing one tile
pub fn tile_stream(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw a fresh tile seed in `[0, TILE_SEED_RANGE)`
pub fn next_tile_seed<R: Rng>(rng: &mut R) -> u64 {
    rng.random_range(0..TILE_SEED_RANGE)
}

/// Uniform draw between `low` and `high`
///
/// Bounds may be given in either order and may coincide; a zero-width range
/// still consumes one value so the stream stays aligned across noise settings.
pub fn jitter<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    let t: f32 = rng.random();
    (high - low).mul_add(t, low)
}

/// Uniform integer draw in `[0, upper)`, or 0 when `upper` is 0
pub fn below<R: Rng>(rng: &mut R, upper: usize) -> usize {
    if upper == 0 {
        0
    } else {
        rng.random_range(0..upper)
    }
}

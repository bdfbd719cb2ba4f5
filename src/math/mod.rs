//! Mathematical utilities for rendering

/// Linear and bilinear interpolation for gradients and displacement fields
pub mod interpolation;
/// Seeded random streams and bounded jitter draws
pub mod random;

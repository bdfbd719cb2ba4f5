pub mod compositor;
pub mod distortion;

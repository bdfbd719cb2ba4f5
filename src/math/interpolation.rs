//! Linear and bilinear interpolation
//!
//! Gradients blend two colors along a scalar ratio; the distortion pass
//! blends four corner displacements across a grid cell.

/// Linear interpolation between `a` and `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    (b - a).mul_add(t, a)
}

/// Re-map `value` from `[from_low, from_high]` onto `[to_low, to_high]`
///
/// A degenerate source range maps everything to `to_low`.
pub fn map_range(value: f64, from_low: f64, from_high: f64, to_low: f64, to_high: f64) -> f64 {
    let span = from_high - from_low;
    if span == 0.0 {
        return to_low;
    }
    lerp(to_low, to_high, (value - from_low) / span)
}

/// Interpolate an RGB color channel by channel
///
/// Channels are rounded to the nearest integer and saturate at the `u8` range.
pub fn lerp_rgb(start: [u8; 3], end: [u8; 3], t: f64) -> [u8; 3] {
    let channel = |a: u8, b: u8| {
        lerp(f64::from(a), f64::from(b), t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    [
        channel(start[0], end[0]),
        channel(start[1], end[1]),
        channel(start[2], end[2]),
    ]
}

/// Bilinear blend of four corner vectors
///
/// Corners are ordered top-left, top-right, bottom-left, bottom-right;
/// `tx` and `ty` are the fractional position inside the cell.
pub fn bilinear(corners: [[f32; 2]; 4], tx: f32, ty: f32) -> [f32; 2] {
    let [[x00, y00], [x01, y01], [x10, y10], [x11, y11]] = corners;
    let blend = |top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32| {
        let top = top_left.mul_add(1.0 - tx, top_right * tx);
        let bottom = bottom_left.mul_add(1.0 - tx, bottom_right * tx);
        top.mul_add(1.0 - ty, bottom * ty)
    };
    [blend(x00, x01, x10, x11), blend(y00, y01, y10, y11)]
}

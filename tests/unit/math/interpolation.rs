//! Tests for linear, color and bilinear interpolation

#[cfg(test)]
mod tests {
    use typocut::math::interpolation::{bilinear, lerp, lerp_rgb, map_range};

    // Tests lerp hits both endpoints and the midpoint
    // Verified by swapping the endpoints
    #[test]
    fn test_lerp() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < f64::EPSILON);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < f64::EPSILON);
    }

    // Tests range mapping and the degenerate source range
    // Verified by dividing by a zero span
    #[test]
    fn test_map_range() {
        assert!((map_range(5.0, 0.0, 10.0, 100.0, 200.0) - 150.0).abs() < 1e-9);
        assert!((map_range(0.0, 0.0, 10.0, 1.0, 0.0) - 1.0).abs() < 1e-9);
        assert!((map_range(3.0, 4.0, 4.0, 7.0, 9.0) - 7.0).abs() < f64::EPSILON);
    }

    // Tests color interpolation rounds each channel
    // Verified by truncating instead of rounding
    #[test]
    fn test_lerp_rgb() {
        assert_eq!(lerp_rgb([0, 0, 0], [255, 255, 255], 0.5), [128, 128, 128]);
        assert_eq!(lerp_rgb([211, 241, 30], [255, 173, 207], 0.0), [211, 241, 30]);
        assert_eq!(lerp_rgb([211, 241, 30], [255, 173, 207], 1.0), [255, 173, 207]);
    }

    // Tests bilinear blending at corners and centre
    // Verified by swapping the top-right and bottom-left corners
    #[test]
    fn test_bilinear() {
        let corners = [[0.0, 0.0], [4.0, 0.0], [0.0, 8.0], [4.0, 8.0]];
        assert_eq!(bilinear(corners, 0.0, 0.0), [0.0, 0.0]);
        assert_eq!(bilinear(corners, 1.0, 0.0), [4.0, 0.0]);
        assert_eq!(bilinear(corners, 0.0, 1.0), [0.0, 8.0]);

        let [x, y] = bilinear(corners, 0.5, 0.25);
        assert!((x - 2.0).abs() < 1e-6);
        assert!((y - 2.0).abs() < 1e-6);
    }
}

//! Tests for procedural gradient images

#[cfg(test)]
mod tests {
    use image::Rgba;
    use typocut::io::configuration::{GRADIENT_COUNT, GRADIENT_SIZE};
    use typocut::source::gradient::{GradientKind, gradient_set, render_gradient};

    const BLACK: [u8; 3] = [0, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    // Tests the four kinds cycle with the image index
    // Verified by reordering the cycle
    #[test]
    fn test_kind_cycle() {
        assert_eq!(GradientKind::for_index(0), GradientKind::Horizontal);
        assert_eq!(GradientKind::for_index(1), GradientKind::Vertical);
        assert_eq!(GradientKind::for_index(2), GradientKind::Radial);
        assert_eq!(GradientKind::for_index(3), GradientKind::Diagonal);
        assert_eq!(GradientKind::for_index(6), GradientKind::Radial);
    }

    // Tests ratios at the start and far corners of each kind
    // Verified by measuring radial distance from the origin
    #[test]
    fn test_ratios() {
        assert!(GradientKind::Horizontal.ratio(0, 50, 100, 100).abs() < 1e-9);
        assert!((GradientKind::Horizontal.ratio(50, 0, 100, 100) - 0.5).abs() < 1e-9);
        assert!((GradientKind::Vertical.ratio(0, 25, 100, 100) - 0.25).abs() < 1e-9);
        assert!(GradientKind::Radial.ratio(50, 50, 100, 100).abs() < 1e-9);
        assert!((GradientKind::Radial.ratio(0, 0, 100, 100) - 1.0).abs() < 1e-9);
        assert!((GradientKind::Diagonal.ratio(50, 50, 100, 100) - 0.5).abs() < 1e-9);
    }

    // Tests rendered images start at the start color and are opaque
    // Verified by swapping start and end colors
    #[test]
    fn test_render_gradient_colors() {
        let image = render_gradient(GradientKind::Horizontal, BLACK, WHITE, 10, 4);
        assert_eq!(image.dimensions(), (10, 4));
        assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(*image.get_pixel(5, 3), Rgba([128, 128, 128, 255]));
        assert!(image.pixels().all(|pixel| pixel[3] == 255));

        let radial = render_gradient(GradientKind::Radial, BLACK, WHITE, 10, 10);
        assert_eq!(*radial.get_pixel(5, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(*radial.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    // Tests the standard set has four square images
    // Verified by generating a single gradient
    #[test]
    fn test_gradient_set() {
        let set = gradient_set(BLACK, WHITE);
        assert_eq!(set.len(), GRADIENT_COUNT);
        for image in &set {
            assert_eq!(image.dimensions(), (GRADIENT_SIZE, GRADIENT_SIZE));
        }
        assert_ne!(set[0].get_pixel(GRADIENT_SIZE - 1, 0), set[1].get_pixel(GRADIENT_SIZE - 1, 0));
    }
}

//! Tests for crop windows and mask compositing

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use typocut::glyph::MaskSurface;
    use typocut::glyph::mask::PaintMode;
    use typocut::render::compositor::{CropWindow, apply_mask, composite, copy_section};

    fn checker(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, 50, 255])
        })
    }

    // Tests windows inside the image are unchanged and edge windows shrink
    // Verified by returning the requested size unconditionally
    #[test]
    fn test_crop_window_clamping() {
        let inside = CropWindow::clamped((100, 100), (10, 20), (30, 40));
        assert_eq!(inside, CropWindow { x: 10, y: 20, width: 30, height: 40 });

        let edge = CropWindow::clamped((100, 100), (80, 90), (30, 40));
        assert_eq!((edge.width, edge.height), (20, 10));

        let outside = CropWindow::clamped((100, 100), (120, 0), (30, 40));
        assert!(outside.is_empty());
    }

    // Tests a same-size window is copied pixel for pixel
    // Verified by offsetting the copy by one pixel
    #[test]
    fn test_copy_section_exact() {
        let source = checker(50, 50);
        let mut section = RgbaImage::new(10, 10);
        copy_section(&source, CropWindow::clamped((50, 50), (5, 7), (10, 10)), &mut section);
        assert_eq!(*section.get_pixel(0, 0), Rgba([5, 7, 50, 255]));
        assert_eq!(*section.get_pixel(9, 9), Rgba([14, 16, 50, 255]));
    }

    // Tests a shrunken window is stretched over the whole section
    // Verified by copying without resizing
    #[test]
    fn test_copy_section_stretches() {
        let source = RgbaImage::from_pixel(20, 20, Rgba([9, 9, 9, 255]));
        let mut section = RgbaImage::new(16, 16);
        copy_section(&source, CropWindow::clamped((20, 20), (12, 12), (16, 16)), &mut section);
        assert!(section.pixels().all(|pixel| *pixel == Rgba([9, 9, 9, 255])));

        let mut untouched = RgbaImage::new(4, 4);
        copy_section(&source, CropWindow::clamped((20, 20), (30, 30), (4, 4)), &mut untouched);
        assert!(untouched.pixels().all(|pixel| pixel[3] == 0));
    }

    // Tests output alpha equals mask coverage and color comes from the source
    // Verified by multiplying alpha with the source alpha twice
    #[test]
    fn test_apply_mask_alpha() {
        let mask = MaskSurface::new(4, 4);
        assert!(mask.is_ok());
        if let Ok(mut mask) = mask {
            mask.blend_coverage(1, 1, 200, PaintMode::Fill);
            mask.blend_coverage(2, 2, 255, PaintMode::Fill);
            let mut section = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
            apply_mask(&mut section, &mask);

            assert_eq!(*section.get_pixel(1, 1), Rgba([10, 20, 30, 200]));
            assert_eq!(*section.get_pixel(2, 2), Rgba([10, 20, 30, 255]));
            assert_eq!(section.get_pixel(0, 0)[3], 0);
        }
    }

    // Tests compositing produces an image of the mask's size
    // Verified by sizing the result from the crop window
    #[test]
    fn test_composite_size() {
        if let Ok(mut mask) = MaskSurface::new(24, 12) {
            mask.fill_opaque();
            let image = composite(&mask, &checker(100, 100), (3, 4), (12, 6));
            assert_eq!(image.dimensions(), (24, 12));
            assert!(image.pixels().all(|pixel| pixel[3] == 255));
        }
    }
}

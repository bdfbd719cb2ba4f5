//! Tests for source image loading and PNG export

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;
    use typocut::TypocutError;
    use typocut::io::image::{check_file_size, load_image, load_images, save_png};

    // Tests a saved PNG loads back with identical pixels
    // Verified by saving in a lossy format
    #[test]
    fn test_save_and_load_png() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("nested/output/canvas.png");
        let image = RgbaImage::from_fn(6, 4, |x, y| Rgba([x as u8 * 40, y as u8 * 60, 7, 200]));

        save_png(&image, &path).expect("Failed to save PNG");
        assert!(path.exists());

        let loaded = load_image(&path).expect("Failed to load PNG");
        assert_eq!(loaded, image);
    }

    // Tests undecodable files report an image load error
    // Verified by mapping decode failures to file system errors
    #[test]
    fn test_load_invalid_image() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("fake.png");
        fs::write(&path, b"not really a png").expect("Failed to write file");

        assert!(matches!(
            load_image(&path),
            Err(TypocutError::ImageLoad { .. })
        ));
        assert!(load_image(&dir.path().join("missing.png")).is_err());
    }

    // Tests the size limit rejects files over the limit only
    // Verified by comparing with greater-or-equal
    #[test]
    fn test_check_file_size() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("blob.bin");
        fs::write(&path, vec![0u8; 64]).expect("Failed to write file");

        assert!(check_file_size(&path, 64).is_ok());
        assert!(matches!(
            check_file_size(&path, 63),
            Err(TypocutError::InvalidParameter { .. })
        ));
    }

    // Tests batch loading skips unreadable files
    // Verified by aborting on the first failure
    #[test]
    fn test_load_images_skips_failures() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let good = dir.path().join("good.png");
        save_png(&RgbaImage::from_pixel(3, 3, Rgba([1, 1, 1, 255])), &good)
            .expect("Failed to save PNG");
        let bad = dir.path().join("bad.png");
        fs::write(&bad, b"junk").expect("Failed to write file");

        let images = load_images(&[good.clone(), bad, good]);
        assert_eq!(images.len(), 2);
    }
}

//! Tests for font file discovery and loading

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use typocut::TypocutError;
    use typocut::io::font::{is_font_file, load_font_dir, load_font_file, load_uploaded_fonts};

    // Tests font extensions are matched case-insensitively
    // Verified by matching only lower-case extensions
    #[test]
    fn test_is_font_file() {
        assert!(is_font_file(Path::new("fonts/Serif.ttf")));
        assert!(is_font_file(Path::new("Display.OTF")));
        assert!(!is_font_file(Path::new("readme.txt")));
        assert!(!is_font_file(Path::new("ttf")));
    }

    // Tests an invalid font file names its path in the error
    // Verified by reporting the font name instead of the path
    #[test]
    fn test_load_invalid_font() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.ttf");
        fs::write(&path, b"not a font").expect("Failed to write file");

        let result = load_font_file(&path);
        assert!(matches!(&result, Err(TypocutError::FontLoad { path: p, .. }) if p == &path));
    }

    // Tests broken uploads are skipped rather than failing the batch
    // Verified by propagating the first load error
    #[test]
    fn test_uploaded_fonts_skip_failures() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.otf");
        fs::write(&path, b"junk").expect("Failed to write file");

        assert!(load_uploaded_fonts(&[path, dir.path().join("missing.ttf")]).is_empty());
    }

    // Tests directory loading ignores non-font files and fails on missing directories
    // Verified by loading every file in the directory
    #[test]
    fn test_load_font_dir() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(dir.path().join("notes.txt"), b"hello").expect("Failed to write file");

        let fonts = load_font_dir(dir.path()).expect("Failed to read font dir");
        assert!(fonts.is_empty());
        assert!(matches!(
            load_font_dir(&dir.path().join("absent")),
            Err(TypocutError::FileSystem { .. })
        ));
    }
}

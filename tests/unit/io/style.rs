//! Tests for style sanitizing, hex colors and TOML style files

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use typocut::TypocutError;
    use typocut::io::configuration::{
        DEFAULT_END_COLOR, DEFAULT_NOISE, MAX_CELL_SIZE, MAX_NOISE, MIN_CELL_SIZE,
        MIN_LINE_SPACING,
    };
    use typocut::io::style::{
        GlyphSource, StyleConfig, format_hex_color, hex_color_or_black, parse_hex_color,
    };

    // Tests cell sizes snap to the 5 pixel grid and clamp to bounds
    // Verified by truncating instead of rounding
    #[test]
    fn test_sanitize_cell_sizes() {
        let style = StyleConfig {
            cell_width: 33,
            cell_height: 37,
            ..StyleConfig::default()
        }
        .sanitize();
        assert_eq!((style.cell_width, style.cell_height), (35, 35));

        let extreme = StyleConfig {
            cell_width: 1,
            cell_height: 10_000,
            ..StyleConfig::default()
        }
        .sanitize();
        assert_eq!(extreme.cell_width, MIN_CELL_SIZE);
        assert_eq!(extreme.cell_height, MAX_CELL_SIZE);
    }

    // Tests factors clamp and non-finite values fall back to defaults
    // Verified by clamping NaN to the minimum
    #[test]
    fn test_sanitize_factors() {
        let style = StyleConfig {
            noise_amount: 3.0,
            line_spacing_factor: 0.0,
            spacing_factor: -1.0,
            margin_factor: f64::NAN,
            ..StyleConfig::default()
        }
        .sanitize();
        assert!((style.noise_amount - MAX_NOISE).abs() < f64::EPSILON);
        assert!((style.line_spacing_factor - MIN_LINE_SPACING).abs() < f64::EPSILON);
        assert!(style.spacing_factor.abs() < f64::EPSILON);
        assert!(style.margin_factor.is_finite());

        let infinite_noise = StyleConfig {
            noise_amount: f64::INFINITY,
            ..StyleConfig::default()
        }
        .sanitize();
        assert!((infinite_noise.noise_amount - DEFAULT_NOISE).abs() < f64::EPSILON);
    }

    // Tests both hex forms parse and bad input is rejected
    // Verified by accepting four-digit strings
    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#D3F11E").ok(), Some([0xD3, 0xF1, 0x1E]));
        assert_eq!(parse_hex_color("ffadcf").ok(), Some([0xFF, 0xAD, 0xCF]));
        assert_eq!(parse_hex_color("#0f8").ok(), Some([0x00, 0xFF, 0x88]));
        assert!(matches!(
            parse_hex_color("#12"),
            Err(TypocutError::InvalidParameter { .. })
        ));
        assert!(parse_hex_color("#GGGGGG").is_err());
        assert!(parse_hex_color("#1234").is_err());
    }

    // Tests formatting and the black fallback
    // Verified by formatting in lower case
    #[test]
    fn test_format_and_fallback() {
        assert_eq!(format_hex_color([0xD3, 0xF1, 0x1E]), "#D3F11E");
        assert_eq!(hex_color_or_black("nonsense"), [0, 0, 0]);
        assert_eq!(hex_color_or_black("#fff"), [255, 255, 255]);
    }

    // Tests a partial TOML file keeps defaults and is sanitized
    // Verified by requiring every key
    #[test]
    fn test_from_toml_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("style.toml");
        fs::write(
            &path,
            "cell-width = 42\nnoise-amount = 0.9\nglyph-source = \"built-in-fonts\"\nstart-color = \"#102030\"\ninverted-mask = true\n",
        )
        .expect("Failed to write style file");

        let style = StyleConfig::from_toml_file(&path).expect("Failed to load style");
        assert_eq!(style.cell_width, 40);
        assert!((style.noise_amount - MAX_NOISE).abs() < f64::EPSILON);
        assert_eq!(style.glyph_source, GlyphSource::BuiltInFonts);
        assert_eq!(style.start_color, [0x10, 0x20, 0x30]);
        assert_eq!(style.end_color, DEFAULT_END_COLOR);
        assert!(style.inverted_mask);
    }

    // Tests invalid TOML and missing files produce distinct errors
    // Verified by mapping parse errors to file system errors
    #[test]
    fn test_from_toml_file_errors() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "cell-width = [").expect("Failed to write style file");

        assert!(matches!(
            StyleConfig::from_toml_file(&path),
            Err(TypocutError::Config { .. })
        ));
        assert!(matches!(
            StyleConfig::from_toml_file(&dir.path().join("missing.toml")),
            Err(TypocutError::FileSystem { .. })
        ));
    }

    // Tests a serialized style reads back unchanged
    // Verified by serializing colors as arrays
    #[test]
    fn test_toml_serialization() {
        let style = StyleConfig {
            glyph_source: GlyphSource::UploadedFonts,
            ..StyleConfig::default()
        };
        let text = toml::to_string(&style).expect("Failed to serialize style");
        assert!(text.contains("start-color = \"#D3F11E\""));
        assert!(text.contains("glyph-source = \"uploaded-fonts\""));

        let parsed: StyleConfig = toml::from_str(&text).expect("Failed to parse style");
        assert_eq!(parsed, style);
    }

    // Tests font glyph sources are recognised
    // Verified by treating procedural as a font source
    #[test]
    fn test_glyph_source_is_font() {
        assert!(!GlyphSource::Procedural.is_font());
        assert!(GlyphSource::BuiltInFonts.is_font());
        assert!(GlyphSource::UploadedFonts.is_font());
        assert!((StyleConfig::default().aspect_ratio() - 0.5).abs() < f64::EPSILON);
    }
}

//! Tests for capacity, line breaking, centring and tile reuse

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use typocut::glyph::font::FontLibrary;
    use typocut::io::style::StyleConfig;
    use typocut::layout::flow::{
        CanvasArea, FlowContext, LetterMetrics, break_lines, layout, max_capacity, place_text,
        truncate_to_capacity,
    };
    use typocut::source::ImagePool;

    fn style() -> StyleConfig {
        StyleConfig {
            cell_width: 30,
            cell_height: 60,
            spacing_factor: 0.15,
            line_spacing_factor: 0.1,
            ..StyleConfig::default()
        }
    }

    // Tests the reference canvas holds 8 letters on each of 2 lines
    // Verified by counting the first letter with spacing
    #[test]
    fn test_capacity_reference_canvas() {
        let capacity = max_capacity(&style(), 900.0, 540.0);
        assert_eq!(capacity.chars_per_line, 8);
        assert_eq!(capacity.max_lines, 2);
        assert_eq!(capacity.total(), 16);
    }

    // Tests capacity never drops below one letter
    // Verified by starting the counters at zero
    #[test]
    fn test_capacity_at_least_one() {
        let capacity = max_capacity(&style(), 10.0, 10.0);
        assert_eq!(capacity.total(), 1);
    }

    // Tests truncation keeps a prefix of the text
    // Verified by keeping a suffix
    #[test]
    fn test_truncate_to_capacity() {
        assert_eq!(truncate_to_capacity("HELLO WORLD", 5), "HELLO");
        assert_eq!(truncate_to_capacity("HI", 5), "HI");
        assert_eq!(truncate_to_capacity("HI", 0), "");
    }

    // Tests greedy breaking wraps exactly where capacity predicts
    // Verified by resetting the line width to zero on wrap
    #[test]
    fn test_break_lines() {
        let metrics = LetterMetrics::for_style(&style());
        let lines = break_lines(11, &metrics, 900.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], (0..8).collect::<Vec<_>>());
        assert_eq!(lines[1], (8..11).collect::<Vec<_>>());

        let narrow = break_lines(3, &metrics, 50.0);
        assert_eq!(narrow, vec![vec![0], vec![1], vec![2]]);
        assert!(break_lines(0, &metrics, 900.0).is_empty());
    }

    // Tests a single line is centred in both directions
    // Verified by left-aligning lines
    #[test]
    fn test_place_text_centres_line() {
        let area = CanvasArea::new(1000, 600, 0.0);
        let placements = place_text("AB", &style(), &area);

        assert_eq!(placements.len(), 2);
        // Two letters of 90 with 13.5 between them span 193.5
        let start_x = (1000.0 - 193.5) / 2.0;
        assert!((placements[0].x - start_x).abs() < 1e-9);
        assert!((placements[1].x - (start_x + 103.5)).abs() < 1e-9);
        assert!((placements[0].y - 210.0).abs() < 1e-9);
        assert_eq!(placements[1].text_index, 1);
    }

    // Tests each wrapped line is centred on its own
    // Verified by centring every line with the first line's width
    #[test]
    fn test_place_text_centres_each_line() {
        let area = CanvasArea::new(900, 540, 0.0);
        let placements = place_text("ABCDEFGHIJ", &style(), &area);

        let first_line = placements.iter().filter(|p| p.y < 100.0).count();
        assert_eq!(first_line, 8);
        let second_start = placements.get(8).map(|p| p.x);
        let expected = (900.0 - (2.0 * 90.0 + 13.5)) / 2.0;
        assert!(second_start.is_some_and(|x| (x - expected).abs() < 1e-9));
        // Block of two lines is 378 tall
        assert!((placements[0].y - 81.0).abs() < 1e-9);
        assert!((placements[8].y - 279.0).abs() < 1e-9);
    }

    // Tests layout of empty text produces no tiles
    // Verified by emitting a placeholder tile
    #[test]
    fn test_layout_empty_text() {
        let style = style();
        let area = CanvasArea::new(900, 540, 0.0);
        let pool = ImagePool::new(style.start_color, style.end_color);
        let fonts = FontLibrary::default();
        let context = FlowContext {
            style: &style,
            area: &area,
            pool: &pool,
            fonts: &fonts,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(layout("", &context, &[], &mut rng).is_empty());
    }

    // Tests overlong text is truncated to capacity
    // Verified by laying out every character
    #[test]
    fn test_layout_truncates() {
        let style = style();
        let area = CanvasArea::new(900, 540, 0.0);
        let pool = ImagePool::new(style.start_color, style.end_color);
        let fonts = FontLibrary::default();
        let context = FlowContext {
            style: &style,
            area: &area,
            pool: &pool,
            fonts: &fonts,
        };
        let mut rng = StdRng::seed_from_u64(0);
        let tiles = layout("ABCDEFGHIJKLMNOPQRSTU", &context, &[], &mut rng);

        assert_eq!(tiles.len(), 16);
        assert_eq!(tiles.last().map(|tile| tile.character), Some('P'));
        assert!(tiles.iter().all(|tile| tile.image_index < pool.len()));
    }

    // Tests unchanged characters keep their appearance when text is appended
    // Verified by keying reuse on the character alone
    #[test]
    fn test_layout_reuses_tiles() {
        let style = style();
        let area = CanvasArea::new(900, 540, 0.0);
        let pool = ImagePool::new(style.start_color, style.end_color);
        let fonts = FontLibrary::default();
        let context = FlowContext {
            style: &style,
            area: &area,
            pool: &pool,
            fonts: &fonts,
        };
        let mut rng = StdRng::seed_from_u64(12);
        let first = layout("HELLO", &context, &[], &mut rng);
        let second = layout("HELLOS", &context, &first, &mut rng);

        for (before, after) in first.iter().zip(&second) {
            assert_eq!(before.seed, after.seed);
            assert_eq!(before.crop, after.crop);
            assert_eq!(before.image_index, after.image_index);
        }

        let changed = layout("JELLOS", &context, &second, &mut rng);
        assert_eq!(changed[0].character, 'J');
        assert_eq!(changed[1].seed, second[1].seed);
    }

    // Tests a canvas without usable area produces no tiles
    // Verified by skipping the usable-area guard
    #[test]
    fn test_layout_without_usable_area() {
        let style = style();
        let area = CanvasArea::new(100, 100, 0.5);
        let pool = ImagePool::new(style.start_color, style.end_color);
        let fonts = FontLibrary::default();
        let context = FlowContext {
            style: &style,
            area: &area,
            pool: &pool,
            fonts: &fonts,
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(layout("A", &context, &[], &mut rng).is_empty());
    }

    // Tests the canvas boundary is a fraction of the width on every side
    // Verified by using the height for the vertical boundary
    #[test]
    fn test_canvas_area() {
        let area = CanvasArea::new(1200, 800, 0.01);
        assert!((area.boundary - 12.0).abs() < 1e-9);
        assert!((area.usable_width() - 1176.0).abs() < 1e-9);
        assert!((area.usable_height() - 776.0).abs() < 1e-9);
    }
}

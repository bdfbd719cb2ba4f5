//! Tests for style bounds and runtime defaults

#[cfg(test)]
mod tests {
    use typocut::io::configuration::{
        ALPHABET_SIZE, CELL_SIZE_STEP, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DEFAULT_DENSITY,
        DEFAULT_LINE_SPACING, DEFAULT_NOISE, DEFAULT_SEED, DEFAULT_SPACING, DEFINITION_LENGTH,
        GRADIENT_SIZE, MAX_CELL_SIZE, MAX_DENSITY, MAX_LINE_SPACING, MAX_NOISE, MAX_SPACING,
        MAX_UPLOADED_IMAGES, MIN_CELL_SIZE, MIN_LINE_SPACING, MIN_NOISE, MIN_SPACING,
    };

    // Tests default cell sizes sit on the step grid within bounds
    // Verified by setting a default off the step grid
    #[test]
    fn test_default_cells_within_bounds() {
        for size in [DEFAULT_CELL_WIDTH, DEFAULT_CELL_HEIGHT] {
            assert!((MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size));
            assert_eq!(size % CELL_SIZE_STEP, 0);
        }
        assert_eq!(MIN_CELL_SIZE % CELL_SIZE_STEP, 0);
        assert_eq!(MAX_CELL_SIZE % CELL_SIZE_STEP, 0);
    }

    // Tests default factors sit within their bounds
    // Verified by raising a default above its maximum
    #[test]
    fn test_default_factors_within_bounds() {
        assert!((MIN_NOISE..=MAX_NOISE).contains(&DEFAULT_NOISE));
        assert!((MIN_SPACING..=MAX_SPACING).contains(&DEFAULT_SPACING));
        assert!((MIN_LINE_SPACING..=MAX_LINE_SPACING).contains(&DEFAULT_LINE_SPACING));
    }

    // Tests gradients are large enough for the biggest letter
    // Verified by sizing gradients from the default cell
    #[test]
    fn test_gradient_covers_largest_letter() {
        assert!(GRADIENT_SIZE >= MAX_CELL_SIZE * 3);
    }

    // Tests fixed structural constants
    // Verified by changing constant values
    #[test]
    fn test_structural_constants() {
        assert_eq!(DEFINITION_LENGTH, 18);
        assert_eq!(ALPHABET_SIZE, 26);
        assert_eq!(MAX_UPLOADED_IMAGES, 10);
        assert_eq!(DEFAULT_SEED, 42);
        assert!((1..=MAX_DENSITY).contains(&DEFAULT_DENSITY));
    }
}

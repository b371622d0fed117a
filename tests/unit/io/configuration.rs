//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use wordshape::io::configuration::{
        CLOUD_HD_SUFFIX, CLOUD_SUFFIX, DEFAULT_MAX_FONT, DEFAULT_MAX_WORDS, DEFAULT_MIN_FONT,
        DEFAULT_SEED, FREQUENCIES_SUFFIX, HD_SCALE, MASK_SUFFIX, MAX_CANVAS_DIMENSION,
        MAX_FONT_RANGE, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_WORDS_RANGE, MIN_FONT_RANGE,
        MIN_INPUT_CHARS, PHRASE_JOIN_MARKER, STANDARD_HEIGHT, STANDARD_WIDTH,
    };

    // Tests the input length threshold
    // Verified by changing the threshold
    #[test]
    fn test_min_input_chars_value() {
        assert_eq!(MIN_INPUT_CHARS, 10);
    }

    // Tests the phrase join marker
    // Verified by switching the marker to a space
    #[test]
    fn test_phrase_join_marker_value() {
        assert_eq!(PHRASE_JOIN_MARKER, '_');
    }

    // Tests standard and high definition canvas sizes
    // Verified by changing the standard width
    #[test]
    fn test_canvas_sizes() {
        assert_eq!((STANDARD_WIDTH, STANDARD_HEIGHT), (1600, 800));
        assert_eq!(HD_SCALE, 2);
        assert!(STANDARD_WIDTH * HD_SCALE <= MAX_CANVAS_DIMENSION);
    }

    // Tests defaults lie inside their accepted ranges
    // Verified by moving a default outside its range
    #[test]
    fn test_defaults_within_ranges() {
        assert!((MAX_WORDS_RANGE.0..=MAX_WORDS_RANGE.1).contains(&DEFAULT_MAX_WORDS));
        assert!((MIN_FONT_RANGE.0..=MIN_FONT_RANGE.1).contains(&DEFAULT_MIN_FONT));
        assert!((MAX_FONT_RANGE.0..=MAX_FONT_RANGE.1).contains(&DEFAULT_MAX_FONT));
        assert!(DEFAULT_MIN_FONT < DEFAULT_MAX_FONT);
    }

    // Tests the fixed seed
    // Verified by changing the seed
    #[test]
    fn test_default_seed_value() {
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests output suffixes are distinct
    // Verified by reusing the cloud suffix for high definition
    #[test]
    fn test_output_suffixes() {
        let suffixes = [FREQUENCIES_SUFFIX, MASK_SUFFIX, CLOUD_SUFFIX, CLOUD_HD_SUFFIX];
        for (i, a) in suffixes.iter().enumerate() {
            assert!(a.starts_with('_'));
            for b in suffixes.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}

//! Tests for reading text input files

#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use wordshape::io::input::read_input;
    use wordshape::{ErrorKind, RawInput};

    // Tests text mode keeps the whole file
    // Verified by splitting text input into lines
    #[test]
    fn test_read_text() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, "first line\nsecond line\n").expect("Failed to write input");

        let input = read_input(&path, false).expect("Failed to read input");
        assert!(matches!(input, RawInput::Text(ref text) if text == "first line\nsecond line\n"));
    }

    // Tests phrase mode yields trimmed non-blank lines
    // Verified by keeping blank lines
    #[test]
    fn test_read_phrases() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("phrases.txt");
        fs::write(&path, "  Customer satisfaction \n\n\tRevenue growth\n   \n")
            .expect("Failed to write input");

        let input = read_input(&path, true).expect("Failed to read input");
        let expected = vec!["Customer satisfaction".to_string(), "Revenue growth".to_string()];
        assert!(matches!(input, RawInput::Phrases(ref phrases) if *phrases == expected));
    }

    // Tests missing files are file system errors
    // Verified by returning empty input
    #[test]
    fn test_read_missing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let result = read_input(&dir.path().join("absent.txt"), false);
        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Io));
    }

    // Tests non-UTF-8 content is a validation error
    // Verified by decoding lossily
    #[test]
    fn test_read_invalid_utf8() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).expect("Failed to write input");

        let result = read_input(&path, false);
        assert!(matches!(result, Err(ref e) if e.kind() == ErrorKind::Validation));
    }
}

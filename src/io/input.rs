//! Reading plain-text input files

use crate::io::error::{CloudError, Result, validation_error};
use crate::text::frequency::RawInput;
use std::path::Path;

/// Read a UTF-8 text file as extractor input
///
/// In phrase mode every non-blank line becomes one phrase record; otherwise
/// the whole file is one block of text.
///
/// # Errors
///
/// Returns a file system error if the file cannot be read, or a validation
/// error if it is not valid UTF-8.
pub fn read_input(path: &Path, phrase_mode: bool) -> Result<RawInput> {
    let bytes = std::fs::read(path).map_err(|e| CloudError::FileSystem {
        path: path.to_path_buf(),
        operation: "read input",
        source: e,
    })?;

    let text = String::from_utf8(bytes)
        .map_err(|e| validation_error("text", &format!("'{}' is not UTF-8: {e}", path.display())))?;

    Ok(if phrase_mode {
        RawInput::Phrases(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string)
                .collect(),
        )
    } else {
        RawInput::Text(text)
    })
}

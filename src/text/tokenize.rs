//! Word-level tokenization of free text

use regex::Regex;
use std::sync::LazyLock;

// A word is a word character followed by at least one word character or apostrophe
static WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\w[\w']+").ok());

/// Split free text into word tokens
///
/// Tokens keep their surface form except for a trailing possessive `'s`,
/// which is removed. Tokens made only of digits are dropped unless
/// `include_numbers` is set.
pub fn tokenize(text: &str, include_numbers: bool) -> Vec<&str> {
    let Some(pattern) = WORD_PATTERN.as_ref() else {
        return Vec::new();
    };

    pattern
        .find_iter(text)
        .map(|m| strip_possessive(m.as_str()))
        .filter(|word| !word.is_empty())
        .filter(|word| include_numbers || !is_number(word))
        .collect()
}

fn strip_possessive(word: &str) -> &str {
    word.strip_suffix("'s")
        .or_else(|| word.strip_suffix("'S"))
        .unwrap_or(word)
}

fn is_number(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit())
}

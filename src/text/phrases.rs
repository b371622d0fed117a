//! Phrase sanitization for phrase mode
//!
//! A phrase is collapsed into a single token by dropping commas and periods
//! and joining its words with [`PHRASE_JOIN_MARKER`]. The marker is turned
//! back into spaces only once counting is finished.

use crate::io::configuration::PHRASE_JOIN_MARKER;

/// Collapse a phrase into one atomic token
///
/// Returns an empty string when nothing but separators remain.
pub fn sanitize(phrase: &str) -> String {
    let cleaned: String = phrase.chars().filter(|c| !matches!(c, ',' | '.')).collect();
    let mut joined = String::with_capacity(cleaned.len());
    for (index, word) in cleaned.split_whitespace().enumerate() {
        if index > 0 {
            joined.push(PHRASE_JOIN_MARKER);
        }
        joined.push_str(word);
    }
    joined
}

/// Restore the human-readable form of a sanitized phrase
///
/// Any join marker present in the original phrase is also turned into a
/// space, since the two cannot be told apart after sanitization.
pub fn restore(token: &str) -> String {
    token.replace(PHRASE_JOIN_MARKER, " ")
}

/// Check whether a raw phrase already contains the join marker
pub fn contains_marker(phrase: &str) -> bool {
    phrase.contains(PHRASE_JOIN_MARKER)
}

//! Frequency extraction from free text or phrase lists
//!
//! Stop-words are removed before counting, so excluded tokens never reach
//! the mapping. In phrase mode each record is sanitized into one token,
//! counted, and only then restored to its spaced form.

use crate::io::configuration::MIN_INPUT_CHARS;
use crate::io::error::{Result, validation_error};
use crate::text::phrases::{contains_marker, restore, sanitize};
use crate::text::stopwords::StopwordSet;
use crate::text::tokenize::tokenize;
use std::collections::HashMap;

/// Raw input handed to the extractor
#[derive(Debug, Clone)]
pub enum RawInput {
    /// A single block of free text
    Text(String),
    /// Ordered phrase records, one per logical line
    Phrases(Vec<String>),
}

impl RawInput {
    /// Number of non-whitespace-padded characters across the input
    pub fn char_count(&self) -> usize {
        match self {
            Self::Text(text) => text.trim().chars().count(),
            Self::Phrases(phrases) => phrases.iter().map(|p| p.trim().chars().count()).sum(),
        }
    }

    fn phrases(&self) -> Vec<&str> {
        match self {
            Self::Text(text) => text.lines().collect(),
            Self::Phrases(phrases) => phrases.iter().map(String::as_str).collect(),
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Phrases(phrases) => phrases.join("\n"),
        }
    }
}

/// Tunables for extraction
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Inputs with fewer characters are rejected
    pub min_input_chars: usize,
    /// Fold `xs` into `x` when both occur
    pub normalize_plurals: bool,
    /// Keep tokens made only of digits
    pub include_numbers: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_input_chars: MIN_INPUT_CHARS,
            normalize_plurals: false,
            include_numbers: false,
        }
    }
}

/// Mapping from token surface form to a positive occurrence weight
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMapping {
    weights: HashMap<String, u64>,
}

impl FrequencyMapping {
    /// Build a mapping from precomputed weights
    ///
    /// Zero weights are dropped and repeated terms accumulate.
    pub fn from_weights<S: Into<String>>(weights: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut mapping = Self::default();
        for (term, weight) in weights {
            mapping.add(term.into(), weight);
        }
        mapping
    }

    fn add(&mut self, term: String, weight: u64) {
        if weight > 0 && !term.is_empty() {
            *self.weights.entry(term).or_insert(0) += weight;
        }
    }

    /// Weight of `term`, if present
    pub fn get(&self, term: &str) -> Option<u64> {
        self.weights.get(term).copied()
    }

    /// Check whether `term` is present
    pub fn contains(&self, term: &str) -> bool {
        self.weights.contains_key(term)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Test whether no token survived extraction
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> u64 {
        self.weights.values().sum()
    }

    /// Iterate over `(term, weight)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.weights.iter().map(|(term, &weight)| (term.as_str(), weight))
    }

    /// Tokens ordered by descending weight, ties broken alphabetically
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// The `max_words` heaviest tokens with weights scaled so the largest is 1.0
    pub fn normalized(&self, max_words: usize) -> Vec<(String, f64)> {
        let ranked = self.ranked();
        let Some(&(_, top)) = ranked.first() else {
            return Vec::new();
        };
        let top = top as f64;

        ranked
            .into_iter()
            .take(max_words)
            .map(|(term, weight)| (term.to_string(), weight as f64 / top))
            .collect()
    }

    // Fold plural forms into their singular when the singular also occurs
    fn merge_plurals(&mut self) {
        let plurals: Vec<(String, String)> = self
            .weights
            .keys()
            .filter(|term| term.ends_with('s') && !term.ends_with("ss"))
            .filter_map(|term| {
                let singular = term.strip_suffix('s')?;
                self.weights
                    .contains_key(singular)
                    .then(|| (term.clone(), singular.to_string()))
            })
            .collect();

        for (plural, singular) in plurals {
            if let Some(weight) = self.weights.remove(&plural) {
                self.add(singular, weight);
            }
        }
    }
}

/// Extract a frequency mapping with default options
///
/// # Errors
///
/// Returns a validation error if the input is shorter than the minimum
/// length or no token survives stop-word filtering.
pub fn extract(
    input: &RawInput,
    stopwords: &StopwordSet,
    phrase_mode: bool,
) -> Result<FrequencyMapping> {
    extract_with(input, stopwords, phrase_mode, &ExtractOptions::default())
}

/// Extract a frequency mapping
///
/// When `phrase_mode` is set each phrase (or each line of a text input)
/// counts as one token; otherwise the input is split into words.
///
/// # Errors
///
/// Returns a validation error if the input is shorter than
/// `options.min_input_chars` or no token survives stop-word filtering.
pub fn extract_with(
    input: &RawInput,
    stopwords: &StopwordSet,
    phrase_mode: bool,
    options: &ExtractOptions,
) -> Result<FrequencyMapping> {
    let chars = input.char_count();
    if chars < options.min_input_chars {
        return Err(validation_error(
            "text",
            &format!(
                "input has {chars} characters, at least {} required",
                options.min_input_chars
            ),
        ));
    }

    let mut mapping = if phrase_mode {
        count_phrases(input, stopwords)
    } else {
        count_words(input, stopwords, options.include_numbers)
    };

    if options.normalize_plurals {
        mapping.merge_plurals();
    }

    if mapping.is_empty() {
        return Err(validation_error(
            "text",
            &"no tokens remain after stop-word filtering",
        ));
    }

    log::debug!(
        "Extracted {} distinct tokens with total weight {}",
        mapping.len(),
        mapping.total_weight()
    );

    Ok(mapping)
}

fn count_words(input: &RawInput, stopwords: &StopwordSet, include_numbers: bool) -> FrequencyMapping {
    let text = input.text();
    let mut mapping = FrequencyMapping::default();
    for word in tokenize(&text, include_numbers) {
        if !stopwords.contains(word) {
            mapping.add(word.to_string(), 1);
        }
    }
    mapping
}

fn count_phrases(input: &RawInput, stopwords: &StopwordSet) -> FrequencyMapping {
    let mut joined: HashMap<String, u64> = HashMap::new();
    for phrase in input.phrases() {
        if contains_marker(phrase) {
            log::warn!("Phrase '{phrase}' contains the join marker and will be split on output");
        }

        let token = sanitize(phrase);
        if token.is_empty() || stopwords.contains(&restore(&token)) {
            continue;
        }
        *joined.entry(token).or_insert(0) += 1;
    }

    // Restoration happens on counted tokens so phrases are never re-split
    let mut mapping = FrequencyMapping::default();
    for (token, weight) in joined {
        mapping.add(restore(&token), weight);
    }
    mapping
}

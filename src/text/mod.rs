//! Text processing: tokenization, stop-words and frequency extraction

/// Frequency mapping and the extraction pipeline
pub mod frequency;
/// Phrase sanitization and restoration for phrase mode
pub mod phrases;
/// Stop-word sets and their composition
pub mod stopwords;
/// Word tokenizer for free text
pub mod tokenize;

pub use frequency::{ExtractOptions, FrequencyMapping, RawInput, extract, extract_with};
pub use stopwords::{StopwordConfig, StopwordLanguage, StopwordSet};

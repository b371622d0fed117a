//! Stop-word sets composed from a base list, a language list and user terms
//!
//! Matching is case-insensitive: every entry is stored lowercased and
//! candidate words are lowercased before lookup.

use crate::io::error::{CloudError, configuration_error};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// English base list, always active
const BASE_STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "can't", "cannot", "com", "could", "couldn't", "did", "didn't",
    "do", "does", "doesn't", "doing", "don't", "down", "during", "each", "else", "ever", "few",
    "for", "from", "further", "get", "had", "hadn't", "has", "hasn't", "have", "haven't",
    "having", "he", "he'd", "he'll", "he's", "hence", "her", "here", "here's", "hers", "herself",
    "him", "himself", "his", "how", "how's", "however", "http", "i", "i'd", "i'll", "i'm",
    "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "just", "k",
    "let's", "like", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of",
    "off", "on", "once", "only", "or", "other", "otherwise", "ought", "our", "ours", "ourselves",
    "out", "over", "own", "r", "same", "shall", "shan't", "she", "she'd", "she'll", "she's",
    "should", "shouldn't", "since", "so", "some", "such", "than", "that", "that's", "the",
    "their", "theirs", "them", "themselves", "then", "there", "there's", "therefore", "these",
    "they", "they'd", "they'll", "they're", "they've", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "wasn't", "we", "we'd", "we'll", "we're", "we've",
    "were", "weren't", "what", "what's", "when", "when's", "where", "where's", "which", "while",
    "who", "who's", "whom", "why", "why's", "with", "won't", "would", "wouldn't", "www", "you",
    "you'd", "you'll", "you're", "you've", "your", "yours", "yourself", "yourselves",
];

/// Turkish list, active for the primary language
const TURKISH_STOPWORDS: &[&str] = &[
    "ve", "veya", "ile", "ancak", "fakat", "ama", "lakin", "ki", "de", "da", "bir", "bu", "şu",
    "o", "ben", "sen", "biz", "siz", "onlar", "mi", "mı", "mu", "mü", "için", "gibi", "kadar",
    "daha", "çok", "her", "bazı", "hiç", "birçok", "tüm", "bütün", "var", "yok", "ne", "nasıl",
    "neden", "niçin", "nerede", "ne zaman", "kim", "diye", "olarak", "göre", "karşı", "üzere",
    "dolayı", "sonra", "önce", "iken", "başka", "diğer", "aynı", "şey", "ise", "idi", "olan",
    "olduğu", "oldu", "olur", "olsa", "bile",
];

/// Which language-specific list joins the base list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordLanguage {
    /// Base list only
    None,
    /// Base list plus the Turkish list
    #[default]
    Primary,
    /// Base list plus every language list
    Both,
}

impl StopwordLanguage {
    /// Identifier accepted by `from_str`
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Primary => "primary",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for StopwordLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StopwordLanguage {
    type Err = CloudError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "english" => Ok(Self::None),
            "primary" | "turkish" => Ok(Self::Primary),
            "both" => Ok(Self::Both),
            other => Err(configuration_error(
                "base_language",
                &other,
                &"expected one of: none, primary, both",
            )),
        }
    }
}

/// Stop-word configuration supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct StopwordConfig {
    /// Language list to combine with the base list
    pub base_language: StopwordLanguage,
    /// Additional user-supplied terms
    pub custom_terms: Vec<String>,
}

/// Case-insensitive set of excluded tokens
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create a set excluding nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the English base set
    pub fn base() -> Self {
        let mut set = Self::empty();
        set.extend(BASE_STOPWORDS.iter().copied());
        set
    }

    /// Create the base set combined with the list for `language`
    pub fn for_language(language: StopwordLanguage) -> Self {
        let mut set = Self::base();
        match language {
            StopwordLanguage::None => {}
            StopwordLanguage::Primary | StopwordLanguage::Both => {
                set.extend(TURKISH_STOPWORDS.iter().copied());
            }
        }
        set
    }

    /// Compose a set from caller configuration
    pub fn from_config(config: &StopwordConfig) -> Self {
        let mut set = Self::for_language(config.base_language);
        set.extend(config.custom_terms.iter().map(String::as_str));
        set
    }

    /// Add terms, ignoring blank entries
    pub fn extend<'a>(&mut self, terms: impl IntoIterator<Item = &'a str>) {
        for term in terms {
            let term = term.trim();
            if !term.is_empty() {
                self.words.insert(term.to_lowercase());
            }
        }
    }

    /// Check whether `word` is excluded
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Test whether the set excludes nothing
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split a comma-separated list of user terms
pub fn parse_custom_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(ToString::to_string)
        .collect()
}

//! Text normalization
//!
//! Produces the two canonical forms the matcher works on: a letters-only
//! lowercase stream for substring containment, and a letters-only token
//! list for whole-word checks. Both are pure functions of the input text;
//! empty input yields empty forms, never an error.

/// Normalized forms of one document's text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedText {
    /// Lowercased text with every non-letter character removed. Multi-word
    /// synonyms match across the removed separators.
    stream: String,
    /// Lowercased letters-only tokens, delimited by the whitespace and
    /// punctuation of the input text.
    words: Vec<String>,
}

impl NormalizedText {
    /// Normalize raw extracted text.
    pub fn new(raw: &str) -> Self {
        let stream = letters_only(raw);
        let words = sanitize(raw)
            .split_whitespace()
            .map(str::to_string)
            .collect();

        Self { stream, words }
    }

    /// Whole-token membership check for a letters-only term.
    pub fn has_word(&self, term: &str) -> bool {
        self.words.iter().any(|w| w == term)
    }

    /// Substring containment against the letters-only stream.
    pub fn stream_contains(&self, needle: &str) -> bool {
        self.stream.contains(needle)
    }

    /// The letters-only stream.
    pub fn stream(&self) -> &str {
        &self.stream
    }

    /// The letters-only token list.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Reduce text to its ASCII letters, lowercased.
pub fn letters_only(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Replace every character that is not an ASCII letter with a space and
/// lowercase the rest, so tokens cannot fuse across punctuation or digits.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

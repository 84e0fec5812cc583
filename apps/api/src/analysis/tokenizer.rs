//! Word splitting capability used by the normalizer.
//!
//! Two backends:
//! - `UnicodeWordTokenizer` — UAX #29 word boundaries (the normal mode).
//! - `WhitespaceTokenizer` — plain whitespace split, used when text resources
//!   are unavailable and as the recovery path when a tokenizer fails.
//!
//! The backend is chosen once when resources are prepared and injected into
//! the `Normalizer`; call sites never branch on it.

use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Error)]
#[error("{tokenizer} tokenizer failed: {reason}")]
pub struct TokenizeError {
    pub tokenizer: &'static str,
    pub reason: String,
}

pub trait Tokenizer: Send + Sync {
    /// Short backend name, used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Splits already lowercased, punctuation-free text into raw tokens.
    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError>;

    /// Whether this backend is the reduced-quality fallback.
    fn is_fallback(&self) -> bool {
        false
    }
}

pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn name(&self) -> &'static str {
        "unicode-words"
    }

    /// Every non-blank segment is kept, including ones without alphanumerics
    /// such as `__`, which `unicode_words` would drop.
    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(text
            .split_word_bounds()
            .flat_map(str::split_whitespace)
            .map(String::from)
            .collect())
    }
}

pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    pub fn split_words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn split(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(Self::split_words(text))
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_words_splits_on_boundaries() {
        let tokens = UnicodeWordTokenizer.split("rust  and\tkafka\nengineer").unwrap();
        assert_eq!(tokens, vec!["rust", "and", "kafka", "engineer"]);
    }

    #[test]
    fn test_unicode_words_keeps_underscored_identifiers() {
        let tokens = UnicodeWordTokenizer.split("snake_case 42").unwrap();
        assert_eq!(tokens, vec!["snake_case", "42"]);
    }

    #[test]
    fn test_unicode_words_keeps_connector_only_segments() {
        let tokens = UnicodeWordTokenizer.split("c__ __ x_y").unwrap();
        assert_eq!(tokens, vec!["c__", "__", "x_y"]);
    }

    #[test]
    fn test_unicode_words_never_yields_blank_or_spaced_tokens() {
        let tokens = UnicodeWordTokenizer.split("caf\u{e9} \u{301}x  \n rust").unwrap();
        assert!(!tokens.is_empty());
        for token in tokens {
            assert!(!token.is_empty());
            assert!(!token.chars().any(char::is_whitespace), "{token:?}");
        }
    }

    #[test]
    fn test_whitespace_split() {
        let tokens = WhitespaceTokenizer.split("  the cat\n sat ").unwrap();
        assert_eq!(tokens, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_fallback_flag() {
        assert!(WhitespaceTokenizer.is_fallback());
        assert!(!UnicodeWordTokenizer.is_fallback());
    }

    #[test]
    fn test_empty_input() {
        assert!(UnicodeWordTokenizer.split("").unwrap().is_empty());
        assert!(WhitespaceTokenizer.split("   ").unwrap().is_empty());
    }
}

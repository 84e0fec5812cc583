//! Text → token stream.
//!
//! Order matters and is fixed: lowercase, strip non-word characters, split,
//! then drop stopwords and single-character tokens (digits excepted).

use std::sync::OnceLock;

use regex::Regex;
use tracing::{error, warn};

use crate::analysis::diagnostics::{Diagnostic, DiagnosticKind};
use crate::analysis::frequency::is_numeric;
use crate::analysis::stopwords::Stopwords;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};

/// Anything that is neither a word character nor whitespace.
fn non_word_chars() -> &'static Regex {
    static NON_WORD: OnceLock<Regex> = OnceLock::new();
    NON_WORD.get_or_init(|| Regex::new(r"[^\w\s]").expect("valid non-word regex"))
}

/// Tokens plus anything that went wrong while producing them.
#[derive(Debug, Default)]
pub struct Normalized {
    pub tokens: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Normalizer {
    stopwords: Stopwords,
    tokenizer: Box<dyn Tokenizer>,
}

impl Normalizer {
    pub fn new(stopwords: Stopwords, tokenizer: Box<dyn Tokenizer>) -> Self {
        Self {
            stopwords,
            tokenizer,
        }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn tokenizer_name(&self) -> &'static str {
        self.tokenizer.name()
    }

    /// Normalizes `text` into tokens. Never fails; absent or empty text gives
    /// an empty stream.
    pub fn normalize(&self, text: Option<&str>) -> Vec<String> {
        self.normalize_reporting(text).tokens
    }

    pub fn normalize_reporting(&self, text: Option<&str>) -> Normalized {
        let text = match text {
            Some(t) if !t.is_empty() => t,
            _ => return Normalized::default(),
        };

        if self.tokenizer.is_fallback() {
            warn!("Text resources not ready, preprocessing quality will be reduced");
        }

        let lowered = text.to_lowercase();
        let cleaned = non_word_chars().replace_all(&lowered, "");

        let mut diagnostics = Vec::new();
        let raw = match self.tokenizer.split(&cleaned) {
            Ok(tokens) => tokens,
            Err(e) => {
                error!("Error during word tokenization: {e}. Using basic split.");
                diagnostics.push(Diagnostic::error(
                    DiagnosticKind::ExtractionFailure,
                    format!("Word tokenization failed ({e}); fell back to whitespace splitting."),
                ));
                WhitespaceTokenizer::split_words(&cleaned)
            }
        };

        let tokens = raw.into_iter().filter(|t| self.keeps(t)).collect();
        Normalized {
            tokens,
            diagnostics,
        }
    }

    fn keeps(&self, token: &str) -> bool {
        if token.is_empty() || self.stopwords.contains(token) {
            return false;
        }
        token.chars().count() > 1 || is_numeric(token)
    }
}

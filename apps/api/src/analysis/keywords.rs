//! Frequency-threshold keyword extraction for job descriptions.

use serde::{Deserialize, Serialize};

use crate::analysis::diagnostics::Diagnostic;
use crate::analysis::frequency::{is_numeric, FrequencyTable};
use crate::analysis::normalizer::Normalizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordParams {
    /// Minimum occurrences in the document for a token to count as a keyword.
    pub min_frequency: usize,
    pub top_n: usize,
}

impl Default for KeywordParams {
    fn default() -> Self {
        Self {
            min_frequency: 2,
            top_n: 50,
        }
    }
}

/// Keywords of one document, most frequent first.
#[derive(Debug, Default)]
pub struct Keywords {
    pub keywords: Vec<String>,
    /// Length of the normalized stream the keywords were drawn from.
    pub token_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Normalizes `text` and selects its keywords.
pub fn extract_keywords(
    normalizer: &Normalizer,
    text: Option<&str>,
    params: KeywordParams,
) -> Keywords {
    let normalized = normalizer.normalize_reporting(text);
    Keywords {
        keywords: keywords_from_tokens(&normalized.tokens, params),
        token_count: normalized.tokens.len(),
        diagnostics: normalized.diagnostics,
    }
}

/// Keyword selection over an already normalized stream.
///
/// Takes the `2 × top_n` most common tokens, drops the ones under
/// `min_frequency` and the purely numeric ones, then keeps `top_n`. The
/// oversampling leaves room for numeric tokens that get filtered out.
fn keywords_from_tokens(tokens: &[String], params: KeywordParams) -> Vec<String> {
    if tokens.is_empty() {
        return Vec::new();
    }

    FrequencyTable::count(tokens)
        .most_common()
        .into_iter()
        .take(params.top_n.saturating_mul(2))
        .filter(|(word, count)| *count >= params.min_frequency && !is_numeric(word))
        .take(params.top_n)
        .map(|(word, _)| word.to_string())
        .collect()
}

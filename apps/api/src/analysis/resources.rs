//! Process-wide text resources: the stopword set and the tokenizer backend.
//!
//! Prepared at most once per process via `ensure_ready`. A failure to prepare
//! them never aborts anything: the service runs in `Degraded` mode with an
//! empty stopword set and whitespace tokenization, and every analysis carries
//! a warning diagnostic saying so.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::analysis::diagnostics::{Diagnostic, DiagnosticKind};
use crate::analysis::normalizer::Normalizer;
use crate::analysis::stopwords::Stopwords;
use crate::analysis::tokenizer::{UnicodeWordTokenizer, WhitespaceTokenizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceMode {
    Ready,
    Degraded,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read stopword file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stopword file '{}' contains no words", path.display())]
    Empty { path: PathBuf },
}

pub struct TextResources {
    mode: ResourceMode,
    degraded_reason: Option<String>,
    normalizer: Normalizer,
}

impl TextResources {
    /// Prepares resources from an optional stopword file; `None` selects the
    /// built-in English list. Falls back to degraded mode on any error.
    pub fn load(stopwords_path: Option<&Path>) -> Self {
        let stopwords = match stopwords_path {
            Some(path) => load_stopwords_file(path),
            None => Ok(Stopwords::english()),
        };

        match stopwords {
            Ok(stopwords) => Self::ready(stopwords),
            Err(e) => {
                warn!("Text resources unavailable: {e}");
                Self::degraded(e.to_string())
            }
        }
    }

    pub fn ready(stopwords: Stopwords) -> Self {
        let normalizer = Normalizer::new(stopwords, Box::new(UnicodeWordTokenizer));
        info!(
            stopwords = normalizer.stopwords().len(),
            tokenizer = normalizer.tokenizer_name(),
            "Text resources ready"
        );
        Self {
            mode: ResourceMode::Ready,
            degraded_reason: None,
            normalizer,
        }
    }

    pub fn degraded(reason: impl Into<String>) -> Self {
        let normalizer = Normalizer::new(Stopwords::empty(), Box::new(WhitespaceTokenizer));
        warn!(
            tokenizer = normalizer.tokenizer_name(),
            "Running in degraded mode: no stopword removal, whitespace tokenization"
        );
        Self {
            mode: ResourceMode::Degraded,
            degraded_reason: Some(reason.into()),
            normalizer,
        }
    }

    pub fn mode(&self) -> ResourceMode {
        self.mode
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Warning attached to every analysis while degraded.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        let reason = self.degraded_reason.as_deref()?;
        Some(Diagnostic::warning(
            DiagnosticKind::ResourceUnavailable,
            format!(
                "Stopword and tokenizer resources are missing ({reason}). \
                 Functionality will be limited: stopwords are kept and text is split on whitespace."
            ),
        ))
    }
}

/// Reads a stopword list, one word per line. Blank lines and `#` comments are
/// ignored.
pub fn load_stopwords_file(path: &Path) -> Result<Stopwords, ResourceError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stopwords = Stopwords::from_words(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#')),
    );
    if stopwords.is_empty() {
        return Err(ResourceError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(stopwords)
}

static RESOURCES: OnceLock<Arc<TextResources>> = OnceLock::new();

/// Returns the process-wide resources, preparing them on first call. Later
/// calls return the same instance and ignore their argument.
pub fn ensure_ready(stopwords_path: Option<&Path>) -> Arc<TextResources> {
    Arc::clone(RESOURCES.get_or_init(|| {
        info!("Preparing text resources");
        Arc::new(TextResources::load(stopwords_path))
    }))
}

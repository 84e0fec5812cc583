use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::analysis::keywords::KeywordParams;
use crate::analysis::matching::MatchParams;
use crate::analysis::pipeline::AnalysisParams;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every knob has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Stopword list, one word per line. Unset → built-in English list.
    pub stopwords_path: Option<PathBuf>,
    pub analysis: AnalysisParams,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keyword_defaults = KeywordParams::default();
        let match_defaults = MatchParams::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            stopwords_path: lookup("STOPWORDS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            analysis: AnalysisParams {
                keywords: KeywordParams {
                    min_frequency: parse_or(
                        &lookup,
                        "KEYWORD_MIN_FREQUENCY",
                        keyword_defaults.min_frequency,
                    )?,
                    top_n: parse_or(&lookup, "KEYWORD_TOP_N", keyword_defaults.top_n)?,
                },
                matching: MatchParams {
                    min_freq: parse_or(&lookup, "MATCH_MIN_FREQUENCY", match_defaults.min_freq)?,
                    top_n: parse_or(&lookup, "MATCH_TOP_N", match_defaults.top_n)?,
                },
            },
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

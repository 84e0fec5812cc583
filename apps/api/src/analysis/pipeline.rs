//! One full analysis: JD → keywords, resume → tokens, score, verdict.
//!
//! Runs start to finish synchronously; nothing is cached between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::diagnostics::Diagnostic;
use crate::analysis::feedback::{improvement_tips, verdict_for, Verdict, DISCLAIMER};
use crate::analysis::keywords::{extract_keywords, KeywordParams};
use crate::analysis::matching::{score_match, MatchParams};
use crate::analysis::resources::{ResourceMode, TextResources};

/// Number of resume tokens echoed back for debugging.
pub const TOKEN_PREVIEW_LEN: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{0}")]
    EmptyInput(&'static str),
}

const EMPTY_JD: &str = "Please paste the Job Description.";
const EMPTY_RESUME: &str = "Please provide resume content (either upload or paste).";
const NO_JD_KEYWORDS: &str =
    "Could not extract any meaningful keywords from the Job Description. Please check its content.";
const NO_RESUME_TOKENS: &str =
    "Could not extract any meaningful tokens from the Resume. Please check its content.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisParams {
    pub keywords: KeywordParams,
    pub matching: MatchParams,
}

/// Optional per-request overrides of the configured parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamOverrides {
    pub keyword_min_frequency: Option<usize>,
    pub keyword_top_n: Option<usize>,
    pub match_min_frequency: Option<usize>,
    pub match_top_n: Option<usize>,
}

impl AnalysisParams {
    pub fn with_overrides(self, overrides: ParamOverrides) -> Self {
        Self {
            keywords: KeywordParams {
                min_frequency: overrides
                    .keyword_min_frequency
                    .unwrap_or(self.keywords.min_frequency),
                top_n: overrides.keyword_top_n.unwrap_or(self.keywords.top_n),
            },
            matching: MatchParams {
                min_freq: overrides
                    .match_min_frequency
                    .unwrap_or(self.matching.min_freq),
                top_n: overrides.match_top_n.unwrap_or(self.matching.top_n),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub score: f64,
    pub verdict: Verdict,
    /// Alphabetical.
    pub matched_keywords: Vec<String>,
    /// Alphabetical.
    pub missing_keywords: Vec<String>,
    pub jd_keyword_count: usize,
    /// Extraction order (most frequent first).
    pub jd_keywords: Vec<String>,
    pub resume_token_preview: Vec<String>,
    pub resource_mode: ResourceMode,
    pub diagnostics: Vec<Diagnostic>,
    pub tips: Vec<String>,
    pub disclaimer: String,
}

pub fn analyze(
    resources: &TextResources,
    jd_text: &str,
    resume_text: &str,
    params: AnalysisParams,
) -> Result<AnalysisReport, AnalysisError> {
    if resume_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput(EMPTY_RESUME));
    }
    if jd_text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput(EMPTY_JD));
    }

    let analysis_id = Uuid::new_v4();
    let normalizer = resources.normalizer();
    let mut diagnostics: Vec<Diagnostic> = resources.diagnostic().into_iter().collect();

    let jd = extract_keywords(normalizer, Some(jd_text), params.keywords);
    diagnostics.extend(jd.diagnostics);
    let jd_keywords = jd.keywords;
    if jd_keywords.is_empty() {
        return Err(AnalysisError::EmptyInput(NO_JD_KEYWORDS));
    }

    let resume = normalizer.normalize_reporting(Some(resume_text));
    diagnostics.extend(resume.diagnostics);
    if resume.tokens.is_empty() {
        return Err(AnalysisError::EmptyInput(NO_RESUME_TOKENS));
    }

    debug!(
        %analysis_id,
        jd_tokens = jd.token_count,
        jd_keywords = jd_keywords.len(),
        resume_tokens = resume.tokens.len(),
        "Normalized inputs"
    );

    let result = score_match(&resume.tokens, &jd_keywords, params.matching);

    let mut matched_keywords = result.matched;
    matched_keywords.sort();
    let mut missing_keywords = result.missing;
    missing_keywords.sort();

    info!(
        %analysis_id,
        score = result.score,
        matched = matched_keywords.len(),
        missing = missing_keywords.len(),
        "Analysis complete"
    );

    let mut resume_tokens = resume.tokens;
    resume_tokens.truncate(TOKEN_PREVIEW_LEN);

    Ok(AnalysisReport {
        analysis_id,
        analyzed_at: Utc::now(),
        score: result.score,
        verdict: verdict_for(result.score),
        matched_keywords,
        missing_keywords,
        jd_keyword_count: jd_keywords.len(),
        jd_keywords,
        resume_token_preview: resume_tokens,
        resource_mode: resources.mode(),
        diagnostics,
        tips: improvement_tips(),
        disclaimer: DISCLAIMER.to_string(),
    })
}

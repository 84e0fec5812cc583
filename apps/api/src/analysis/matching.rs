//! Resume ↔ JD keyword overlap scoring.
//!
//! Algorithm:
//! 1. Count resume tokens.
//! 2. Keep distinct JD keywords whose count within the keyword list is ≥ `min_freq`.
//! 3. matched = kept keywords present in the resume (any count); missing = the rest.
//! 4. score = |matched| / |kept| × 100, rounded to 2 decimals (ties to even).
//! 5. If `top_n > 0`, cap both lists at `top_n`, ranked by resume frequency.

use serde::{Deserialize, Serialize};

use crate::analysis::frequency::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchParams {
    pub min_freq: usize,
    /// Cap for the matched and missing lists; 0 disables capping.
    pub top_n: usize,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            min_freq: 1,
            top_n: 75,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64, // 0.0 – 100.0
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// Size of the frequency-filtered keyword set the score is relative to.
    pub filtered_keyword_count: usize,
}

pub fn score_match(
    resume_tokens: &[String],
    jd_keywords: &[String],
    params: MatchParams,
) -> MatchResult {
    if resume_tokens.is_empty() || jd_keywords.is_empty() {
        return MatchResult::default();
    }

    let resume_counts = FrequencyTable::count(resume_tokens);
    let filtered: Vec<&str> = FrequencyTable::count(jd_keywords)
        .iter()
        .filter(|(_, count)| *count >= params.min_freq)
        .map(|(keyword, _)| keyword)
        .collect();

    let (mut matched, mut missing): (Vec<&str>, Vec<&str>) = filtered
        .iter()
        .copied()
        .partition(|keyword| resume_counts.contains(keyword));

    let score = if filtered.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / filtered.len() as f64 * 100.0)
    };

    if params.top_n > 0 {
        rank_and_cap(&mut matched, &resume_counts, params.top_n);
        rank_and_cap(&mut missing, &resume_counts, params.top_n);
    }

    MatchResult {
        score,
        matched: matched.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
        filtered_keyword_count: filtered.len(),
    }
}

/// Stable sort by resume frequency, descending, then truncate. Every missing
/// keyword has frequency 0, so for those the cut simply keeps first-seen order.
fn rank_and_cap(keywords: &mut Vec<&str>, resume_counts: &FrequencyTable<'_>, top_n: usize) {
    keywords.sort_by(|a, b| resume_counts.get(b).cmp(&resume_counts.get(a)));
    keywords.truncate(top_n);
}

/// Two decimals, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::analysis::feedback::{improvement_tips, DISCLAIMER};
use crate::analysis::pipeline::{analyze, AnalysisReport, ParamOverrides};
use crate::documents::DocumentFormat;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub jd_text: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(flatten)]
    pub overrides: ParamOverrides,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Scores pasted resume text against a pasted job description.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let params = state.config.analysis.with_overrides(request.overrides);
    let report = analyze(
        &state.resources,
        &request.jd_text,
        &request.resume_text,
        params,
    )?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `jd_text`, and either a `resume` file (TXT, PDF, DOCX) or
/// a pasted `resume_text`. A non-empty uploaded file takes precedence. Parameter
/// overrides may be sent as extra text fields.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut jd_text = String::new();
    let mut pasted_resume = String::new();
    let mut resume_file: Option<(DocumentFormat, Bytes)> = None;
    let mut overrides = ParamOverrides::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "jd_text" => jd_text = field.text().await.map_err(multipart_error)?,
            "resume_text" => pasted_resume = field.text().await.map_err(multipart_error)?,
            "resume" => {
                let unnamed = field.file_name().map_or(true, str::is_empty);
                // Reject unknown formats before reading the body.
                let resolved = DocumentFormat::resolve(field.content_type(), field.file_name());
                let format = match resolved {
                    Ok(format) => format,
                    // Browsers send an unselected file input with no name and no body.
                    Err(err) if unnamed => {
                        if !field.bytes().await.map_err(multipart_error)?.is_empty() {
                            return Err(err.into());
                        }
                        debug!("No resume file selected, using pasted text");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                };
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.is_empty() {
                    debug!(%format, "Empty resume file, using pasted text");
                } else {
                    resume_file = Some((format, bytes));
                }
            }
            "keyword_min_frequency" | "keyword_top_n" | "match_min_frequency" | "match_top_n" => {
                let raw = field.text().await.map_err(multipart_error)?;
                let value = parse_count(&name, &raw)?;
                match name.as_str() {
                    "keyword_min_frequency" => overrides.keyword_min_frequency = Some(value),
                    "keyword_top_n" => overrides.keyword_top_n = Some(value),
                    "match_min_frequency" => overrides.match_min_frequency = Some(value),
                    _ => overrides.match_top_n = Some(value),
                }
            }
            other => debug!("Ignoring unknown multipart field '{other}'"),
        }
    }

    let resume_text = match resume_file {
        Some((format, bytes)) => {
            info!(%format, size = bytes.len(), "Extracting resume text");
            state.extractor.extract(format, bytes).await?
        }
        None => pasted_resume,
    };

    let params = state.config.analysis.with_overrides(overrides);
    let report = analyze(&state.resources, &jd_text, &resume_text, params)?;
    Ok(Json(report))
}

/// GET /api/v1/tips
pub async fn handle_tips() -> Json<Value> {
    Json(json!({ "tips": improvement_tips(), "disclaimer": DISCLAIMER }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
    }
}

fn parse_count(field: &str, raw: &str) -> Result<usize, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{field} must be a non-negative integer")))
}

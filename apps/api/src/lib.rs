//! ats-api — keyword match scoring between a job description and a resume.
//!
//! The engine lives in `analysis` and is pure, synchronous Rust; everything
//! else is the HTTP boundary around it.

/// Normalization, keyword extraction, match scoring, and the analysis pipeline.
pub mod analysis;
/// Environment configuration.
pub mod config;
/// Plain / PDF / DOCX text extraction for uploaded resumes.
pub mod documents;
/// HTTP error type.
pub mod errors;
/// Axum router and handlers.
pub mod routes;
/// Shared handler state.
pub mod state;

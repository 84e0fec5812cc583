//! Document → plain text, ahead of the analysis engine.
//!
//! Supported: plain text (UTF-8), PDF (`pdf-extract`), DOCX (zip + WordprocessingML).
//! Anything else is rejected with `UnsupportedFormat` before analysis runs.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>` so the backend can be swapped
//! (e.g. in tests) without touching the handlers.

pub mod docx;
pub mod pdf;

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Plain,
    Pdf,
    Docx,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl DocumentFormat {
    /// Maps a MIME type (parameters such as `charset` are ignored).
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "text/plain" => Some(Self::Plain),
            "application/pdf" => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" | "text" => Some(Self::Plain),
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Declared content type wins; the file extension is the fallback for
    /// clients that send `application/octet-stream` or nothing.
    pub fn resolve(content_type: Option<&str>, file_name: Option<&str>) -> Result<Self, DocumentError> {
        content_type
            .and_then(Self::from_mime)
            .or_else(|| file_name.and_then(Self::from_file_name))
            .ok_or_else(|| {
                DocumentError::UnsupportedFormat(
                    content_type
                        .or(file_name)
                        .unwrap_or("unknown")
                        .to_string(),
                )
            })
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Plain => "plain text",
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type for resume: {0}")]
    UnsupportedFormat(String),

    #[error("Could not extract text from {format} document: {reason}")]
    Unreadable {
        format: DocumentFormat,
        reason: String,
    },
}

impl DocumentError {
    pub(crate) fn unreadable(format: DocumentFormat, reason: impl fmt::Display) -> Self {
        Self::Unreadable {
            format,
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, format: DocumentFormat, bytes: Bytes) -> Result<String, DocumentError>;
}

/// Default backend. PDF and DOCX parsing is blocking and runs on the blocking
/// pool; a panic inside a parser surfaces as `Unreadable`.
pub struct DefaultTextExtractor;

#[async_trait]
impl TextExtractor for DefaultTextExtractor {
    async fn extract(&self, format: DocumentFormat, bytes: Bytes) -> Result<String, DocumentError> {
        match format {
            DocumentFormat::Plain => decode_plain(&bytes),
            DocumentFormat::Pdf | DocumentFormat::Docx => {
                tokio::task::spawn_blocking(move || match format {
                    DocumentFormat::Pdf => pdf::extract_pdf_text(&bytes),
                    _ => docx::extract_docx_text(&bytes),
                })
                .await
                .map_err(|e| DocumentError::unreadable(format, e))?
            }
        }
    }
}

fn decode_plain(bytes: &[u8]) -> Result<String, DocumentError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DocumentError::unreadable(DocumentFormat::Plain, format!("not valid UTF-8 ({e})")))?;
    Ok(text.trim_start_matches('\u{feff}').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_mime() {
        assert_eq!(DocumentFormat::from_mime("text/plain"), Some(DocumentFormat::Plain));
        assert_eq!(
            DocumentFormat::from_mime("text/plain; charset=utf-8"),
            Some(DocumentFormat::Plain)
        );
        assert_eq!(DocumentFormat::from_mime("Application/PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_mime(DOCX_MIME), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_mime("image/png"), None);
    }

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(DocumentFormat::from_file_name("cv.PDF"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_file_name("resume.final.docx"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_file_name("notes.txt"), Some(DocumentFormat::Plain));
        assert_eq!(DocumentFormat::from_file_name("resume.doc"), None);
        assert_eq!(DocumentFormat::from_file_name("README"), None);
    }

    #[test]
    fn test_resolve_prefers_mime_then_extension() {
        let f = DocumentFormat::resolve(Some("application/octet-stream"), Some("cv.pdf")).unwrap();
        assert_eq!(f, DocumentFormat::Pdf);
        let f = DocumentFormat::resolve(Some("text/plain"), Some("cv.pdf")).unwrap();
        assert_eq!(f, DocumentFormat::Plain);
    }

    #[test]
    fn test_resolve_unsupported() {
        let err = DocumentFormat::resolve(Some("image/png"), Some("photo.png")).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedFormat(ref t) if t == "image/png"));
        let err = DocumentFormat::resolve(None, None).unwrap_err();
        assert!(err.to_string().contains("unknown"));
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let text = DefaultTextExtractor
            .extract(DocumentFormat::Plain, Bytes::from_static("\u{feff}Rust engineer".as_bytes()))
            .await
            .unwrap();
        assert_eq!(text, "Rust engineer");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_unreadable() {
        let err = DefaultTextExtractor
            .extract(DocumentFormat::Plain, Bytes::from_static(&[0xff, 0xfe, 0xfd]))
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { format: DocumentFormat::Plain, .. }));
    }

    #[tokio::test]
    async fn test_garbage_pdf_is_unreadable() {
        let err = DefaultTextExtractor
            .extract(DocumentFormat::Pdf, Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { format: DocumentFormat::Pdf, .. }));
    }

    #[tokio::test]
    async fn test_docx_extraction_runs_off_thread() {
        let bytes = docx::tests::build_docx(&["Python developer", "SQL &amp; Rust"]);
        let text = DefaultTextExtractor
            .extract(DocumentFormat::Docx, Bytes::from(bytes))
            .await
            .unwrap();
        assert_eq!(text, "Python developer\nSQL & Rust");
    }
}

use crate::documents::{DocumentError, DocumentFormat};

/// Extracts the text of every page, in page order. Blocking.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| DocumentError::unreadable(DocumentFormat::Pdf, e))
}

//! DOCX text extraction.
//!
//! A DOCX file is a zip archive; the body lives in `word/document.xml` as
//! WordprocessingML. Text runs (`<w:t>`) are concatenated per paragraph
//! (`<w:p>`), tabs and breaks are kept, and paragraphs are joined with `\n`.

use std::io::{Cursor, Read};

use xml::reader::{EventReader, XmlEvent};
use zip::ZipArchive;

use crate::documents::{DocumentError, DocumentFormat};

const DOCUMENT_XML: &str = "word/document.xml";

/// Blocking.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(unreadable)?;
    let mut entry = archive.by_name(DOCUMENT_XML).map_err(unreadable)?;
    let mut xml = Vec::new();
    entry.read_to_end(&mut xml).map_err(unreadable)?;

    paragraph_text(&xml).map_err(unreadable)
}

fn unreadable(e: impl std::fmt::Display) -> DocumentError {
    DocumentError::unreadable(DocumentFormat::Docx, e)
}

/// Elements are matched on their local name so both the transitional and the
/// strict WordprocessingML namespaces are accepted.
fn paragraph_text(xml: &[u8]) -> Result<String, xml::reader::Error> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    for event in EventReader::new(xml) {
        match event? {
            XmlEvent::StartElement { name, .. } => match name.local_name.as_str() {
                "t" => in_text = true,
                "tab" => current.push('\t'),
                "br" | "cr" => current.push('\n'),
                _ => {}
            },
            XmlEvent::EndElement { name } => match name.local_name.as_str() {
                "t" => in_text = false,
                "p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            XmlEvent::Characters(text) | XmlEvent::CData(text) | XmlEvent::Whitespace(text)
                if in_text =>
            {
                current.push_str(&text)
            }
            _ => {}
        }
    }
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Builds a minimal DOCX whose body has one paragraph per entry.
    /// Entries are inserted verbatim, so they must already be XML-escaped.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!(r#"<w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t xml:space="preserve">{p}</w:t></w:r></w:p>"#))
            .collect();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(DOCUMENT_XML, SimpleFileOptions::default()).unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = build_docx(&["Senior Engineer", "Rust, Kafka"]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Senior Engineer\nRust, Kafka");
    }

    /// Wraps a `w:body` fragment in a namespaced `w:document` root.
    fn document(body: &str) -> Vec<u8> {
        format!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        )
        .into_bytes()
    }

    #[test]
    fn test_runs_tabs_and_breaks() {
        let xml = document(
            r#"<w:p><w:r><w:t>Skills:</w:t></w:r><w:r><w:tab/><w:t>Go</w:t><w:br/><w:t xml:space="preserve"> SQL</w:t></w:r></w:p><w:p/>"#,
        );
        assert_eq!(paragraph_text(&xml).unwrap(), "Skills:\tGo\n SQL\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = document(r#"<w:p><w:pPr><w:rPr>junk</w:rPr></w:pPr><w:r><w:t>kept</w:t></w:r></w:p>"#);
        assert_eq!(paragraph_text(&xml).unwrap(), "kept");
    }

    #[test]
    fn test_entities_decoded() {
        let xml = document(
            r#"<w:p><w:r><w:t>R&amp;D &lt;team&gt; &#65;&#x42; &quot;x&quot; &apos;</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraph_text(&xml).unwrap(), "R&D <team> AB \"x\" '");
    }

    #[test]
    fn test_cdata_section_is_text() {
        let xml = document(
            r#"<w:p><w:r><w:t>Python</w:t></w:r></w:p><w:p><w:r><w:t><![CDATA[Rust & Go]]></w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraph_text(&xml).unwrap(), "Python\nRust & Go");
    }

    #[test]
    fn test_attribute_containing_angle_bracket() {
        let xml = document(r#"<w:p><w:pPr><w:pStyle w:val="a>b"/></w:pPr><w:r><w:t>Lead</w:t></w:r></w:p>"#);
        assert_eq!(paragraph_text(&xml).unwrap(), "Lead");
    }

    #[test]
    fn test_whitespace_only_run_preserved() {
        let xml = document(
            r#"<w:p><w:r><w:t>Rust</w:t></w:r><w:r><w:t xml:space="preserve"> </w:t></w:r><w:r><w:t>Go</w:t></w:r></w:p>"#,
        );
        assert_eq!(paragraph_text(&xml).unwrap(), "Rust Go");
    }

    #[test]
    fn test_malformed_document_xml_is_unreadable() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(DOCUMENT_XML, SimpleFileOptions::default()).unwrap();
        writer.write_all(b"<w:document><w:body></w:document>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { format: DocumentFormat::Docx, .. }));
    }

    #[test]
    fn test_not_a_zip_is_unreadable() {
        let err = extract_docx_text(b"plain bytes").unwrap_err();
        assert!(matches!(err, DocumentError::Unreadable { format: DocumentFormat::Docx, .. }));
    }

    #[test]
    fn test_zip_without_document_xml_is_unreadable() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("other.txt", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = extract_docx_text(&bytes).unwrap_err();
        assert!(err.to_string().contains("DOCX"));
    }
}

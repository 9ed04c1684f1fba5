//! Document text extraction: turns an uploaded resume file into plain text
//! for the analyzers.
//!
//! Supported: PDF (via `pdf-extract`), DOCX (via `zip` + `quick-xml`) and plain
//! text. Both binary readers are CPU-bound and the PDF reader can panic on
//! malformed input, so they run inside `tokio::task::spawn_blocking` where a
//! panic surfaces as a `JoinError`.

pub mod docx;
pub mod handlers;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Cleaned text shorter than this is treated as an unreadable document.
const MIN_TEXT_CHARS: usize = 10;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Please upload a PDF, DOCX or plain-text resume.")]
    UnsupportedType(String),

    #[error("Failed to parse PDF: {0}")]
    PdfParse(String),

    #[error("Failed to parse DOCX: {0}")]
    DocxParse(String),

    #[error("Resume seems empty or could not be read properly.")]
    EmptyDocument,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Decides the kind from the declared content type, then the file extension.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let name = file_name.to_lowercase();
        match content_type {
            Some("application/pdf") => Some(DocumentKind::Pdf),
            Some(DOCX_MIME) => Some(DocumentKind::Docx),
            Some("text/plain") => Some(DocumentKind::PlainText),
            _ if name.ends_with(".pdf") => Some(DocumentKind::Pdf),
            _ if name.ends_with(".docx") => Some(DocumentKind::Docx),
            _ if name.ends_with(".txt") => Some(DocumentKind::PlainText),
            _ => None,
        }
    }
}

/// Extracts and cleans the text of an uploaded document.
pub async fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    data: Bytes,
) -> Result<String, ExtractError> {
    let kind = DocumentKind::detect(file_name, content_type)
        .ok_or_else(|| ExtractError::UnsupportedType(file_name.to_string()))?;

    let raw = match kind {
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| ExtractError::PdfParse(format!("PDF reader aborted: {e}")))?
        .map_err(ExtractError::PdfParse)?,
        DocumentKind::Docx => tokio::task::spawn_blocking(move || docx::extract_docx_text(&data))
            .await
            .map_err(|e| ExtractError::DocxParse(format!("DOCX reader aborted: {e}")))?
            .map_err(|e| ExtractError::DocxParse(e.to_string()))?,
        DocumentKind::PlainText => String::from_utf8_lossy(&data).into_owned(),
    };

    let text = clean_extracted_text(&raw);
    debug!(
        file_name,
        ?kind,
        raw_chars = raw.len(),
        clean_chars = text.len(),
        "document text extracted"
    );

    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(ExtractError::EmptyDocument);
    }
    Ok(text)
}

/// CRLF → LF, drops everything outside printable ASCII and newline, trims.
pub fn clean_extracted_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .chars()
        .filter(|c| *c == '\n' || (' '..='~').contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type_then_extension() {
        assert_eq!(
            DocumentKind::detect("resume.bin", Some("application/pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("Resume.PDF", Some("application/octet-stream")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("resume.txt", None),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::detect("resume.docx", None),
            Some(DocumentKind::Docx)
        );
        assert_eq!(
            DocumentKind::detect("upload", Some(DOCX_MIME)),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::detect("resume.doc", None), None);
        assert_eq!(DocumentKind::detect("resume.rtf", Some("application/rtf")), None);
    }

    #[test]
    fn test_clean_normalizes_line_endings_and_strips_non_ascii() {
        let cleaned = clean_extracted_text("  Jane\u{a0}Doe\r\n\u{2022} Rust\tdev \u{1F600}\n ");
        assert_eq!(cleaned, "JaneDoe\n Rustdev");
    }

    #[test]
    fn test_clean_keeps_printable_ascii() {
        let input = "Skills: C++, SQL (5 yrs) - 100% ~ok";
        assert_eq!(clean_extracted_text(input), input);
    }

    #[tokio::test]
    async fn test_plain_text_extraction() {
        let data = Bytes::from_static(b"Experience\r\nAcme Corp, 2019-2024\r\n");
        let text = extract_text("cv.txt", Some("text/plain"), data).await.unwrap();
        assert_eq!(text, "Experience\nAcme Corp, 2019-2024");
    }

    #[tokio::test]
    async fn test_too_short_document_rejected() {
        let data = Bytes::from_static(b"  hi  ");
        let err = extract_text("cv.txt", None, data).await.unwrap_err();
        assert!(matches!(err, ExtractError::EmptyDocument));
    }

    #[tokio::test]
    async fn test_unsupported_type_rejected() {
        let data = Bytes::from_static(b"{\\rtf1 resume}");
        let err = extract_text("cv.rtf", None, data).await.unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedType(name) if name == "cv.rtf"));
    }

    #[tokio::test]
    async fn test_docx_extraction() {
        let data = Bytes::from(docx::tests::docx_bytes(
            "<w:p><w:r><w:t>Skills</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Rust, SQL, Docker</w:t></w:r></w:p>",
        ));
        let text = extract_text("resume.docx", Some(DOCX_MIME), data)
            .await
            .unwrap();
        assert_eq!(text, "Skills\nRust, SQL, Docker");
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_parse_error() {
        let data = Bytes::from_static(b"PK\x03\x04 truncated archive");
        let err = extract_text("resume.docx", Some(DOCX_MIME), data)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::DocxParse(_)));
    }

    #[tokio::test]
    async fn test_corrupt_pdf_is_parse_error() {
        let data = Bytes::from_static(b"this is not a pdf at all");
        let err = extract_text("cv.pdf", Some("application/pdf"), data)
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::PdfParse(_)));
    }
}

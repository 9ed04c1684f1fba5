//! Raw text of a Word (OOXML) document.
//!
//! Only `word/document.xml` is read. Each paragraph becomes one line; run text
//! is concatenated, `w:tab` becomes a space and `w:br` a newline. Headers,
//! footers, footnotes and styling are ignored.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use zip::ZipArchive;

const DOCUMENT_XML: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a DOCX archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("could not read document body: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Opens the archive and returns the paragraph text of its main document part.
pub fn extract_docx_text(data: &[u8]) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_XML)?.read_to_string(&mut xml)?;
    document_xml_text(&xml)
}

/// Walks `w:document` markup and collects the text of every `w:t` run.
pub fn document_xml_text(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => out.push(' '),
                b"br" | b"cr" if in_run => out.push('\n'),
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => out.push_str(&t.unescape()?),
            Event::CData(t) if in_text => out.push_str(&String::from_utf8_lossy(&t)),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    fn document(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{NS}"><w:body>{body}</w:body></w:document>"#
        )
    }

    /// Builds an in-memory `.docx` whose only part is `word/document.xml`.
    pub(crate) fn docx_bytes(body: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file(DOCUMENT_XML, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(document(body).as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_become_lines() {
        let xml = document(
            "<w:p><w:r><w:t>Experience</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Acme </w:t></w:r><w:r><w:t>Corp</w:t></w:r></w:p>",
        );
        assert_eq!(document_xml_text(&xml).unwrap(), "Experience\nAcme Corp\n");
    }

    #[test]
    fn test_tabs_breaks_and_entities() {
        let xml = document(
            "<w:p><w:pPr><w:tabs><w:tab w:val=\"left\" w:pos=\"720\"/></w:tabs></w:pPr>\
             <w:r><w:t>Skills</w:t><w:tab/><w:t>R&amp;D</w:t><w:br/><w:t>Rust</w:t></w:r></w:p>",
        );
        assert_eq!(document_xml_text(&xml).unwrap(), "Skills R&D\nRust\n");
    }

    #[test]
    fn test_text_outside_runs_is_ignored() {
        let xml = document(
            "<w:p><w:pPr><w:pStyle w:val=\"Heading1\"/></w:pPr><w:r><w:t>Education</w:t></w:r></w:p>",
        );
        assert_eq!(document_xml_text(&xml).unwrap(), "Education\n");
    }

    #[test]
    fn test_reads_archive() {
        let data = docx_bytes("<w:p><w:r><w:t>Projects</w:t></w:r></w:p>");
        assert_eq!(extract_docx_text(&data).unwrap(), "Projects\n");
    }

    #[test]
    fn test_not_a_zip_is_archive_error() {
        let err = extract_docx_text(b"plain bytes, not an archive").unwrap_err();
        assert!(matches!(err, DocxError::Archive(_)));
    }

    #[test]
    fn test_archive_without_document_part() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_docx_text(&data),
            Err(DocxError::Archive(_))
        ));
    }

    #[test]
    fn test_mismatched_tags_are_xml_error() {
        let err = document_xml_text("<w:p><w:r><w:t>x</w:p>").unwrap_err();
        assert!(matches!(err, DocxError::Xml(_)));
    }
}

//! Document text extraction
//!
//! Walks the PDF page tree in order and extracts each page's text. A page
//! whose extraction fails contributes an empty string and the scan
//! continues; a document that cannot be loaded at all is an error for the
//! caller to report.

use lopdf::Document;

use crate::types::ScreenResult;

/// Extracted per-page text of one document.
#[derive(Debug, Clone, Default)]
pub struct DocumentText {
    /// One string per page, in page order. Pages that failed extraction
    /// are present as empty strings.
    pub pages: Vec<String>,
}

impl DocumentText {
    /// Page texts joined with a line break, the form the analyzer expects.
    pub fn joined(&self) -> String {
        self.pages.join("\n")
    }
}

/// Extract per-page text from PDF bytes.
pub fn document_text(bytes: &[u8]) -> ScreenResult<DocumentText> {
    let doc = Document::load_mem(bytes)?;

    let pages = doc
        .get_pages()
        .keys()
        .map(|&number| doc.extract_text(&[number]).unwrap_or_default())
        .collect();

    Ok(DocumentText { pages })
}

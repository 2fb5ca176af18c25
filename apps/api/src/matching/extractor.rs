//! Résumé text extraction from uploaded PDF bytes.

use async_trait::async_trait;
use lopdf::Document;
use tracing::debug;

use crate::errors::AppError;

/// Extracts plain text from an uploaded résumé.
///
/// Carried in `AppState` as `Arc<dyn ResumeExtractor>` so handlers never
/// name a concrete backend.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, bytes: &[u8]) -> Result<String, AppError>;
}

/// Default extractor backed by `lopdf`.
pub struct PdfResumeExtractor;

#[async_trait]
impl ResumeExtractor for PdfResumeExtractor {
    async fn extract(&self, bytes: &[u8]) -> Result<String, AppError> {
        extract_pdf_text(bytes)
    }
}

/// Concatenates the text of every page in document order, one line per
/// page. Pages that yield no text are skipped; a document where every page
/// is blank extracts to an empty string, which is not an error.
///
/// Fails with [`AppError::Extraction`] when the bytes are not a parseable
/// PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let document =
        Document::load_mem(bytes).map_err(|e| AppError::Extraction(e.to_string()))?;

    let mut pages_text: Vec<String> = Vec::new();
    for page_number in document.get_pages().keys() {
        // A page that fails to decode contributes nothing instead of
        // failing the whole upload.
        let text = document.extract_text(&[*page_number]).unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            debug!("page {page_number} yielded no text, skipping");
            continue;
        }
        pages_text.push(text.to_string());
    }

    Ok(pages_text.join("\n"))
}

/// Builds a minimal single-font PDF with one content stream per entry in
/// `pages`. An empty entry produces a page with no text. Shared by the
/// extractor and handler tests.
#[cfg(test)]
pub(crate) fn minimal_test_pdf(pages: &[&str]) -> Vec<u8> {
    let page_count = pages.len();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 4 + 2 * i))
        .collect();

    // Objects 1..=3 are catalog, page tree and font; each page then
    // contributes a page object and a content stream.
    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
    ];
    for (i, text) in pages.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * i
        ));
        let stream = if text.is_empty() {
            String::new()
        } else {
            format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET")
        };
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            stream.len(),
            stream
        ));
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", index + 1).as_bytes());
    }
    let xref_offset = out.len();
    out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in offsets {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
            objects.len() + 1
        )
        .as_bytes(),
    );
    out
}

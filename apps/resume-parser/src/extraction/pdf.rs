use super::{or_empty, ExtractionError};

/// Text layer of every page, concatenated in page order.
/// Image-only pages contribute nothing; there is no OCR fallback.
pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    or_empty(read_pages(bytes).map(|pages| pages.concat()), filename)
}

fn read_pages(bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
    pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))
}

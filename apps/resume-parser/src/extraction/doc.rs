use tracing::warn;

/// Legacy binary `.doc` files are not parsed. The file still gets a record
/// (classified as an extraction failure downstream).
pub fn extract_text(_bytes: &[u8], filename: &str) -> String {
    warn!(
        "Skipping .doc file: {}. Please convert to DOCX or PDF for better results.",
        filename
    );
    String::new()
}

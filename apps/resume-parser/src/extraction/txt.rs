/// Decodes bytes as UTF-8, dropping undecodable sequences instead of
/// substituting replacement characters.
pub fn extract_text(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

use super::{or_empty, ExtractionError};

/// Separator written after every paragraph.
pub const PARAGRAPH_BREAK: char = '\n';

/// Top-level paragraph text in document order, one paragraph per line.
/// Table contents are not included.
pub fn extract_text(bytes: &[u8], filename: &str) -> String {
    or_empty(read_paragraphs(bytes), filename)
}

fn read_paragraphs(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut text = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            push_paragraph(&mut text, paragraph);
            text.push(PARAGRAPH_BREAK);
        }
    }
    Ok(text)
}

fn push_paragraph(out: &mut String, paragraph: &Paragraph) {
    for child in &paragraph.children {
        push_paragraph_child(out, child);
    }
}

// Hyperlinked runs (typically e-mail addresses) are nested one level down.
fn push_paragraph_child(out: &mut String, child: &ParagraphChild) {
    match child {
        ParagraphChild::Run(run) => {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => out.push_str(&t.text),
                    RunChild::Tab(_) => out.push('\t'),
                    _ => {}
                }
            }
        }
        ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                push_paragraph_child(out, nested);
            }
        }
        _ => {}
    }
}

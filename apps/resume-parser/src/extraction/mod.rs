//! Format dispatch and per-format text extraction.
//!
//! Every extractor degrades to an empty string on failure. Empty text is
//! classified later as "extraction failed"; an unknown extension is a
//! separate `Dispatched::Unsupported` outcome.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

pub mod doc;
pub mod docx;
pub mod pdf;
pub mod txt;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF parsing error: {0}")]
    Pdf(String),

    #[error("DOCX parsing error: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Doc,
    Txt,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Doc => "doc",
            Self::Txt => "txt",
        }
    }
}

/// Result of routing one archive entry to an extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Text { format: DocumentFormat, text: String },
    /// `extension` is lowercased with its leading dot, or empty.
    Unsupported { extension: String },
}

/// Lowercased extension of `filename` including the dot (".pdf"), or "" when
/// there is none. Dotfiles such as ".profile" have no extension.
pub fn file_extension(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Picks an extractor by extension (case-insensitive) and runs it.
pub fn dispatch(filename: &str, bytes: &[u8]) -> Dispatched {
    let extension = file_extension(filename);
    let format = match DocumentFormat::from_extension(extension.trim_start_matches('.')) {
        Some(format) => format,
        None => {
            warn!("Unsupported file type: {} for {}", extension, filename);
            return Dispatched::Unsupported { extension };
        }
    };

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(bytes, filename),
        DocumentFormat::Docx => docx::extract_text(bytes, filename),
        DocumentFormat::Doc => doc::extract_text(bytes, filename),
        DocumentFormat::Txt => txt::extract_text(bytes),
    };

    debug!(
        "Extracted {} characters from {} ({})",
        text.chars().count(),
        filename,
        format.as_str()
    );
    Dispatched::Text { format, text }
}

/// Converts an extractor result to text, logging and swallowing the error.
fn or_empty(result: Result<String, ExtractionError>, filename: &str) -> String {
    result.unwrap_or_else(|e| {
        warn!("Error reading {}: {}", filename, e);
        String::new()
    })
}

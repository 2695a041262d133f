use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Top-level error for a batch run. Anything below the orchestrator is
/// absorbed into a record; only these abort the run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("LLM client error: {0}")]
    Llm(#[from] LlmError),
}

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid archive: {0}")]
    Invalid(#[from] zip::result::ZipError),

    #[error("Failed to read entry '{name}': {message}")]
    EntryRead { name: String, message: String },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unsupported report format for {}: expected .csv or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("I/O error writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

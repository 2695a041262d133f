use crate::models::record::{
    ResumeRecord, EXTRACTION_FAILED, EXTRACTION_FAILED_PREVIEW, PROCESSING_ERROR,
    UNSUPPORTED_PREVIEW, UNSUPPORTED_TYPE,
};

/// Longest error text carried into a `PROCESSING ERROR` preview.
pub const ERROR_PREVIEW_CHARS: usize = 100;

/// How processing of one archive entry ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Text was extracted and handed to the field extractor. The record may
    /// still have null fields if the service call or parsing failed.
    Parsed(ResumeRecord),
    Unsupported { extension: String },
    /// A supported format produced no usable text.
    ExtractionFailed,
    /// Reading or extracting the entry failed unexpectedly.
    ProcessingError(String),
}

impl EntryOutcome {
    pub fn into_record(self, filename: &str) -> ResumeRecord {
        match self {
            EntryOutcome::Parsed(record) => record,
            EntryOutcome::Unsupported { .. } => {
                ResumeRecord::sentinel(filename, UNSUPPORTED_TYPE, UNSUPPORTED_PREVIEW.to_string())
            }
            EntryOutcome::ExtractionFailed => ResumeRecord::sentinel(
                filename,
                EXTRACTION_FAILED,
                EXTRACTION_FAILED_PREVIEW.to_string(),
            ),
            EntryOutcome::ProcessingError(message) => {
                let truncated: String = message.chars().take(ERROR_PREVIEW_CHARS).collect();
                ResumeRecord::sentinel(filename, PROCESSING_ERROR, format!("Error: {truncated}"))
            }
        }
    }
}

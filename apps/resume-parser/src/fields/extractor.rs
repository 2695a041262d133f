use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::DEFAULT_PROMPT_CHAR_LIMIT;
use crate::fields::prompts::FIELD_EXTRACTION_PROMPT;
use crate::fields::response::parse_candidate_fields;
use crate::llm_client::prompts::RESUME_EXTRACTION_SYSTEM;
use crate::llm_client::CompletionService;
use crate::models::ResumeRecord;

pub const PREVIEW_CHARS: usize = 200;
pub const PREVIEW_SUFFIX: &str = "...";

/// Turns extracted resume text into a `ResumeRecord` via the extraction
/// service. Every path returns a record; failures leave the parsed fields null.
#[derive(Clone)]
pub struct FieldExtractor {
    /// `None` when no credential is configured.
    service: Option<Arc<dyn CompletionService>>,
    prompt_char_limit: usize,
}

impl FieldExtractor {
    pub fn new(service: Option<Arc<dyn CompletionService>>) -> Self {
        Self {
            service,
            prompt_char_limit: DEFAULT_PROMPT_CHAR_LIMIT,
        }
    }

    pub fn with_prompt_char_limit(mut self, limit: usize) -> Self {
        self.prompt_char_limit = limit;
        self
    }

    pub async fn extract(&self, text: &str, filename: &str) -> ResumeRecord {
        let mut record = ResumeRecord::empty(filename, preview(text));

        if text.trim().is_empty() {
            debug!("  No text to parse for {}.", filename);
            return record;
        }

        let Some(service) = &self.service else {
            warn!("  OpenAI API key not set. Skipping parsing for {}.", filename);
            return record;
        };

        let prompt = build_prompt(text, self.prompt_char_limit);
        let raw = match service.complete(&prompt, RESUME_EXTRACTION_SYSTEM).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("  Error calling extraction service for {}: {}", filename, e);
                return record;
            }
        };

        match parse_candidate_fields(&raw) {
            Ok(fields) => record.apply(fields),
            Err(e) => {
                error!("  Error parsing JSON response for {}: {}", filename, e);
                error!("  Raw response: {}", raw);
            }
        }

        record
    }
}

/// First `PREVIEW_CHARS` characters with line breaks flattened to spaces,
/// always followed by `PREVIEW_SUFFIX`.
pub fn preview(text: &str) -> String {
    let mut out: String = text
        .chars()
        .take(PREVIEW_CHARS)
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    out.push_str(PREVIEW_SUFFIX);
    out
}

pub fn build_prompt(text: &str, char_limit: usize) -> String {
    let truncated: String = text.chars().take(char_limit).collect();
    FIELD_EXTRACTION_PROMPT.replace("{resume_text}", &truncated)
}

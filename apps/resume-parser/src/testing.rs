//! Deterministic fakes shared by unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::archive::{ArchiveSource, EntryInfo};
use crate::errors::ArchiveError;
use crate::llm_client::{CompletionService, LlmError};

/// One scripted reply from the fake extraction service.
pub enum Reply {
    Text(String),
    ApiError { status: u16, message: String },
}

/// Extraction service that replays scripted replies in order and records
/// every prompt it receives. Once the script is exhausted it returns
/// `LlmError::EmptyContent`.
#[derive(Default)]
pub struct ScriptedService {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|t| Reply::Text(t.into())).collect())
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionService for ScriptedService {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::ApiError { status, message }) => Err(LlmError::Api { status, message }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

/// In-memory archive. Entries added with `failing` error on read.
#[derive(Default)]
pub struct MemoryArchive {
    entries: Vec<(String, Option<Vec<u8>>)>,
}

impl MemoryArchive {
    pub fn file(mut self, name: &str, bytes: impl AsRef<[u8]>) -> Self {
        self.entries
            .push((name.to_string(), Some(bytes.as_ref().to_vec())));
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), None));
        self
    }
}

impl ArchiveSource for MemoryArchive {
    fn entries(&self) -> Vec<EntryInfo> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, (name, _))| EntryInfo::new(index, name.clone()))
            .collect()
    }

    fn read(&mut self, entry: &EntryInfo) -> Result<Vec<u8>, ArchiveError> {
        self.entries[entry.index]
            .1
            .clone()
            .ok_or_else(|| ArchiveError::EntryRead {
                name: entry.name.clone(),
                message: "simulated read failure".to_string(),
            })
    }
}

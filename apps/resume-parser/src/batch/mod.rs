//! Batch orchestration: one record per archive entry, in archive order.
//!
//! Each entry is classified into an `EntryOutcome` and then mapped to a
//! record. Nothing that happens while processing a single entry can stop the
//! batch; only opening the archive (done by the caller) is fatal.

pub mod outcome;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, info};

use crate::archive::{ArchiveSource, EntryInfo};
use crate::extraction::{self, Dispatched};
use crate::fields::FieldExtractor;
use crate::models::ResumeRecord;

pub use outcome::EntryOutcome;

/// Per-outcome counts for the end-of-run summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub skipped: usize,
    pub parsed: usize,
    pub unsupported: usize,
    pub extraction_failed: usize,
    pub processing_errors: usize,
}

impl BatchSummary {
    fn count(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Parsed(_) => self.parsed += 1,
            EntryOutcome::Unsupported { .. } => self.unsupported += 1,
            EntryOutcome::ExtractionFailed => self.extraction_failed += 1,
            EntryOutcome::ProcessingError(_) => self.processing_errors += 1,
        }
    }
}

/// Ordered, immutable result of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    records: Vec<ResumeRecord>,
    summary: BatchSummary,
}

impl BatchReport {
    pub fn records(&self) -> &[ResumeRecord] {
        &self.records
    }

    pub fn summary(&self) -> BatchSummary {
        self.summary
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives dispatch and field extraction over every entry of an archive,
/// strictly one entry at a time.
pub struct BatchOrchestrator {
    extractor: FieldExtractor,
}

impl BatchOrchestrator {
    pub fn new(extractor: FieldExtractor) -> Self {
        Self { extractor }
    }

    pub async fn run<A: ArchiveSource>(&self, archive: &mut A) -> BatchReport {
        let entries = archive.entries();
        let total = entries.len();
        let mut report = BatchReport::default();

        for (i, entry) in entries.iter().enumerate() {
            info!("Processing file {}/{}: {} ...", i + 1, total, entry.name);

            if entry.is_skipped() {
                info!("Skipping metadata file or directory.");
                report.summary.skipped += 1;
                continue;
            }

            let outcome = self.process_entry(archive, entry).await;
            log_outcome(entry, &outcome);
            report.summary.count(&outcome);
            report.records.push(outcome.into_record(&entry.name));
        }

        report
    }

    async fn process_entry<A: ArchiveSource>(
        &self,
        archive: &mut A,
        entry: &EntryInfo,
    ) -> EntryOutcome {
        let bytes = match archive.read(entry) {
            Ok(bytes) => bytes,
            Err(e) => return EntryOutcome::ProcessingError(e.to_string()),
        };

        // Third-party parsers can panic on hostile input; contain it to this entry.
        let dispatched =
            match panic::catch_unwind(AssertUnwindSafe(|| extraction::dispatch(&entry.name, &bytes)))
            {
                Ok(dispatched) => dispatched,
                Err(payload) => return EntryOutcome::ProcessingError(panic_message(payload)),
            };

        match dispatched {
            Dispatched::Unsupported { extension } => EntryOutcome::Unsupported { extension },
            Dispatched::Text { format, text } if text.trim().is_empty() => {
                debug!("No text recovered from {} entry {}", format.as_str(), entry.name);
                EntryOutcome::ExtractionFailed
            }
            Dispatched::Text { text, .. } => {
                EntryOutcome::Parsed(self.extractor.extract(&text, &entry.name).await)
            }
        }
    }
}

fn log_outcome(entry: &EntryInfo, outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::Parsed(record) => info!(
            "  Extracted: Name='{}', Email='{}'",
            record.name.as_deref().unwrap_or("None"),
            record.email.as_deref().unwrap_or("None")
        ),
        EntryOutcome::Unsupported { extension } => {
            debug!("  Recorded {} as unsupported ({:?})", entry.name, extension)
        }
        EntryOutcome::ExtractionFailed => info!(
            "  Could not extract text or text was empty for {}.",
            entry.name
        ),
        EntryOutcome::ProcessingError(message) => {
            error!("  Error processing file {}: {}", entry.name, message)
        }
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("extractor panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("extractor panicked: {s}")
    } else {
        "extractor panicked".to_string()
    }
}

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::ReportError;
use crate::models::record::{ResumeRecord, COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Persists the ordered records of a batch as a table.
pub trait ReportSink {
    fn write(&self, records: &[ResumeRecord]) -> Result<(), ReportError>;
}

/// Writes the report to a single file; the format follows the extension.
pub struct FileReportSink {
    path: PathBuf,
    format: ReportFormat,
}

impl FileReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let path = path.into();
        let format =
            ReportFormat::from_path(&path).ok_or_else(|| ReportError::UnsupportedFormat(path.clone()))?;
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    fn write(&self, records: &[ResumeRecord]) -> Result<(), ReportError> {
        let mut out = BufWriter::new(File::create(&self.path)?);
        match self.format {
            ReportFormat::Csv => write_csv(&mut out, records)?,
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, records)?;
                out.write_all(b"\n")?;
            }
        }
        out.flush()?;
        info!("Results saved to: {}", self.path.display());
        Ok(())
    }
}

/// Header row plus one row per record; null cells are left empty.
pub fn write_csv<W: Write>(out: &mut W, records: &[ResumeRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", COLUMNS.join(","))?;
    for record in records {
        let row: Vec<String> = record
            .cells()
            .iter()
            .map(|cell| csv_escape(cell.unwrap_or("")))
            .collect();
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

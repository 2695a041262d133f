use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::info;
use zip::ZipArchive;

use crate::errors::ArchiveError;

/// Largest entry that will be read into memory. Resumes are far smaller;
/// anything bigger is reported as a read failure for that entry.
pub const MAX_ENTRY_BYTES: u64 = 64 * 1024 * 1024;

/// Name and position of one archive member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub index: usize,
    pub name: String,
    is_dir: bool,
}

impl EntryInfo {
    /// Directory status inferred from the name (trailing `/` or `\`).
    pub fn new(index: usize, name: String) -> Self {
        let is_dir = name.ends_with('/') || name.ends_with('\\');
        Self {
            index,
            name,
            is_dir,
        }
    }

    pub fn with_dir_flag(mut self, is_dir: bool) -> Self {
        self.is_dir = self.is_dir || is_dir;
        self
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Directory markers and OS metadata that never produce a record.
    pub fn is_skipped(&self) -> bool {
        self.is_dir() || is_metadata_name(&self.name)
    }
}

/// macOS resource forks (`__MACOSX/...`) and Finder `.DS_Store` files.
pub fn is_metadata_name(name: &str) -> bool {
    if name.starts_with("__MACOSX/") {
        return true;
    }
    let basename = name.rsplit('/').next().unwrap_or(name);
    basename == ".DS_Store"
}

/// A sequence of named binary blobs, enumerated in archive order.
/// Reading one entry may fail without affecting the others.
pub trait ArchiveSource {
    fn entries(&self) -> Vec<EntryInfo>;
    fn read(&mut self, entry: &EntryInfo) -> Result<Vec<u8>, ArchiveError>;
}

/// ZIP file on local disk, opened read-only.
pub struct ZipArchiveSource {
    archive: ZipArchive<BufReader<File>>,
    entries: Vec<EntryInfo>,
}

impl ZipArchiveSource {
    /// Fails if the file is missing or is not a readable ZIP.
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        if !path.exists() {
            return Err(ArchiveError::NotFound(path.to_path_buf()));
        }
        let file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;
        info!("Found {} files in the zip.", archive.len());
        let entries = list_entries(&mut archive);
        Ok(Self { archive, entries })
    }
}

/// Names and directory flags of every member, in central directory order.
/// Uses raw access so nothing is decompressed.
fn list_entries<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Vec<EntryInfo> {
    (0..archive.len())
        .map(|i| {
            let raw = archive
                .by_index_raw(i)
                .ok()
                .map(|file| (file.name().to_string(), file.is_dir()));
            match raw {
                Some((name, is_dir)) => EntryInfo::new(i, name).with_dir_flag(is_dir),
                None => {
                    let name = archive
                        .name_for_index(i)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("<entry {i}>"));
                    EntryInfo::new(i, name)
                }
            }
        })
        .collect()
}

impl ArchiveSource for ZipArchiveSource {
    fn entries(&self) -> Vec<EntryInfo> {
        self.entries.clone()
    }

    fn read(&mut self, entry: &EntryInfo) -> Result<Vec<u8>, ArchiveError> {
        let read_error = |message: String| ArchiveError::EntryRead {
            name: entry.name.clone(),
            message,
        };

        let mut file = self
            .archive
            .by_index(entry.index)
            .map_err(|e| read_error(e.to_string()))?;
        // The declared size comes from the archive and is not trusted for allocation.
        if file.size() > MAX_ENTRY_BYTES {
            return Err(read_error(format!(
                "declared size {} bytes exceeds the {} byte limit",
                file.size(),
                MAX_ENTRY_BYTES
            )));
        }

        let mut buf = Vec::new();
        file.by_ref()
            .take(MAX_ENTRY_BYTES + 1)
            .read_to_end(&mut buf)
            .map_err(|e| read_error(e.to_string()))?;
        if buf.len() as u64 > MAX_ENTRY_BYTES {
            return Err(read_error(format!(
                "entry exceeds the {} byte limit",
                MAX_ENTRY_BYTES
            )));
        }
        Ok(buf)
    }
}

//! Handing finished files to storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::export::ExportResult;
use crate::core::SiapError;

/// Where a stored export can be downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub file_name: String,
    /// Path, URL, or other store-specific handle.
    pub location: String,
}

/// Capability that stores an export and makes it downloadable.
pub trait ExportStore {
    fn store(&mut self, result: &ExportResult) -> Result<StoredFile, SiapError>;
}

/// Writes exports as files into a directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    /// The directory is created on first use if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportStore for DirectoryStore {
    fn store(&mut self, result: &ExportResult) -> Result<StoredFile, SiapError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(result.file_name());
        std::fs::write(&path, result.content())?;
        tracing::debug!(path = %path.display(), bytes = result.content().len(), "stored SIAP file");
        Ok(StoredFile {
            file_name: result.file_name().to_string(),
            location: path.display().to_string(),
        })
    }
}

/// Keeps exports in memory, keyed by file name.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of a stored file.
    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ExportStore for MemoryStore {
    fn store(&mut self, result: &ExportResult) -> Result<StoredFile, SiapError> {
        self.files
            .insert(result.file_name().to_string(), result.content().to_vec());
        Ok(StoredFile {
            file_name: result.file_name().to_string(),
            location: format!("memory://{}", result.file_name()),
        })
    }
}

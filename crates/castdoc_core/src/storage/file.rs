//! Plain-text file backend.

use super::{Storage, StorageError, StorageResult};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Writes each saved payload to a fixed path, overwriting previous content.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates a file backend targeting `path`.
    ///
    /// The path is not touched until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the target path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn save(&mut self, data: &str) -> StorageResult<()> {
        match std::fs::write(&self.path, data) {
            Ok(()) => {
                info!(
                    "event=storage_save module=storage backend=file status=ok path={} payload_chars={}",
                    self.path.display(),
                    data.chars().count()
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    "event=storage_save module=storage backend=file status=error path={} error={source}",
                    self.path.display()
                );
                Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        }
    }
}

//! Pluggable persistence strategies for rendered documents.
//!
//! # Responsibility
//! - Define the storage seam consuming one rendered payload per save.
//! - Keep backend details (filesystem, SQLite) behind the trait boundary.
//!
//! # Invariants
//! - `save` receives the fully rendered payload in a single call; backends
//!   never chunk or re-render.
//! - Backend failures surface as typed `StorageError` values, never as
//!   panics.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod memory;
mod sqlite;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::{SavedDocument, SqliteStorage};

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors from document persistence backends.
#[derive(Debug)]
pub enum StorageError {
    /// Filesystem write failure with the target path.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// SQLite transport or bootstrap failure.
    Db(DbError),
    /// Persisted data cannot be converted to a valid read model.
    InvalidData(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted document data: {message}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence strategy consuming one rendered document payload.
pub trait Storage {
    /// Writes the entire payload to the backend target.
    ///
    /// Atomic from the caller's perspective: one call, no partial-write
    /// semantics beyond what the backend itself guarantees.
    fn save(&mut self, data: &str) -> StorageResult<()>;
}

//! In-memory backend simulating a remote database.
//!
//! Cannot fail; every saved payload is retained and queryable, which is
//! what demos and tests use in place of real persistence.

use super::{Storage, StorageResult};
use log::info;

/// Infallible backend retaining every saved payload in order.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    saved: Vec<String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every payload saved so far, oldest first.
    pub fn saved(&self) -> &[String] {
        &self.saved
    }

    /// Returns the most recently saved payload, if any.
    pub fn last_saved(&self) -> Option<&str> {
        self.saved.last().map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn save(&mut self, data: &str) -> StorageResult<()> {
        self.saved.push(data.to_string());
        info!(
            "event=storage_save module=storage backend=memory status=ok payload_chars={} total_saves={}",
            data.chars().count(),
            self.saved.len()
        );
        Ok(())
    }
}

//! Core domain logic for CastDoc.
//!
//! Two independent subsystems live here:
//! - `notify`: a broadcast channel with identity-tracked subscribers.
//! - `model`/`render`/`storage`/`service`: a document built from renderable
//!   elements, saved through a pluggable storage strategy.
//!
//! This crate is the single source of truth for business invariants; the
//! CLI member only drives it.

pub mod db;
pub mod logging;
pub mod model;
pub mod notify;
pub mod render;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Document, DocumentId};
pub use model::element::Element;
pub use notify::channel::Channel;
pub use notify::subscriber::{ConsoleSubscriber, Subscribe, SubscriberId};
pub use render::{derive_preview, render_document, render_payload};
pub use service::editor::DocumentEditor;
pub use storage::{
    FileStorage, MemoryStorage, SavedDocument, SqliteStorage, Storage, StorageError,
    StorageResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

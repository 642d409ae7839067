//! Document editing facade.
//!
//! # Responsibility
//! - Provide append entry points for each element variant.
//! - Render and forward the full payload to the configured storage on
//!   save.
//!
//! # Invariants
//! - The editor never bypasses the storage trait contract.
//! - The facade stays storage-agnostic; backends are chosen by the caller.

use crate::model::document::Document;
use crate::model::element::Element;
use crate::render::{derive_preview, render_payload};
use crate::storage::{Storage, StorageResult};
use log::{error, info};

/// Facade owning one document and one storage strategy.
pub struct DocumentEditor<S: Storage> {
    document: Document,
    storage: S,
}

impl<S: Storage> DocumentEditor<S> {
    /// Creates an editor over a fresh empty document.
    pub fn new(storage: S) -> Self {
        Self::with_document(Document::new(), storage)
    }

    /// Creates an editor over an existing document.
    pub fn with_document(document: Document, storage: S) -> Self {
        Self { document, storage }
    }

    /// Appends a text element.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.document.add_element(Element::text(text));
    }

    /// Appends an image element referencing `path`.
    pub fn add_image(&mut self, path: impl Into<String>) {
        self.document.add_element(Element::image(path));
    }

    /// Appends a line break.
    pub fn add_new_line(&mut self) {
        self.document.add_element(Element::NewLine);
    }

    /// Appends a tab space.
    pub fn add_tab_space(&mut self) {
        self.document.add_element(Element::TabSpace);
    }

    /// Returns the owned document for rendering and inspection.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the configured storage strategy.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Renders every element and forwards the joined payload to storage.
    ///
    /// # Contract
    /// - The payload equals the newline-join of rendered elements in
    ///   document order; an empty document saves the empty string.
    /// - A backend failure is returned unchanged; the document is not
    ///   modified by a save, successful or not.
    pub fn save_document(&mut self) -> StorageResult<()> {
        let payload = render_payload(&self.document);

        match self.storage.save(&payload) {
            Ok(()) => {
                info!(
                    "event=document_save module=service status=ok doc={} elements={} preview={}",
                    self.document.id(),
                    self.document.len(),
                    derive_preview(&payload)
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=document_save module=service status=error doc={} elements={} error={err}",
                    self.document.id(),
                    self.document.len()
                );
                Err(err)
            }
        }
    }
}

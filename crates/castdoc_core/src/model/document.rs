//! Document model.
//!
//! # Responsibility
//! - Own the ordered element sequence behind an append-only API.
//! - Carry a stable identity for logging and persistence.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another document.
//! - Element order equals append order; there is no reorder or removal.

use crate::model::element::Element;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a document.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DocumentId = Uuid;

/// Ordered sequence of renderable elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable global ID used for save logging and persistence rows.
    uuid: DocumentId,
    elements: Vec<Element>,
}

impl Document {
    /// Creates an empty document with a generated stable ID.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates an empty document with a caller-provided stable ID.
    ///
    /// Used by callers where identity already exists externally.
    pub fn with_id(uuid: DocumentId) -> Self {
        Self {
            uuid,
            elements: Vec::new(),
        }
    }

    /// Returns this document's stable ID.
    pub fn id(&self) -> DocumentId {
        self.uuid
    }

    /// Appends an element to the end of the sequence, taking ownership.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Returns the full ordered element sequence as a read view.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

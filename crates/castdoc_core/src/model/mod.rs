//! Domain model for the document subsystem.
//!
//! # Responsibility
//! - Define the canonical renderable element variants.
//! - Define the document as an ordered, append-only element sequence.
//!
//! # Invariants
//! - Elements are immutable once constructed.
//! - Document element order is insertion order and never changes.

pub mod document;
pub mod element;

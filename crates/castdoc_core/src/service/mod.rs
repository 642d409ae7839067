//! Use-case services over the document model.
//!
//! # Responsibility
//! - Orchestrate model and storage calls into caller-facing APIs.
//! - Keep drivers decoupled from storage details.

pub mod editor;

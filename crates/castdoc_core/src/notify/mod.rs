//! Broadcast channel and subscriber contracts.
//!
//! # Responsibility
//! - Define the observer seam (`Subscribe`) and the observable `Channel`.
//! - Keep subscriber registration identity-based and non-owning.
//!
//! # Invariants
//! - Broadcast order equals registration order at the time of the
//!   triggering upload.
//! - The channel never extends a subscriber's lifetime; owners drop
//!   subscribers independently.

pub mod channel;
pub mod subscriber;

//! Promptpack Types - core data model for the promptpack workspace
//!
//! Documents are plain owned data and immutable once loaded, so a populated
//! store can be shared across threads by reference without locking.

pub mod bundle;
pub mod document;

pub use bundle::Bundle;
pub use document::{Document, DocumentKind, DocumentMatch};

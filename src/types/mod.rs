//! Core domain types
//!
//! Naming conventions follow the rest of the audit stack:
//! - `_id` suffix: primary key identifiers (newtypes, non-interchangeable)
//! - document types are immutable once loaded for a computation run

mod document;
mod reward;

pub use document::*;
pub use reward::*;

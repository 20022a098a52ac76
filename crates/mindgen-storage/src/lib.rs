//! mindgen-storage
//!
//! The report sink: a local JSON-file history of composed reports. Thin
//! wrapper around the filesystem.

pub mod error;
pub mod history;

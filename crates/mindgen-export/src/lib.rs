//! mindgen-export
//!
//! Report rendering: the canonical plain-text treatment plan document and a
//! DOCX export for paginated output.

pub mod docx;
pub mod error;
pub mod layout;
pub mod report;
pub mod styles;

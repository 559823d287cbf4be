//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window, document and storage access, file collection

pub mod dom;

//! UI components built with Leptos.
//!
//! - [`FileUpload`] - Widget root; owns the upload state and starts batches
//! - [`dropzone`] - Drag-and-drop area with a hidden file picker
//! - [`file_list`] - Rows for every tracked upload
//! - [`status`] - Per-status counts and capacity notices
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod dropzone;
pub mod file_list;
pub mod icons;
pub mod status;
pub mod upload;

pub use upload::FileUpload;

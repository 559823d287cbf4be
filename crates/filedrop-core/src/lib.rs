//! Platform-independent logic for the filedrop upload widget.
//!
//! Everything here runs without a browser:
//! - [`UploadConfig`] - Embedding options with serde defaults
//! - [`validate()`] - Client-side size, type and capacity checks
//! - [`UploadList`], [`UploadStore`] - Whole-list state container
//! - [`ProgressSimulator`], [`ProgressDriver`] - Cosmetic progress ticks
//! - [`UploadSession`] - Sequential validate/upload/report orchestration
//! - [`render::project`] - Pure projection of records into row views

pub mod config;
pub mod error;
pub mod format;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod models;
pub mod progress;
pub mod render;
pub mod session;
pub mod state;
pub mod validate;

pub use config::{DisplayText, UploadConfig};
pub use error::{ConfigError, UploadError, ValidationError};
pub use models::{
    FileMeta, MimeCategory, UploadId, UploadRecord, UploadResponse, UploadStatus,
    interpret_response,
};
pub use progress::{ProgressDriver, ProgressSimulator};
pub use session::{
    BatchSummary, Credential, Transport, UploadFailure, UploadListener, UploadOutcome,
    UploadRequest, UploadSession,
};
pub use state::{StatusCounts, UploadList, UploadStore};
pub use validate::validate;

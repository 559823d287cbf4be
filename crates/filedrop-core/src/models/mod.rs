//! Data models for tracked uploads.
//!
//! - [`UploadRecord`], [`UploadStatus`], [`UploadId`] - Per-file upload state
//! - [`FileMeta`] - Browser-reported facts about a candidate file
//! - [`MimeCategory`] - Coarse type used for icons
//! - [`UploadResponse`], [`interpret_response`] - Server reply handling

mod mime;
mod record;
mod response;

pub use mime::MimeCategory;
pub use record::{FileMeta, UploadId, UploadRecord, UploadStatus};
pub use response::{UploadResponse, interpret_response};

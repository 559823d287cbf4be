//! Error types for the upload pipeline.
//!
//! - [`ValidationError`] - File rejected before any network call
//! - [`UploadError`] - Anything that ends a file's upload as failed
//! - [`ConfigError`] - Embedding options that cannot be used
//!
//! The `Display` output of each variant is the message shown to the user.

use thiserror::Error;

use crate::format::format_megabytes;

/// Client-side rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// File is larger than the configured limit.
    #[error("File size must be less than {} MB", format_megabytes(*max_bytes))]
    FileTooLarge { size: u64, max_bytes: u64 },
    /// Browser-reported MIME type is not in the allowed set.
    #[error("File type \"{}\" is not allowed", display_mime(mime_type))]
    UnsupportedType { mime_type: String },
    /// The list already tracks the maximum number of files.
    #[error("Maximum of {max} files reached")]
    TooManyFiles { max: usize },
}

fn display_mime(mime_type: &str) -> &str {
    if mime_type.is_empty() {
        "unknown"
    } else {
        mime_type
    }
}

/// Terminal failure for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Server answered with a non-2xx status.
    #[error("{}", http_message(*status, message.as_deref()))]
    Http { status: u16, message: Option<String> },
    /// Server answered 2xx but reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// Fetch promise rejected (offline, CORS, DNS, ...).
    #[error("Network error: {0}")]
    Network(String),
    /// Request could not be built.
    #[error("Failed to create request: {0}")]
    Request(String),
    /// 2xx body was not the expected JSON.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),
}

fn http_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.trim().is_empty() => msg.to_string(),
        _ => format!("Upload failed (HTTP {})", status),
    }
}

/// Invalid embedding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(String),
    #[error("maxFiles must be at least 1")]
    ZeroMaxFiles,
    #[error("maxFileSize must be greater than 0")]
    ZeroMaxFileSize,
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
    #[error("progress ceiling must be below 100 (got {0})")]
    ProgressCeiling(u8),
}

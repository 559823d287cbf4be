//! Widget configuration.
//!
//! The embedding page supplies an [`UploadConfig`] once, usually as JSON. Every
//! field is optional; missing fields take the defaults below. The value is
//! never mutated after the widget mounts.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::format::format_megabytes;
use crate::progress::ProgressSimulator;

/// Default maximum file size (10 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default maximum number of tracked files.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Default upload endpoint.
pub const DEFAULT_ENDPOINT: &str = "/api/upload";

/// Default value of the multipart `category` field.
pub const DEFAULT_CATEGORY: &str = "general";

/// MIME types accepted when the embedder does not override them.
pub const DEFAULT_ALLOWED_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "text/plain",
    "text/csv",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
];

/// Options supplied by the embedding page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadConfig {
    /// Maximum size of a single file in bytes.
    pub max_file_size: u64,
    /// Accepted MIME types (exact, case-insensitive match).
    pub allowed_types: Vec<String>,
    /// Maximum number of records the widget tracks at once.
    pub max_files: usize,
    /// URL the multipart POST is sent to.
    pub endpoint: String,
    /// Value of the multipart `category` field.
    pub category: String,
    /// Show the cosmetic progress animation while a request is in flight.
    pub simulate_progress: bool,
    pub progress: ProgressSimulator,
    pub text: DisplayText,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_types: DEFAULT_ALLOWED_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            max_files: DEFAULT_MAX_FILES,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            simulate_progress: true,
            progress: ProgressSimulator::default(),
            text: DisplayText::default(),
        }
    }
}

impl UploadConfig {
    /// Parse and check a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Reject settings under which no upload could ever succeed.
    pub fn validated(self) -> Result<Self, ConfigError> {
        if self.max_files == 0 {
            return Err(ConfigError::ZeroMaxFiles);
        }
        if self.max_file_size == 0 {
            return Err(ConfigError::ZeroMaxFileSize);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.progress.ceiling >= 100 {
            return Err(ConfigError::ProgressCeiling(self.progress.ceiling));
        }
        Ok(self)
    }

    /// Whether a MIME type is in the allowed set.
    pub fn allows(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim();
        !mime_type.is_empty()
            && self
                .allowed_types
                .iter()
                .any(|allowed| allowed.trim().eq_ignore_ascii_case(mime_type))
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept_attribute(&self) -> String {
        self.allowed_types.join(",")
    }

    /// Size limit for display, e.g. "10 MB".
    pub fn max_size_label(&self) -> String {
        format!("{} MB", format_megabytes(self.max_file_size))
    }
}

/// User-facing strings of the widget.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayText {
    pub title: String,
    pub subtitle: String,
    pub browse_label: String,
    pub drop_active_label: String,
    pub empty_label: String,
}

impl Default for DisplayText {
    fn default() -> Self {
        Self {
            title: "Drag and drop files here".to_string(),
            subtitle: "or click to browse".to_string(),
            browse_label: "Browse files".to_string(),
            drop_active_label: "Drop files to upload".to_string(),
            empty_label: "No files uploaded yet".to_string(),
        }
    }
}

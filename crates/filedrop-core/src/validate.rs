//! Client-side file validation.
//!
//! Trusts the browser-reported size and MIME type; no content sniffing.

use crate::config::UploadConfig;
use crate::error::ValidationError;
use crate::models::FileMeta;

/// Check a candidate file against the configured limits.
///
/// Capacity is checked first so that a full list never grows, then size,
/// then MIME type. The first failing rule wins.
pub fn validate(
    config: &UploadConfig,
    meta: &FileMeta,
    tracked_count: usize,
) -> Result<(), ValidationError> {
    if tracked_count >= config.max_files {
        return Err(ValidationError::TooManyFiles {
            max: config.max_files,
        });
    }

    if meta.size > config.max_file_size {
        return Err(ValidationError::FileTooLarge {
            size: meta.size,
            max_bytes: config.max_file_size,
        });
    }

    if !config.allows(&meta.mime_type) {
        return Err(ValidationError::UnsupportedType {
            mime_type: meta.mime_type.clone(),
        });
    }

    Ok(())
}

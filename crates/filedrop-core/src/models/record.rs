//! Upload record types.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a tracked upload.
///
/// Allocated from a process-wide counter, so ids never repeat within a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct UploadId(u64);

impl UploadId {
    /// Allocate the next id.
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "upload-{}", self.0)
    }
}

/// Facts the browser reports about a dropped or selected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as reported by the browser (may be empty)
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }
}

/// Upload lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Uploading,
    Completed,
    Error,
}

impl UploadStatus {
    pub fn is_uploading(self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }
}

/// A single tracked file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    pub id: UploadId,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    /// Creation time in milliseconds since the Unix epoch
    pub uploaded_at: u64,
    pub status: UploadStatus,
    /// Displayed progress, 0..=100
    pub progress: u8,
    /// Failure reason shown inline (error status only)
    pub error: Option<String>,
}

impl UploadRecord {
    fn from_meta(meta: &FileMeta, now_ms: u64, status: UploadStatus) -> Self {
        Self {
            id: UploadId::next(),
            name: meta.name.clone(),
            size: meta.size,
            mime_type: meta.mime_type.clone(),
            uploaded_at: now_ms,
            status,
            progress: 0,
            error: None,
        }
    }

    /// Record for a file whose request is about to be sent.
    pub fn uploading(meta: &FileMeta, now_ms: u64) -> Self {
        Self::from_meta(meta, now_ms, UploadStatus::Uploading)
    }

    /// Record for a file rejected before any request.
    pub fn rejected(meta: &FileMeta, now_ms: u64, message: impl Into<String>) -> Self {
        let mut record = Self::from_meta(meta, now_ms, UploadStatus::Error);
        record.error = Some(message.into());
        record
    }

    pub fn complete(&mut self) {
        self.status = UploadStatus::Completed;
        self.progress = 100;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = UploadStatus::Error;
        self.progress = 0;
        self.error = Some(message.into());
    }
}

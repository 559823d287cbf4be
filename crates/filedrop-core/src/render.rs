//! Projection of the upload list into display rows.
//!
//! [`project`] is a pure function of the list and the current time; the UI
//! renders its output and holds no state of its own.

use crate::format::{format_size, format_timestamp};
use crate::models::{MimeCategory, UploadId, UploadRecord, UploadStatus};
use crate::state::UploadList;

/// Visual tone of a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BadgeTone {
    Info,
    Success,
    Danger,
}

/// Status badge shown next to each file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl From<UploadStatus> for StatusBadge {
    fn from(status: UploadStatus) -> Self {
        match status {
            UploadStatus::Uploading => Self {
                label: "Uploading",
                tone: BadgeTone::Info,
            },
            UploadStatus::Completed => Self {
                label: "Completed",
                tone: BadgeTone::Success,
            },
            UploadStatus::Error => Self {
                label: "Failed",
                tone: BadgeTone::Danger,
            },
        }
    }
}

/// Everything one row of the file list displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordView {
    pub id: UploadId,
    pub name: String,
    pub category: MimeCategory,
    pub size: String,
    pub time: String,
    pub badge: StatusBadge,
    /// Bar value; only present while uploading
    pub progress: Option<u8>,
    pub error: Option<String>,
    /// In-flight uploads cannot be cancelled, so they cannot be removed.
    pub removable: bool,
}

impl RecordView {
    pub fn from_record(record: &UploadRecord, now_ms: u64) -> Self {
        let uploading = record.status.is_uploading();
        Self {
            id: record.id,
            name: record.name.clone(),
            category: MimeCategory::from_mime(&record.mime_type),
            size: format_size(record.size),
            time: format_timestamp(record.uploaded_at, now_ms),
            badge: record.status.into(),
            progress: uploading.then_some(record.progress),
            error: record.error.clone(),
            removable: !uploading,
        }
    }
}

/// Rows for every record, in list order.
pub fn project(list: &UploadList, now_ms: u64) -> Vec<RecordView> {
    list.iter()
        .map(|record| RecordView::from_record(record, now_ms))
        .collect()
}

use filedrop_core::{UploadFailure, UploadListener, UploadRecord, UploadResponse};
use leptos::prelude::*;

use crate::config::LOG_PREFIX;

/// Routes upload events to the embedder's callbacks and the console.
///
/// Capacity rejections have no record to show their message, so they are
/// surfaced through `notice` instead.
#[derive(Clone, Copy)]
pub struct WidgetListener {
    pub on_complete: Option<Callback<UploadRecord>>,
    pub on_error: Option<Callback<UploadFailure>>,
    pub notice: RwSignal<Option<String>>,
}

impl UploadListener for WidgetListener {
    fn on_complete(&self, record: &UploadRecord, response: &UploadResponse) {
        let file_id = response.file_id.as_deref().unwrap_or("-");
        web_sys::console::log_1(
            &format!(
                "{} uploaded {} ({} bytes, file_id={})",
                LOG_PREFIX, record.name, record.size, file_id
            )
            .into(),
        );

        if let Some(callback) = self.on_complete {
            callback.run(record.clone());
        }
    }

    fn on_error(&self, failure: &UploadFailure) {
        let message = failure.message();
        web_sys::console::warn_1(
            &format!("{} {} failed: {}", LOG_PREFIX, failure.file_name, message).into(),
        );

        if failure.record_id.is_none() {
            self.notice.try_set(Some(message));
        }

        if let Some(callback) = self.on_error {
            callback.run(failure.clone());
        }
    }
}

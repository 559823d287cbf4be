//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use filedrop_core::FileMeta;
use web_sys::{Document, File, FileList, Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document object.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Browser-reported name, size and MIME type of a file.
pub fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.size() as u64, file.type_())
}

/// Collect a `FileList` (from a drop or an `<input type=file>`) in order.
pub fn collect_files(list: FileList) -> Vec<(File, FileMeta)> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            let meta = file_meta(&file);
            (file, meta)
        })
        .collect()
}

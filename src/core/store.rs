use filedrop_core::{UploadList, UploadStore};
use leptos::prelude::*;

/// Upload list held in a Leptos signal.
///
/// Each [`apply`](UploadStore::apply) is one signal write of a whole new
/// list, so every view observes complete states only. Writes after the
/// widget has been unmounted are ignored.
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<UploadList>);

impl UploadStore for SignalStore {
    fn snapshot(&self) -> UploadList {
        self.0.try_get_untracked().unwrap_or_default()
    }

    fn apply(&self, f: impl FnOnce(&UploadList) -> UploadList) {
        self.0.try_update(|list| {
            let next = f(list);
            *list = next;
        });
    }
}

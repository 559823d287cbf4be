//! Widget root component and its shared state.

use std::rc::Rc;

use filedrop_core::{
    FileMeta, UploadConfig, UploadFailure, UploadId, UploadList, UploadRecord, UploadSession,
    UploadStore,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::components::dropzone::DropZone;
use crate::components::file_list::FileList;
use crate::components::status::Status;
use crate::config::{AUTH_TOKEN_KEY, CLOCK_REFRESH_MS, LOG_PREFIX};
use crate::core::{FetchTransport, IntervalProgress, SignalStore, WidgetListener, credentials};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/upload/upload.module.css");

// ============================================================================
// UploadContext
// ============================================================================

/// Widget-wide reactive state.
///
/// Provided by [`FileUpload`] and read by its children with
/// `use_context::<UploadContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena-backed Leptos handles.
#[derive(Clone, Copy)]
pub struct UploadContext {
    /// Embedding options (immutable for the widget's lifetime).
    pub config: StoredValue<UploadConfig>,
    /// Tracked uploads. Only ever replaced as a whole.
    pub records: RwSignal<UploadList>,
    /// Last capacity rejection, shown until the next drop.
    pub notice: RwSignal<Option<String>>,
    /// A drag is hovering over the drop zone.
    pub dragging: RwSignal<bool>,
    /// Wall clock for relative upload times, refreshed by [`FileUpload`].
    pub now: RwSignal<u64>,
    listener: WidgetListener,
}

impl UploadContext {
    pub fn new(
        config: UploadConfig,
        on_complete: Option<Callback<UploadRecord>>,
        on_error: Option<Callback<UploadFailure>>,
    ) -> Self {
        let notice = RwSignal::new(None);
        Self {
            config: StoredValue::new(config),
            records: RwSignal::new(UploadList::new()),
            notice,
            dragging: RwSignal::new(false),
            now: RwSignal::new(dom::now_ms()),
            listener: WidgetListener {
                on_complete,
                on_error,
                notice,
            },
        }
    }

    fn store(&self) -> SignalStore {
        SignalStore(self.records)
    }

    /// Validate and upload `files` one after another.
    ///
    /// The bearer token is read once here and injected into the session.
    pub fn upload(&self, files: Vec<(File, FileMeta)>) {
        if files.is_empty() {
            return;
        }
        self.notice.set(None);

        let ctx = *self;
        spawn_local(async move {
            let config = Rc::new(ctx.config.get_value());
            let credential = credentials::load_token(AUTH_TOKEN_KEY);
            let store = ctx.store();
            let progress = config
                .simulate_progress
                .then(|| IntervalProgress::new(store, config.progress));

            let session = UploadSession::new(Rc::clone(&config), FetchTransport, store, dom::now_ms)
                .with_listener(ctx.listener)
                .with_progress(progress);

            web_sys::console::log_1(
                &format!("{} uploading {} file(s) to {}", LOG_PREFIX, files.len(), config.endpoint)
                    .into(),
            );
            let summary = session.process_batch(files, credential.as_ref()).await;
            web_sys::console::log_1(
                &format!(
                    "{} batch done: {} completed, {} failed, {} rejected",
                    LOG_PREFIX, summary.completed, summary.failed, summary.rejected
                )
                .into(),
            );
        });
    }

    /// Drop a record from the list.
    pub fn remove(&self, id: UploadId) {
        self.store().apply(|list| list.without(id));
    }
}

/// File upload widget.
///
/// Reports outward only through `on_complete` and `on_error`.
#[component]
pub fn FileUpload(
    config: UploadConfig,
    #[prop(optional)] on_complete: Option<Callback<UploadRecord>>,
    #[prop(optional)] on_error: Option<Callback<UploadFailure>>,
) -> impl IntoView {
    let ctx = UploadContext::new(config, on_complete, on_error);
    provide_context(ctx);

    // Keeps "N min ago" moving after the list itself stops changing
    let clock = StoredValue::new_local(Some(Interval::new(CLOCK_REFRESH_MS, move || {
        ctx.now.try_set(dom::now_ms());
    })));
    on_cleanup(move || {
        clock.try_update_value(|ticker| ticker.take());
    });

    view! {
        <section class=css::widget aria-label="File upload">
            <DropZone />
            <Status />
            <FileList />
        </section>
    }
}

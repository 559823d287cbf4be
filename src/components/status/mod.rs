//! Status summary component.
//!
//! Displays per-status counts and the last capacity notice.

use leptos::prelude::*;

use crate::components::upload::UploadContext;

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Summary line above the file list.
///
/// Capacity rejections create no record, so their message is only visible
/// here until the next batch starts.
#[component]
pub fn Status() -> impl IntoView {
    let ctx = use_context::<UploadContext>().expect("UploadContext must be provided");

    let counts = Memo::new(move |_| ctx.records.with(|list| list.counts()));
    let notice = ctx.notice;

    view! {
        <div class=css::bar aria-live="polite">
            <Show when=move || counts.with(|c| c.uploading > 0)>
                <span class=css::countInfo>
                    {move || format!("Uploading: {}", counts.get().uploading)}
                </span>
            </Show>
            <span class=css::countSuccess>
                {move || format!("Completed: {}", counts.get().completed)}
            </span>
            <Show when=move || counts.with(|c| c.failed > 0)>
                <span class=css::countDanger>
                    {move || format!("Failed: {}", counts.get().failed)}
                </span>
            </Show>
            {move || {
                notice
                    .get()
                    .map(|message| view! { <p class=css::notice role="alert">{message}</p> })
            }}
        </div>
    }
}

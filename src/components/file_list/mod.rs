//! Rows for every tracked upload.

use filedrop_core::UploadList;
use filedrop_core::render::{BadgeTone, RecordView, project};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::upload::UploadContext;

stylance::import_crate_style!(css, "src/components/file_list/file_list.module.css");

fn badge_class(tone: BadgeTone) -> String {
    let tone = match tone {
        BadgeTone::Info => css::badgeInfo,
        BadgeTone::Success => css::badgeSuccess,
        BadgeTone::Danger => css::badgeDanger,
    };
    format!("{} {}", css::badge, tone)
}

/// Display rows, recomputed when the list changes or the clock ticks.
fn row_views(records: RwSignal<UploadList>, now: RwSignal<u64>) -> Memo<Vec<RecordView>> {
    Memo::new(move |_| {
        let now = now.get();
        records.with(|list| project(list, now))
    })
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<UploadContext>().expect("UploadContext must be provided");
    let empty_label = ctx.config.with_value(|c| c.text.empty_label.clone());

    let rows = row_views(ctx.records, ctx.now);

    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=move || view! { <p class=css::empty>{empty_label.clone()}</p> }
        >
            <ul class=css::list aria-label="Uploaded files">
                // Keyed on the whole view so any change re-renders the row
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |row| view! { <FileRow row=row /> }
                />
            </ul>
        </Show>
    }
}

#[component]
fn FileRow(row: RecordView) -> impl IntoView {
    let ctx = use_context::<UploadContext>().expect("UploadContext must be provided");

    let id = row.id;
    let icon = ic::for_category(row.category);

    let progress = row.progress.map(|value| {
        view! {
            <div
                class=css::track
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=value.to_string()
            >
                <div class=css::bar style=format!("width: {}%", value)></div>
            </div>
        }
    });

    let error = row
        .error
        .map(|message| view! { <span class=css::error>{message}</span> });

    let remove = row.removable.then(|| {
        let label = format!("Remove {}", row.name);
        view! {
            <button
                class=css::remove
                title=label.clone()
                aria-label=label
                on:click=move |_| ctx.remove(id)
            >
                <Icon icon=ic::CLOSE />
            </button>
        }
    });

    view! {
        <li class=css::row>
            <span class=css::icon><Icon icon=icon /></span>
            <div class=css::body>
                <div class=css::header>
                    <span class=css::name title=row.name.clone()>{row.name.clone()}</span>
                    <span class=badge_class(row.badge.tone)>{row.badge.label}</span>
                </div>
                <span class=css::meta>{format!("{} · {}", row.size, row.time)}</span>
                {progress}
                {error}
            </div>
            {remove}
        </li>
    }
}

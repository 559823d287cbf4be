//! Drag-and-drop area with a hidden file picker.
//!
//! Dropped files and picked files take the same path into
//! [`UploadContext::upload`].

use leptos::ev::{DragEvent, Event, KeyboardEvent, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::upload::UploadContext;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/dropzone/dropzone.module.css");

#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = use_context::<UploadContext>().expect("UploadContext must be provided");
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // dragenter/dragleave also fire when crossing child elements
    let depth = StoredValue::new(0u32);

    let (accept, limits, text) = ctx.config.with_value(|config| {
        (
            config.accept_attribute(),
            format!(
                "Up to {} files, {} each",
                config.max_files,
                config.max_size_label()
            ),
            config.text.clone(),
        )
    });

    let open_picker = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let handle_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        depth.update_value(|d| *d += 1);
        ctx.dragging.set(true);
    };

    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let handle_drag_leave = move |_: DragEvent| {
        depth.update_value(|d| *d = d.saturating_sub(1));
        if depth.get_value() == 0 {
            ctx.dragging.set(false);
        }
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        depth.set_value(0);
        ctx.dragging.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            ctx.upload(dom::collect_files(files));
        }
    };

    let handle_click = move |_: MouseEvent| open_picker();

    let handle_keydown = move |ev: KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            open_picker();
        }
    };

    let handle_change = move |_: Event| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        if let Some(files) = input.files() {
            ctx.upload(dom::collect_files(files));
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let title = {
        let text = text.clone();
        move || {
            if ctx.dragging.get() {
                text.drop_active_label.clone()
            } else {
                text.title.clone()
            }
        }
    };

    view! {
        <div
            class=move || {
                if ctx.dragging.get() {
                    format!("{} {}", css::zone, css::active)
                } else {
                    css::zone.to_string()
                }
            }
            role="button"
            tabindex="0"
            aria-label=text.browse_label.clone()
            on:dragenter=handle_drag_enter
            on:dragover=handle_drag_over
            on:dragleave=handle_drag_leave
            on:drop=handle_drop
            on:click=handle_click
            on:keydown=handle_keydown
        >
            <span class=css::icon><Icon icon=ic::UPLOAD /></span>
            <p class=css::title>{title}</p>
            <p class=css::subtitle>{text.subtitle.clone()}</p>
            <span class=css::browse>{text.browse_label.clone()}</span>
            <p class=css::limits>{limits}</p>
        </div>
        <input
            node_ref=input_ref
            type="file"
            class=css::hidden
            multiple=true
            accept=accept
            on:change=handle_change
        />
    }
}

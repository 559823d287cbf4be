//! Root application module.
//!
//! Mounts the upload widget and forwards its outcomes to the host page as
//! DOM events.

use filedrop_core::{UploadConfig, UploadFailure, UploadRecord};
use leptos::prelude::*;

use crate::components::FileUpload;
use crate::core::embed;

/// Root application component with error boundary.
///
/// This component:
/// - Wraps the widget in an ErrorBoundary for graceful error handling
/// - Re-dispatches completion and error callbacks as `filedrop:*` events
#[component]
pub fn App(config: UploadConfig) -> impl IntoView {
    let on_complete = Callback::new(|record: UploadRecord| embed::dispatch_complete(&record));
    let on_error = Callback::new(|failure: UploadFailure| embed::dispatch_error(&failure));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    padding: 1.5rem;
                    border: 1px solid #fecaca;
                    border-radius: 0.5rem;
                    background: #fef2f2;
                    color: #7f1d1d;
                    font-family: system-ui, sans-serif;
                ">
                    <h2 style="margin: 0 0 0.5rem 0; font-size: 1.125rem;">
                        "File upload is unavailable"
                    </h2>
                    <p style="margin: 0 0 1rem 0;">
                        "An unexpected error occurred. Please try reloading the page."
                    </p>
                    <ul style="margin: 0 0 1rem 0; padding-left: 1.5rem; font-size: 0.875rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #b91c1c;
                            color: white;
                            border: none;
                            padding: 0.5rem 1.25rem;
                            border-radius: 0.375rem;
                            cursor: pointer;
                        "
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <FileUpload config=config on_complete=on_complete on_error=on_error />
        </ErrorBoundary>
    }
}

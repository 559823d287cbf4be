//! Browser-side implementations of the upload seams.
//!
//! This module provides:
//! - [`FetchTransport`] multipart POST through the Fetch API
//! - [`credentials`] bearer token lookup in localStorage
//! - [`WidgetListener`] callbacks, console logging and capacity notices
//! - [`IntervalProgress`] timer-driven progress animation
//! - [`SignalStore`] upload list held in a Leptos signal
//! - [`embed`] configuration loading and DOM events for the host page

pub mod credentials;
pub mod embed;
mod listener;
mod progress;
mod store;
mod transport;

pub use listener::WidgetListener;
pub use progress::IntervalProgress;
pub use store::SignalStore;
pub use transport::FetchTransport;

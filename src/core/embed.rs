//! Host page integration.
//!
//! The page configures the widget through a JSON `data-config` attribute on
//! the mount element and hears back through two DOM events dispatched on
//! the same element.

use filedrop_core::{ConfigError, UploadConfig, UploadFailure, UploadRecord};
use serde::Serialize;
use web_sys::{CustomEvent, CustomEventInit, Element};

use crate::config::{APP_ROOT_ID, CONFIG_ATTRIBUTE, LOG_PREFIX, events};
use crate::utils::dom;

/// Parse the raw attribute value. A missing or blank attribute means defaults.
pub fn parse_config(raw: Option<&str>) -> Result<UploadConfig, ConfigError> {
    match raw.map(str::trim).filter(|json| !json.is_empty()) {
        None => Ok(UploadConfig::default()),
        Some(json) => UploadConfig::from_json(json),
    }
}

/// Read the configuration from the mount element, falling back to defaults
/// (with a console warning) when it cannot be used.
pub fn config_from_element(root: &Element) -> UploadConfig {
    match parse_config(root.get_attribute(CONFIG_ATTRIBUTE).as_deref()) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("{} ignoring {}: {}", LOG_PREFIX, CONFIG_ATTRIBUTE, e).into(),
            );
            UploadConfig::default()
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FailureDetail<'a> {
    file_name: &'a str,
    record_id: Option<u64>,
    message: String,
}

impl<'a> From<&'a UploadFailure> for FailureDetail<'a> {
    fn from(failure: &'a UploadFailure) -> Self {
        Self {
            file_name: &failure.file_name,
            record_id: failure.record_id.map(|id| id.get()),
            message: failure.message(),
        }
    }
}

/// Announce a completed upload to the host page.
pub fn dispatch_complete(record: &UploadRecord) {
    dispatch(events::COMPLETE, record);
}

/// Announce a rejected or failed upload to the host page.
pub fn dispatch_error(failure: &UploadFailure) {
    dispatch(events::ERROR, &FailureDetail::from(failure));
}

fn dispatch<T: Serialize>(name: &str, detail: &T) {
    let Some(root) = dom::document().and_then(|d| d.get_element_by_id(APP_ROOT_ID)) else {
        return;
    };

    let detail = match serde_json::to_string(detail)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
    {
        Some(value) => value,
        None => {
            web_sys::console::error_1(
                &format!("{} could not encode {} detail", LOG_PREFIX, name).into(),
            );
            return;
        }
    };

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_detail(&detail);

    if let Ok(event) = CustomEvent::new_with_event_init_dict(name, &init) {
        let _ = root.dispatch_event(&event);
    }
}

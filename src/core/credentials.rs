//! Bearer token lookup.
//!
//! The token is read by the caller once per batch and handed to the upload
//! session; the transport never touches storage itself.

use filedrop_core::Credential;

use crate::utils::dom;

/// Read the bearer token stored under `key` in localStorage.
///
/// Returns `None` when storage is unavailable, the key is missing, or the
/// stored value is blank.
pub fn load_token(key: &str) -> Option<Credential> {
    let storage = dom::local_storage()?;
    let token = storage.get_item(key).ok()??;
    Credential::bearer(token)
}

//! Upload endpoint reply.

use serde::{Deserialize, Serialize};

use crate::error::UploadError;

const DEFAULT_REJECTION: &str = "Upload failed";

/// JSON body returned by the upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
}

/// Error replies only need a `message`; `success` is often absent.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Turn an HTTP status and raw body into the outcome of one upload.
///
/// - 2xx + `success: true` → `Ok`
/// - 2xx + `success: false` → [`UploadError::Rejected`]
/// - non-2xx → [`UploadError::Http`], using `message` when the body carries one
/// - 2xx with an unparsable body → [`UploadError::InvalidResponse`]
pub fn interpret_response(status: u16, body: &str) -> Result<UploadResponse, UploadError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        return Err(UploadError::Http { status, message });
    }

    let response = serde_json::from_str::<UploadResponse>(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;
    if response.success {
        Ok(response)
    } else if response.message.trim().is_empty() {
        Err(UploadError::Rejected(DEFAULT_REJECTION.to_string()))
    } else {
        Err(UploadError::Rejected(response.message))
    }
}

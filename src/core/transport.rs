//! Multipart upload over the Fetch API.

use filedrop_core::{Transport, UploadError, UploadRequest, UploadResponse, interpret_response};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, RequestMode, Response};

use crate::utils::dom;

/// Multipart field carrying the file bytes.
const FILE_FIELD: &str = "file";

/// Multipart field carrying the upload category.
const CATEGORY_FIELD: &str = "category";

/// Sends each file as one `POST` with a `FormData` body.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type File = File;

    async fn send(&self, request: UploadRequest<'_, File>) -> Result<UploadResponse, UploadError> {
        let window =
            dom::window().ok_or_else(|| UploadError::Request("browser window not available".into()))?;

        let form = build_form(&request)?;

        // No explicit Content-Type: the browser adds the multipart boundary.
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        if let Some(credential) = request.credential {
            let headers = Headers::new().map_err(|e| UploadError::Request(js_message(&e)))?;
            headers
                .set("Authorization", &credential.header_value())
                .map_err(|e| UploadError::Request(js_message(&e)))?;
            opts.set_headers(&headers);
        }

        let req = Request::new_with_str_and_init(request.endpoint, &opts)
            .map_err(|e| UploadError::Request(js_message(&e)))?;

        let result = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(|e| UploadError::Network(js_message(&e)))?;
        let resp: Response = result
            .dyn_into()
            .map_err(|_| UploadError::InvalidResponse("fetch did not return a Response".into()))?;

        let text = resp
            .text()
            .map_err(|e| UploadError::InvalidResponse(js_message(&e)))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| UploadError::Network(js_message(&e)))?
            .as_string()
            .unwrap_or_default();

        interpret_response(resp.status(), &body)
    }
}

/// Build the multipart body: `file` (blob with file name) and `category`.
fn build_form(request: &UploadRequest<'_, File>) -> Result<FormData, UploadError> {
    let form = FormData::new().map_err(|e| UploadError::Request(js_message(&e)))?;
    form.append_with_blob_and_filename(FILE_FIELD, request.file, request.file_name)
        .map_err(|e| UploadError::Request(js_message(&e)))?;
    form.append_with_str(CATEGORY_FIELD, request.category)
        .map_err(|e| UploadError::Request(js_message(&e)))?;
    Ok(form)
}

/// Best-effort text of a thrown JS value.
fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

//! Browser file download for spreadsheet report payloads.
//!
//! The kardex endpoints return base64 file content; once decoded, the
//! bytes are wrapped in a Blob and offered through a transient anchor
//! click. Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// MIME type of the XLSX reports the backend produces.
pub const EXCEL_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Offer `bytes` to the user as a file download named `nombre`.
pub fn save_file(nombre: &str, bytes: &[u8]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes).into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(EXCEL_MIME);
        let Ok(blob) =
            web_sys::Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options)
        else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        if let Ok(element) = document.create_element("a") {
            if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(nombre);
                anchor.click();
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (nombre, bytes);
    }
}

//! Client-side file download of fetched spreadsheet bytes.

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Hand the bytes to the browser as a named spreadsheet download.
/// Failures are logged to the console; there is nothing to surface.
#[cfg(target_arch = "wasm32")]
pub fn save_spreadsheet(filename: &str, bytes: &[u8]) {
    if let Err(err) = trigger_download(filename, bytes) {
        web_sys::console::error_2(&"Download failed".into(), &err);
    }
}

#[cfg(target_arch = "wasm32")]
fn trigger_download(filename: &str, bytes: &[u8]) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(XLSX_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
    }
    anchor.click();
    anchor.remove();

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_spreadsheet(filename: &str, _bytes: &[u8]) {
    tracing::debug!("download of {filename} skipped outside the browser");
}

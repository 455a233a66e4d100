use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Materialize `bytes` as a browser file download named `file_name`.
/// Stages the content in a blob object URL, clicks a synthetic anchor and
/// revokes the URL again once the download was handed to the browser.
pub fn save_blob(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), String> {
    save_blob_inner(bytes, mime, file_name).map_err(|e| format!("{e:?}"))
}

fn save_blob_inner(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), JsValue> {
    let array = js_sys::Uint8Array::new_with_length(bytes.len() as u32);
    array.copy_from(bytes);

    let parts = js_sys::Array::new();
    parts.push(&array.into());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor: web_sys::HtmlAnchorElement =
        document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    web_sys::Url::revoke_object_url(&url)?;
    Ok(())
}

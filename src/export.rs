// PNG export: canvas -> blob -> temporary anchor click.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Blob, HtmlAnchorElement, HtmlCanvasElement, Url};

use crate::error::{FrameError, FrameResult};
use crate::util::cwarn;

pub const PNG_MIME: &str = "image/png";
pub const PNG_QUALITY: f64 = 1.0;

/// Serializes `canvas` and hands the file to the browser. Completes
/// asynchronously; a failure inside the blob callback is only logged.
pub fn download_png(canvas: &HtmlCanvasElement, file_name: &str) -> FrameResult<()> {
    let file_name = file_name.to_string();
    let cb = Closure::once(move |blob: JsValue| {
        if let Err(err) = save_blob(blob, &file_name) {
            cwarn(&format!("download failed: {err}"));
        }
    });
    let func: &js_sys::Function = cb.as_ref().unchecked_ref();
    canvas.to_blob_with_type_and_encoder_options(func, PNG_MIME, &JsValue::from_f64(PNG_QUALITY))?;
    cb.forget();
    Ok(())
}

fn save_blob(blob: JsValue, file_name: &str) -> FrameResult<()> {
    if blob.is_null() || blob.is_undefined() {
        return Err(FrameError::dom("canvas produced no blob"));
    }
    let blob: Blob = blob
        .dyn_into()
        .map_err(|_| FrameError::dom("toBlob result is not a Blob"))?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FrameError::dom("no document"))?;
    let url = Url::create_object_url_with_blob(&blob)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|_| FrameError::dom("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)?;
    Ok(())
}

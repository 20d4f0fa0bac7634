// Callback-based image and file loading.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FileReader, HtmlImageElement};

use crate::error::{FrameError, FrameResult};
use crate::geometry::Size;

pub fn natural_size(img: &HtmlImageElement) -> Size {
    Size::new(img.natural_width() as f64, img.natural_height() as f64)
}

/// Starts decoding `src`; exactly one of the callbacks fires later.
pub fn load_image(
    src: &str,
    on_load: impl FnOnce(HtmlImageElement) + 'static,
    on_error: impl FnOnce(FrameError) + 'static,
) -> FrameResult<()> {
    let img = HtmlImageElement::new()?;
    let img_onload = img.clone();
    let src_owned = src.to_string();
    let onload = Closure::once(move || on_load(img_onload));
    let onerror = Closure::once(move || {
        on_error(FrameError::decode(format!("could not decode {src_owned}")))
    });
    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(src);
    onload.forget();
    onerror.forget();
    Ok(())
}

/// Reads `file` into a `data:` URL.
pub fn read_as_data_url(
    file: &File,
    on_done: impl FnOnce(FrameResult<String>) + 'static,
) -> FrameResult<()> {
    let reader = FileReader::new()?;
    let reader_done = reader.clone();
    // onload and onerror share one FnOnce.
    let on_done = Rc::new(RefCell::new(Some(on_done)));
    let on_done_err = on_done.clone();
    let onload = Closure::once(move || {
        let result = reader_done
            .result()
            .map_err(FrameError::from)
            .and_then(|v| {
                v.as_string()
                    .ok_or_else(|| FrameError::decode("file reader returned no text"))
            });
        let cb = on_done.borrow_mut().take();
        if let Some(cb) = cb {
            cb(result);
        }
    });
    let file_name = file.name();
    let onerror = Closure::once(move || {
        let cb = on_done_err.borrow_mut().take();
        if let Some(cb) = cb {
            cb(Err(FrameError::decode(format!("could not read {file_name}"))));
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;
    onload.forget();
    onerror.forget();
    Ok(())
}

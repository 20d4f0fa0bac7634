use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod assets;
mod components;
mod config;
mod error;
mod export;
mod geometry;
mod model;
mod render;
mod state;
mod util;

use components::frame_box::{FrameBox, FrameBoxProps};
use config::FrameConfig;
use util::{clog, cwarn};

/// Containers that get a compositor widget each.
const CONTAINER_SELECTOR: &str = ".frame-box";

fn mount_all() -> error::FrameResult<usize> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| error::FrameError::dom("no document"))?;
    let containers = document.query_selector_all(CONTAINER_SELECTOR)?;
    let mut mounted = 0;
    for i in 0..containers.length() {
        let Some(container) = containers
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let dataset = container.dataset();
        match FrameConfig::from_dataset(dataset.get("frame"), dataset.get("options")) {
            Ok(config) => {
                yew::Renderer::<FrameBox>::with_root_and_props(
                    container.into(),
                    FrameBoxProps { config },
                )
                .render();
                mounted += 1;
            }
            Err(err) => cwarn(&format!("skipping frame box #{i}: {err}")),
        }
    }
    Ok(mounted)
}

fn main() {
    match mount_all() {
        Ok(n) => clog(&format!("mounted {n} frame box(es)")),
        Err(err) => cwarn(&format!("frame compositor failed to start: {err}")),
    }
}

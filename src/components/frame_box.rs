use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Event, File, HtmlCanvasElement, HtmlImageElement, MouseEvent, TouchEvent, WheelEvent,
};
use yew::prelude::*;

use super::{download_button::DownloadButton, upload_control::UploadControl};
use crate::assets::{load_image, natural_size, read_as_data_url};
use crate::config::FrameConfig;
use crate::error::FrameError;
use crate::export::download_png;
use crate::geometry::Point;
use crate::model::{FrameSession, PointerInput};
use crate::render::{CanvasSurface, compose};
use crate::util::{clog, cwarn};

type DrawFn = Rc<dyn Fn()>;
type DrawRef = Rc<RefCell<Option<DrawFn>>>;
type Listener = (&'static str, Closure<dyn FnMut(Event)>);

#[derive(Default)]
struct Images {
    user: Option<HtmlImageElement>,
    frame: Option<HtmlImageElement>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct FrameBoxProps {
    pub config: FrameConfig,
}

fn redraw(draw_ref: &DrawRef) {
    if let Some(f) = &*draw_ref.borrow() {
        f();
    }
}

/// Feeds one input to the session and applies its response to the event.
fn dispatch(
    session: &Rc<RefCell<FrameSession>>,
    draw_ref: &DrawRef,
    input: PointerInput,
    e: &Event,
) {
    let response = session.borrow_mut().handle(&input);
    if response.prevent_default {
        e.prevent_default();
    }
    if response.redraw {
        redraw(draw_ref);
    }
}

/// Touch positions relative to the canvas, in CSS pixels.
fn touch_points(canvas: &HtmlCanvasElement, e: &TouchEvent) -> Vec<Point> {
    let rect = canvas.get_bounding_client_rect();
    let touches = e.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| Point::new(t.client_x() as f64 - rect.left(), t.client_y() as f64 - rect.top()))
        .collect()
}

fn listen(
    canvas: &HtmlCanvasElement,
    listeners: &mut Vec<Listener>,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    match canvas.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => listeners.push((event, cb)),
        Err(err) => cwarn(&format!("listen {event}: {}", FrameError::from(err))),
    }
}

#[function_component(FrameBox)]
pub fn frame_box(props: &FrameBoxProps) -> Html {
    let canvas_ref = use_node_ref();
    let session = {
        let config = props.config.clone();
        use_mut_ref(move || FrameSession::new(config.device_scale()))
    };
    let images = use_mut_ref(Images::default);
    let draw_ref: DrawRef = use_mut_ref(|| None::<DrawFn>);
    let download_enabled = use_state(|| false);

    // Mount: draw closure, frame image, canvas listeners
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        let images = images.clone();
        let draw_ref = draw_ref.clone();
        let frame_src = props.config.frame_src.clone();
        use_effect_with((), move |_| {
            let mut listeners: Vec<Listener> = Vec::new();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            if let Some(canvas) = canvas.clone() {
                let draw: DrawFn = {
                    let canvas = canvas.clone();
                    let session = session.clone();
                    let images = images.clone();
                    Rc::new(move || {
                        let result = CanvasSurface::new(canvas.clone()).and_then(|mut surface| {
                            let session = session.borrow();
                            let images = images.borrow();
                            let (user, frame) = (images.user.as_ref(), images.frame.as_ref());
                            compose(&mut surface, &session, user, frame)
                        });
                        if let Err(err) = result {
                            cwarn(&format!("render failed: {err}"));
                        }
                    })
                };
                *draw_ref.borrow_mut() = Some(draw);

                let loaded = {
                    let session = session.clone();
                    let images = images.clone();
                    let draw_ref = draw_ref.clone();
                    let src = frame_src.clone();
                    move |img: HtmlImageElement| {
                        images.borrow_mut().frame = Some(img);
                        session.borrow_mut().mark_frame_loaded();
                        clog(&format!("frame loaded: {src}"));
                        redraw(&draw_ref);
                    }
                };
                let failed = {
                    let src = frame_src.clone();
                    move |err: FrameError| cwarn(&format!("frame {src}: {err}"))
                };
                if let Err(err) = load_image(&frame_src, loaded, failed) {
                    cwarn(&format!("frame {frame_src}: {err}"));
                }

                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, "mousedown", move |e: Event| {
                        let Some(me) = e.dyn_ref::<MouseEvent>() else { return };
                        let p = Point::new(me.offset_x() as f64, me.offset_y() as f64);
                        dispatch(&session, &draw_ref, PointerInput::Press(p), &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, "mousemove", move |e: Event| {
                        let Some(me) = e.dyn_ref::<MouseEvent>() else { return };
                        let p = Point::new(me.offset_x() as f64, me.offset_y() as f64);
                        dispatch(&session, &draw_ref, PointerInput::Move(p), &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, "mouseup", move |e: Event| {
                        dispatch(&session, &draw_ref, PointerInput::Release, &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, "mouseleave", move |e: Event| {
                        dispatch(&session, &draw_ref, PointerInput::Leave, &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, "wheel", move |e: Event| {
                        let Some(we) = e.dyn_ref::<WheelEvent>() else { return };
                        let input = PointerInput::Wheel { delta_y: we.delta_y() };
                        dispatch(&session, &draw_ref, input, &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    let canvas_tc = canvas.clone();
                    listen(&canvas, &mut listeners, "touchstart", move |e: Event| {
                        let Some(te) = e.dyn_ref::<TouchEvent>() else { return };
                        let input = PointerInput::TouchStart(touch_points(&canvas_tc, te));
                        dispatch(&session, &draw_ref, input, &e);
                    });
                }
                {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    let canvas_tc = canvas.clone();
                    listen(&canvas, &mut listeners, "touchmove", move |e: Event| {
                        let Some(te) = e.dyn_ref::<TouchEvent>() else { return };
                        let input = PointerInput::TouchMove(touch_points(&canvas_tc, te));
                        dispatch(&session, &draw_ref, input, &e);
                    });
                }
                for event in ["touchend", "touchcancel"] {
                    let session = session.clone();
                    let draw_ref = draw_ref.clone();
                    listen(&canvas, &mut listeners, event, move |e: Event| {
                        dispatch(&session, &draw_ref, PointerInput::TouchEnd, &e);
                    });
                }
                clog(&format!("frame box mounted: {frame_src}"));
            } else {
                cwarn("frame box: canvas not attached");
            }

            // Cleanup
            move || {
                if let Some(canvas) = canvas {
                    for (event, cb) in &listeners {
                        let _ = canvas.remove_event_listener_with_callback(
                            event,
                            cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                *draw_ref.borrow_mut() = None;
                drop(listeners);
            }
        });
    }

    let on_file: Callback<File> = {
        let session = session.clone();
        let images = images.clone();
        let draw_ref = draw_ref.clone();
        let download_enabled = download_enabled.clone();
        Callback::from(move |file: File| {
            let ticket = session.borrow_mut().begin_upload();
            let session = session.clone();
            let images = images.clone();
            let draw_ref = draw_ref.clone();
            let download_enabled = download_enabled.clone();
            let name = file.name();
            let read = read_as_data_url(&file, move |result| {
                let url = match result {
                    Ok(url) => url,
                    Err(err) => {
                        cwarn(&format!("upload {name}: {err}"));
                        return;
                    }
                };
                if !session.borrow().readiness.is_current(ticket) {
                    clog(&format!("upload {name} superseded before decode"));
                    return;
                }
                let decoded = {
                    let name = name.clone();
                    move |img: HtmlImageElement| {
                        let size = natural_size(&img);
                        let accepted = session.borrow_mut().complete_upload(ticket, size);
                        if !accepted {
                            clog(&format!("upload {name} discarded"));
                            return;
                        }
                        images.borrow_mut().user = Some(img);
                        download_enabled.set(session.borrow().download_enabled);
                        clog(&format!("upload {name} accepted"));
                        redraw(&draw_ref);
                    }
                };
                let failed = {
                    let name = name.clone();
                    move |err: FrameError| cwarn(&format!("upload {name}: {err}"))
                };
                if let Err(err) = load_image(&url, decoded, failed) {
                    cwarn(&format!("upload {name}: {err}"));
                }
            });
            if let Err(err) = read {
                cwarn(&format!("upload: {err}"));
            }
        })
    };

    let on_download: Callback<()> = {
        let canvas_ref = canvas_ref.clone();
        let draw_ref = draw_ref.clone();
        let file_name = props.config.options.file_name.clone();
        Callback::from(move |()| {
            redraw(&draw_ref);
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            if let Err(err) = download_png(&canvas, &file_name) {
                cwarn(&format!("download failed: {err}"));
            }
        })
    };

    let side = props.config.surface_side().to_string();
    let display = props.config.options.display_size;
    let label = AttrValue::from(props.config.options.download_label.clone());
    html! {<>
        <canvas ref={canvas_ref} width={side.clone()} height={side}
            style={format!("width:{display}px; height:{display}px; touch-action:none;")}></canvas>
        <UploadControl {on_file} />
        <DownloadButton enabled={*download_enabled} {label} {on_download} />
    </>}
}

//! Per-widget compositor state.
//!
//! One [`FrameSession`] exists per `.frame-box` container. DOM handlers turn
//! browser events into [`PointerInput`] values and feed them to
//! [`FrameSession::handle`], which mutates the transform and gesture state and
//! reports whether a redraw is needed.

use crate::geometry::{Point, Size};
use crate::state::{Gesture, Readiness, Transform, UploadTicket};

/// Input in logical (CSS) pixels relative to the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    Press(Point),
    Move(Point),
    Release,
    Leave,
    Wheel { delta_y: f64 },
    TouchStart(Vec<Point>),
    TouchMove(Vec<Point>),
    TouchEnd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputResponse {
    pub redraw: bool,
    /// Suppress the browser's default action (page scroll).
    pub prevent_default: bool,
}

impl InputResponse {
    const NONE: Self = Self {
        redraw: false,
        prevent_default: false,
    };

    fn redraw_if(redraw: bool) -> Self {
        Self {
            redraw,
            prevent_default: false,
        }
    }

    fn captured(redraw: bool) -> Self {
        Self {
            redraw,
            prevent_default: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrameSession {
    pub transform: Transform,
    pub gesture: Gesture,
    pub readiness: Readiness,
    pub download_enabled: bool,
    device_scale: f64,
}

impl FrameSession {
    pub fn new(device_scale: f64) -> Self {
        Self {
            transform: Transform::default(),
            gesture: Gesture::default(),
            readiness: Readiness::default(),
            download_enabled: false,
            device_scale,
        }
    }

    /// Converts a logical canvas position into surface pixels.
    fn to_surface(&self, p: Point) -> Point {
        p.scaled(self.device_scale)
    }

    pub fn handle(&mut self, input: &PointerInput) -> InputResponse {
        match input {
            PointerInput::Press(p) => {
                let p = self.to_surface(*p);
                self.gesture.begin_drag(p, &self.transform);
                InputResponse::NONE
            }
            PointerInput::Move(p) => {
                let p = self.to_surface(*p);
                InputResponse::redraw_if(self.gesture.drag_to(p, &mut self.transform))
            }
            PointerInput::Release | PointerInput::Leave => {
                if self.gesture.is_dragging() {
                    self.gesture.end();
                }
                InputResponse::NONE
            }
            PointerInput::Wheel { delta_y } => {
                self.transform.zoom_by_wheel(*delta_y);
                InputResponse::captured(true)
            }
            PointerInput::TouchStart(points) => {
                match points.as_slice() {
                    [p] => {
                        let p = self.to_surface(*p);
                        self.gesture.begin_drag(p, &self.transform);
                    }
                    [a, b] => self.gesture.begin_pinch(*a, *b, &self.transform),
                    _ => {}
                }
                InputResponse::NONE
            }
            PointerInput::TouchMove(points) => {
                let redraw = match points.as_slice() {
                    [p] => {
                        let p = self.to_surface(*p);
                        self.gesture.drag_to(p, &mut self.transform)
                    }
                    [a, b] => self.gesture.pinch_to(*a, *b, &mut self.transform),
                    _ => false,
                };
                InputResponse::captured(redraw)
            }
            PointerInput::TouchEnd => {
                self.gesture.end();
                InputResponse::NONE
            }
        }
    }

    pub fn mark_frame_loaded(&mut self) {
        self.readiness.mark_frame_loaded();
    }

    pub fn begin_upload(&mut self) -> UploadTicket {
        self.readiness.begin_upload()
    }

    /// Returns true when the decoded image was accepted; the download
    /// control is enabled from then on.
    pub fn complete_upload(&mut self, ticket: UploadTicket, size: Size) -> bool {
        let accepted = self.readiness.complete_upload(ticket, size);
        if accepted {
            self.download_enabled = true;
        }
        accepted
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready()
    }
}

// Compositing: user image under the frame overlay.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::error::{FrameError, FrameResult};
use crate::geometry::{Rect, Size, place_image};
use crate::model::FrameSession;

/// A pixel surface the compositor can paint onto.
pub trait Surface {
    type Image;

    fn size(&self) -> Size;
    fn clear(&mut self);
    fn draw_image(&mut self, image: &Self::Image, dest: Rect) -> FrameResult<()>;
}

/// Paints the composite. Returns `Ok(false)` without touching the surface
/// while either image is still loading.
pub fn compose<S: Surface>(
    surface: &mut S,
    session: &FrameSession,
    user: Option<&S::Image>,
    frame: Option<&S::Image>,
) -> FrameResult<bool> {
    let (Some(user), Some(frame)) = (user, frame) else {
        return Ok(false);
    };
    if !session.is_ready() {
        return Ok(false);
    }
    let Some(user_size) = session.readiness.user_image() else {
        return Ok(false);
    };
    let size = surface.size();
    surface.clear();
    surface.draw_image(user, place_image(size, user_size, &session.transform))?;
    surface.draw_image(frame, Rect::covering(size))?;
    Ok(true)
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> FrameResult<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| FrameError::dom("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FrameError::dom("context is not a CanvasRenderingContext2d"))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;

    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn draw_image(&mut self, image: &HtmlImageElement, dest: Rect) -> FrameResult<()> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            dest.x,
            dest.y,
            dest.width,
            dest.height,
        )?;
        Ok(())
    }
}

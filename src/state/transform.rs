// User image transform: translation in surface pixels plus uniform zoom.

pub const MIN_SCALE: f64 = 0.2;
pub const MAX_SCALE: f64 = 5.0;
/// Scale change per wheel delta unit.
pub const WHEEL_ZOOM_STEP: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Sets the zoom, clamped to `[MIN_SCALE, MAX_SCALE]`. NaN leaves the scale untouched.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_nan() {
            return;
        }
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Positive `delta_y` (scrolling down) zooms out.
    pub fn zoom_by_wheel(&mut self, delta_y: f64) {
        self.set_scale(self.scale - delta_y * WHEEL_ZOOM_STEP);
    }

    pub fn translate_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

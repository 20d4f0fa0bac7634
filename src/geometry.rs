// Surface geometry: points, sizes and the placement of the user image.

use crate::state::Transform;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both sides are finite and strictly positive.
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn covering(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }
}

/// Uniform factor that makes `image` fit entirely inside `surface`.
pub fn fit_ratio(surface: Size, image: Size) -> f64 {
    (surface.width / image.width).min(surface.height / image.height)
}

/// Where the user image lands: fitted, zoomed, centered, then translated.
pub fn place_image(surface: Size, image: Size, transform: &Transform) -> Rect {
    let ratio = fit_ratio(surface, image);
    let width = image.width * ratio * transform.scale;
    let height = image.height * ratio * transform.scale;
    Rect {
        x: transform.x + (surface.width - width) / 2.0,
        y: transform.y + (surface.height - height) / 2.0,
        width,
        height,
    }
}

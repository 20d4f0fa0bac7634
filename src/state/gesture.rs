// Drag and pinch gesture sessions. Only one can be live at a time.

use crate::geometry::Point;

use super::Transform;

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// `anchor` is the pointer-to-image offset captured at press time.
    Drag { anchor: Point },
    Pinch {
        initial_distance: f64,
        initial_scale: f64,
    },
}

impl Gesture {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Drag { .. })
    }

    /// Starts a drag at `pointer` (already in surface pixels).
    pub fn begin_drag(&mut self, pointer: Point, transform: &Transform) {
        *self = Gesture::Drag {
            anchor: Point::new(pointer.x - transform.x, pointer.y - transform.y),
        };
    }

    /// Moves the image under the pointer. Returns false when no drag is live.
    pub fn drag_to(&self, pointer: Point, transform: &mut Transform) -> bool {
        match *self {
            Gesture::Drag { anchor } => {
                transform.translate_to(pointer.x - anchor.x, pointer.y - anchor.y);
                true
            }
            _ => false,
        }
    }

    pub fn begin_pinch(&mut self, a: Point, b: Point, transform: &Transform) {
        *self = Gesture::Pinch {
            initial_distance: a.distance_to(b),
            initial_scale: transform.scale,
        };
    }

    /// Rescales proportionally to the finger spread. A degenerate starting
    /// distance (zero or non-finite) makes the pinch inert.
    pub fn pinch_to(&self, a: Point, b: Point, transform: &mut Transform) -> bool {
        let Gesture::Pinch {
            initial_distance,
            initial_scale,
        } = *self
        else {
            return false;
        };
        if !(initial_distance.is_finite() && initial_distance > 0.0) {
            return false;
        }
        transform.set_scale(initial_scale * (a.distance_to(b) / initial_distance));
        true
    }

    pub fn end(&mut self) {
        *self = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::transform::{MAX_SCALE, MIN_SCALE};

    #[test]
    fn drag_keeps_the_grab_point_under_the_pointer() {
        let mut transform = Transform {
            x: 100.0,
            y: 50.0,
            scale: 1.0,
        };
        let mut gesture = Gesture::default();
        gesture.begin_drag(Point::new(300.0, 300.0), &transform);
        assert!(gesture.is_dragging());
        assert!(gesture.drag_to(Point::new(330.0, 270.0), &mut transform));
        assert_eq!((transform.x, transform.y), (130.0, 20.0));
    }

    #[test]
    fn idle_gesture_does_not_move_the_image() {
        let mut transform = Transform::default();
        let gesture = Gesture::Idle;
        assert!(!gesture.drag_to(Point::new(10.0, 10.0), &mut transform));
        assert_eq!(transform, Transform::default());
    }

    #[test]
    fn pinch_doubling_distance_doubles_scale() {
        let mut transform = Transform::default();
        let mut gesture = Gesture::default();
        gesture.begin_pinch(Point::new(0.0, 0.0), Point::new(50.0, 0.0), &transform);
        assert!(gesture.pinch_to(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &mut transform));
        assert_eq!(transform.scale, 2.0);
    }

    #[test]
    fn pinch_is_relative_to_scale_at_start() {
        let mut transform = Transform {
            scale: 0.8,
            ..Transform::default()
        };
        let mut gesture = Gesture::default();
        gesture.begin_pinch(Point::new(0.0, 0.0), Point::new(0.0, 80.0), &transform);
        transform.set_scale(3.0);
        gesture.pinch_to(Point::new(0.0, 0.0), Point::new(0.0, 40.0), &mut transform);
        assert!((transform.scale - 0.4).abs() < 1e-9);
    }

    #[test]
    fn pinch_clamps_to_bounds() {
        let mut transform = Transform::default();
        let mut gesture = Gesture::default();
        gesture.begin_pinch(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &transform);
        gesture.pinch_to(Point::new(0.0, 0.0), Point::new(1000.0, 0.0), &mut transform);
        assert_eq!(transform.scale, MAX_SCALE);
        gesture.pinch_to(Point::new(0.0, 0.0), Point::new(0.0, 0.0), &mut transform);
        assert_eq!(transform.scale, MIN_SCALE);
    }

    #[test]
    fn zero_start_distance_is_inert() {
        let mut transform = Transform::default();
        let mut gesture = Gesture::default();
        gesture.begin_pinch(Point::new(5.0, 5.0), Point::new(5.0, 5.0), &transform);
        assert!(matches!(gesture, Gesture::Pinch { .. }));
        assert!(!gesture.pinch_to(Point::new(0.0, 0.0), Point::new(100.0, 0.0), &mut transform));
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn pinch_scale_stays_in_range_for_non_finite_spreads() {
        let origin = Point::new(0.0, 0.0);
        let mut transform = Transform::default();
        let mut gesture = Gesture::default();
        gesture.begin_pinch(origin, Point::new(50.0, 0.0), &transform);

        assert!(gesture.pinch_to(origin, Point::new(f64::INFINITY, 0.0), &mut transform));
        assert_eq!(transform.scale, MAX_SCALE);

        gesture.pinch_to(origin, Point::new(25.0, 0.0), &mut transform);
        assert_eq!(transform.scale, 0.5);
        gesture.pinch_to(origin, Point::new(f64::NAN, 0.0), &mut transform);
        assert_eq!(transform.scale, 0.5);

        let mut transform = Transform::default();
        gesture.begin_pinch(origin, Point::new(f64::INFINITY, 0.0), &transform);
        assert!(matches!(gesture, Gesture::Pinch { .. }));
        assert!(!gesture.pinch_to(origin, Point::new(100.0, 0.0), &mut transform));
        assert_eq!(transform.scale, 1.0);
        assert!((MIN_SCALE..=MAX_SCALE).contains(&transform.scale));
    }

    #[test]
    fn starting_a_pinch_cancels_a_drag() {
        let transform = Transform::default();
        let mut gesture = Gesture::default();
        gesture.begin_drag(Point::new(1.0, 1.0), &transform);
        gesture.begin_pinch(Point::new(0.0, 0.0), Point::new(3.0, 4.0), &transform);
        assert!(!gesture.is_dragging());
        assert!(matches!(gesture, Gesture::Pinch { .. }));
        gesture.end();
        assert_eq!(gesture, Gesture::Idle);
    }
}

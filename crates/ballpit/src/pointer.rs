//! Pointer (cursor) repulsion

use nalgebra::{Point2, Vector2};

use crate::body::Body;

/// Pointer position meaning "no pointer over the canvas"
pub const OFF_CANVAS: [f64; 2] = [-100.0, -100.0];

/// Last known pointer position; last write wins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub position: Point2<f64>,
}

impl Default for Pointer {
    fn default() -> Self {
        Self {
            position: Point2::new(OFF_CANVAS[0], OFF_CANVAS[1]),
        }
    }
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }

    /// Moves the pointer; non-finite coordinates take it off the canvas
    pub fn set(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.position = Point2::new(x, y);
        } else {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sends a body straight away from the pointer when the pointer is inside it
///
/// The velocity is replaced outright, not blended. A pointer sitting exactly
/// on the body's center pushes it along +x. Returns true if the body was hit.
///
/// # Examples
///
/// ```
/// use ballpit::body::{Body, BodyId};
/// use ballpit::pointer::{Pointer, repel};
///
/// let mut body = Body::new(BodyId(0), 10.0, [100.0, 100.0], [0.0, 1.0], "#fff");
/// let pointer = Pointer::new(95.0, 100.0);
///
/// assert!(repel(&mut body, &pointer, 4.0));
/// assert!((body.velocity.x - 4.0).abs() < 1e-12);
/// assert!(body.velocity.y.abs() < 1e-12);
/// ```
pub fn repel(body: &mut Body, pointer: &Pointer, escape_speed: f64) -> bool {
    let distance = body.distance_to_point(&pointer.position);
    if distance.is_nan() || distance >= body.radius {
        return false;
    }

    let away = body.position - pointer.position;
    let angle = away.y.atan2(away.x);
    body.velocity = Vector2::new(escape_speed * angle.cos(), escape_speed * angle.sin());
    true
}

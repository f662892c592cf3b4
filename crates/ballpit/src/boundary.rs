//! Canvas walls

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::{ConfigResult, ensure_positive};

/// Canvas extent; the playfield spans `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// # Examples
    ///
    /// ```
    /// use ballpit::boundary::Bounds;
    ///
    /// let bounds = Bounds::new(800.0, 600.0).unwrap();
    /// assert_eq!(bounds.center().x, 400.0);
    /// assert!(Bounds::new(0.0, 600.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64) -> ConfigResult<Self> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        Ok(Self { width, height })
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Flips each velocity component whose axis has the body's edge past a wall
///
/// The position is left alone, so a body can sit embedded in a wall for a
/// frame. Returns true if any component flipped.
pub fn reflect(body: &mut Body, bounds: &Bounds) -> bool {
    let mut flipped = false;

    if body.position.x + body.radius > bounds.width || body.position.x - body.radius < 0.0 {
        body.velocity.x = -body.velocity.x;
        flipped = true;
    }

    if body.position.y + body.radius > bounds.height || body.position.y - body.radius < 0.0 {
        body.velocity.y = -body.velocity.y;
        flipped = true;
    }

    flipped
}

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Fill color token handed straight to the renderer (any CSS color string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(transparent)]
pub struct Color(pub String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A circular particle
///
/// The radius doubles as the body's mass in collision math.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub radius: f64,            // canvas px, always > 0
    pub position: Point2<f64>,  // canvas px
    pub velocity: Vector2<f64>, // px per tick
    pub color: Color,
}

impl Body {
    /// Creates a body from plain arrays
    ///
    /// # Examples
    ///
    /// ```
    /// use ballpit::body::{Body, BodyId};
    ///
    /// let body = Body::new(BodyId(0), 10.0, [50.0, 50.0], [1.0, -1.0], "#ffffff");
    /// assert_eq!(body.radius, 10.0);
    /// assert_eq!(body.mass(), 10.0);
    /// ```
    pub fn new(
        id: BodyId,
        radius: f64,
        position: [f64; 2],
        velocity: [f64; 2],
        color: impl Into<Color>,
    ) -> Self {
        Body {
            id,
            radius,
            position: Point2::new(position[0], position[1]),
            velocity: Vector2::new(velocity[0], velocity[1]),
            color: color.into(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.radius
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass()
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.magnitude_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }

    pub fn distance_to_point(&self, point: &Point2<f64>) -> f64 {
        (self.position - point).magnitude()
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            id: self.id.0,
            position: [self.position.x, self.position.y],
            radius: self.radius,
            color: self.color.clone(),
        }
    }
}

/// What the renderer needs to draw one filled circle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub position: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

/// Hands out world-unique body IDs
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next_id: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }
}

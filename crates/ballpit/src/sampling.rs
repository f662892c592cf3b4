//! Randomized body creation
//!
//! All draws go through a caller-owned [`ChaChaRng`], so a world seeded with
//! the same value spawns the same bodies.

use nalgebra::{Point2, Vector2};
use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId, Color};
use crate::config::{SimulationConfig, ValueRange};
use crate::error::{ConfigResult, ConfigurationError, ensure_non_negative};

/// Uniform sample from `[range.min, range.max]`
pub fn sample_uniform(rng: &mut ChaChaRng, range: ValueRange) -> f64 {
    let u: f64 = rng.random();
    range.min + u * (range.max - range.min)
}

/// +1 or -1 with equal probability
pub fn sample_sign(rng: &mut ChaChaRng) -> f64 {
    let roll: f64 = rng.random();
    if roll < 0.5 { 1.0 } else { -1.0 }
}

/// Uniform pick from a non-empty palette
pub fn sample_color<'a>(rng: &mut ChaChaRng, palette: &'a [Color]) -> &'a Color {
    &palette[rng.random_range(0..palette.len())]
}

/// Creates one body at `spawn`
///
/// One speed magnitude is drawn and each axis independently gets a random
/// sign, so every spawned velocity lies on a diagonal. This is intentional:
/// it is not a uniform random heading.
///
/// `palette` must not be empty.
pub fn create_body(
    rng: &mut ChaChaRng,
    id: BodyId,
    spawn: Point2<f64>,
    size_range: ValueRange,
    speed_range: ValueRange,
    palette: &[Color],
) -> Body {
    let radius = sample_uniform(rng, size_range);
    let color = sample_color(rng, palette).clone();
    let speed = sample_uniform(rng, speed_range);
    let velocity = Vector2::new(speed * sample_sign(rng), speed * sample_sign(rng));

    Body {
        id,
        radius,
        position: spawn,
        velocity,
        color,
    }
}

/// Validated size/speed ranges and palette for spawning bodies
///
/// # Examples
///
/// ```
/// use ballpit::body::BodyId;
/// use ballpit::config::SimulationConfig;
/// use ballpit::sampling::BodyFactory;
/// use nalgebra::Point2;
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let factory = BodyFactory::from_config(&SimulationConfig::default()).unwrap();
/// let mut rng = ChaChaRng::seed_from_u64(7);
///
/// let body = factory.create(&mut rng, BodyId(0), Point2::new(400.0, 300.0));
/// assert!(body.radius >= 10.0 && body.radius <= 30.0);
/// assert_eq!(body.velocity.x.abs(), body.velocity.y.abs());
/// ```
#[derive(Debug, Clone)]
pub struct BodyFactory {
    size_range: ValueRange,
    speed_range: ValueRange,
    palette: Vec<Color>,
}

impl BodyFactory {
    pub fn new(
        size_range: ValueRange,
        speed_range: ValueRange,
        palette: Vec<Color>,
    ) -> ConfigResult<Self> {
        size_range.validate("sizeRange")?;
        if size_range.min <= 0.0 {
            return Err(ConfigurationError::NonPositive {
                field: "sizeRange",
                value: size_range.min,
            });
        }
        speed_range.validate("speedRange")?;
        ensure_non_negative("speedRange", speed_range.min)?;
        if palette.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }

        Ok(Self {
            size_range,
            speed_range,
            palette,
        })
    }

    pub fn from_config(config: &SimulationConfig) -> ConfigResult<Self> {
        Self::new(config.size_range, config.speed_range, config.palette.clone())
    }

    pub fn create(&self, rng: &mut ChaChaRng, id: BodyId, spawn: Point2<f64>) -> Body {
        create_body(
            rng,
            id,
            spawn,
            self.size_range,
            self.speed_range,
            &self.palette,
        )
    }
}

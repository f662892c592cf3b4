//! Short-lived spark particles thrown out where two bodies touch
//!
//! Sparks are cosmetic: they never interact with bodies or walls. Each one
//! drifts along its heading and is dropped once its life (in seconds) runs
//! out.

use std::f64::consts::TAU;

use nalgebra::{Point2, Vector2};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::Body;
use crate::collisions::detection::normal_angle;
use crate::config::ValueRange;
use crate::error::{ConfigResult, ConfigurationError, ensure_non_negative, ensure_positive};
use crate::sampling::sample_uniform;

/// Spark burst settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct SparkConfig {
    /// Sparks per contact, spread evenly around the contact normal
    pub count: usize,
    /// Spark speed in px per tick
    pub speed_range: ValueRange,
    /// Drawn streak length in px
    pub length: f64,
    /// Seconds a spark lives
    pub lifetime: f64,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            count: 10,
            speed_range: ValueRange::new(1.0, 5.0),
            length: 5.0,
            lifetime: 0.5,
        }
    }
}

impl SparkConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.count == 0 {
            return Err(ConfigurationError::ZeroCount {
                field: "sparks.count",
            });
        }
        self.speed_range.validate("sparks.speedRange")?;
        ensure_non_negative("sparks.speedRange", self.speed_range.min)?;
        ensure_non_negative("sparks.length", self.length)?;
        ensure_positive("sparks.lifetime", self.lifetime)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spark {
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub angle: f64,
    pub length: f64,
    /// Remaining life in seconds
    pub life: f64,
}

impl Spark {
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    pub fn snapshot(&self) -> SparkSnapshot {
        let tail = self.position + Vector2::new(self.angle.cos(), self.angle.sin()) * self.length;
        SparkSnapshot {
            from: [self.position.x, self.position.y],
            to: [tail.x, tail.y],
            life: self.life,
        }
    }
}

/// A spark as a line segment for the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct SparkSnapshot {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub life: f64,
}

/// Burst of sparks at the midpoint of two touching bodies
///
/// Spark `i` heads along the contact normal rotated by `i / count` of a turn.
pub fn emit_sparks(rng: &mut ChaChaRng, a: &Body, b: &Body, config: &SparkConfig) -> Vec<Spark> {
    let origin = nalgebra::center(&a.position, &b.position);
    let base = normal_angle(a, b);
    let step = TAU / config.count as f64;

    (0..config.count)
        .map(|i| {
            let angle = base + step * i as f64;
            let speed = sample_uniform(rng, config.speed_range);
            Spark {
                position: origin,
                velocity: Vector2::new(angle.cos(), angle.sin()) * speed,
                angle,
                length: config.length,
                life: config.lifetime,
            }
        })
        .collect()
}

/// Moves every spark by `scale` velocity steps, burns `elapsed_seconds` of
/// life and drops the dead ones
pub fn age_sparks(sparks: &mut Vec<Spark>, scale: f64, elapsed_seconds: f64) {
    let burn = elapsed_seconds.max(0.0);
    sparks.iter_mut().for_each(|spark| {
        spark.position += spark.velocity * scale;
        spark.life -= burn;
    });
    sparks.retain(Spark::is_alive);
}

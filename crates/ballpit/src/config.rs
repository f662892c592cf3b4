//! Simulation configuration
//!
//! [`SimulationConfig`] is deserializable from a partial camelCase object so a
//! JavaScript caller only has to name the options it cares about:
//!
//! ```json
//! {
//!   "initialBodyCount": 10,
//!   "sizeRange": { "min": 20, "max": 60 },
//!   "collisionPolicy": "bonding",
//!   "timeStep": { "elapsed": { "ticksPerSecond": 60 } }
//! }
//! ```
//!
//! Anything left out falls back to [`SimulationConfig::default`], which
//! reproduces the plain elastic demo.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::Color;
use crate::error::{ConfigResult, ConfigurationError, ensure_finite, ensure_non_negative};
use crate::integrator::TimeStep;
use crate::sparks::SparkConfig;

/// Distance below which two non-overlapping bodies bond (bonding policy)
pub const DEFAULT_BOND_THRESHOLD: f64 = 50.0;

/// Speed a body leaves the pointer at, in px per tick
pub const DEFAULT_ESCAPE_SPEED: f64 = 4.0;

/// Color given to every body produced by a bond merge
pub const DEFAULT_MERGED_COLOR: &str = "#FF0000";

/// Inclusive `[min, max]` range sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks the range is finite and ordered
    pub fn validate(&self, field: &'static str) -> ConfigResult<()> {
        ensure_finite(field, self.min)?;
        ensure_finite(field, self.max)?;
        if self.min > self.max {
            return Err(ConfigurationError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// What happens when two bodies come close
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub enum CollisionPolicy {
    /// Overlapping bodies bounce off each other
    #[default]
    Elastic,
    /// Overlapping bodies bounce; near-but-separate bodies merge into one
    Bonding,
}

/// Full set of world options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Bodies spawned at the canvas center when the world is created
    pub initial_body_count: usize,
    /// Body radius range in px
    pub size_range: ValueRange,
    /// Per-axis speed magnitude range in px per tick
    pub speed_range: ValueRange,
    /// Bonding distance, only consulted under [`CollisionPolicy::Bonding`]
    pub bond_threshold: f64,
    pub pointer_escape_speed: f64,
    pub collision_policy: CollisionPolicy,
    /// Colors new bodies are drawn from
    pub palette: Vec<Color>,
    pub merged_color: Color,
    pub time_step: TimeStep,
    /// Nudge colliding bodies one step apart along the contact normal
    pub advance_on_contact: bool,
    /// Only bounce pairs that are moving toward each other
    pub require_approach: bool,
    /// Spark bursts on contact; `None` disables them
    pub sparks: Option<SparkConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_body_count: 6,
            size_range: ValueRange::new(10.0, 30.0),
            speed_range: ValueRange::new(0.5, 1.5),
            bond_threshold: DEFAULT_BOND_THRESHOLD,
            pointer_escape_speed: DEFAULT_ESCAPE_SPEED,
            collision_policy: CollisionPolicy::Elastic,
            palette: default_palette(),
            merged_color: Color::new(DEFAULT_MERGED_COLOR),
            time_step: TimeStep::PerTick,
            advance_on_contact: false,
            require_approach: false,
            sparks: None,
        }
    }
}

impl SimulationConfig {
    /// The bonding demo: ten larger bodies that merge when they drift close
    ///
    /// # Examples
    ///
    /// ```
    /// use ballpit::config::{CollisionPolicy, SimulationConfig};
    ///
    /// let config = SimulationConfig::bonding();
    /// assert_eq!(config.collision_policy, CollisionPolicy::Bonding);
    /// assert_eq!(config.initial_body_count, 10);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn bonding() -> Self {
        Self {
            initial_body_count: 10,
            size_range: ValueRange::new(20.0, 60.0),
            collision_policy: CollisionPolicy::Bonding,
            ..Default::default()
        }
    }

    /// The elastic demo with a spark burst on every contact
    pub fn with_sparks() -> Self {
        Self {
            sparks: Some(SparkConfig::default()),
            ..Default::default()
        }
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_body_count(mut self, count: usize) -> Self {
        self.initial_body_count = count;
        self
    }

    pub fn with_time_step(mut self, time_step: TimeStep) -> Self {
        self.time_step = time_step;
        self
    }

    /// Checks every option, failing on the first bad field
    ///
    /// # Examples
    ///
    /// ```
    /// use ballpit::config::{SimulationConfig, ValueRange};
    /// use ballpit::error::ConfigurationError;
    ///
    /// let config = SimulationConfig {
    ///     size_range: ValueRange::new(30.0, 10.0),
    ///     ..Default::default()
    /// };
    /// assert!(matches!(
    ///     config.validate(),
    ///     Err(ConfigurationError::InvalidRange { field: "sizeRange", .. })
    /// ));
    /// ```
    pub fn validate(&self) -> ConfigResult<()> {
        self.size_range.validate("sizeRange")?;
        if self.size_range.min <= 0.0 {
            return Err(ConfigurationError::NonPositive {
                field: "sizeRange",
                value: self.size_range.min,
            });
        }

        self.speed_range.validate("speedRange")?;
        ensure_non_negative("speedRange", self.speed_range.min)?;

        ensure_non_negative("bondThreshold", self.bond_threshold)?;
        ensure_non_negative("pointerEscapeSpeed", self.pointer_escape_speed)?;

        if self.palette.is_empty() {
            return Err(ConfigurationError::EmptyPalette);
        }

        self.time_step.validate()?;

        if let Some(sparks) = &self.sparks {
            sparks.validate()?;
        }

        Ok(())
    }
}

/// Site theme colors: background, alt background, foreground, alt foreground, primary
pub fn default_palette() -> Vec<Color> {
    ["#fcfcfc", "#f0f0f0", "#444444", "#555555", "#2978b5"]
        .into_iter()
        .map(Color::from)
        .collect()
}

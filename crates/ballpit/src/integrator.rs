//! Time integration for bouncing bodies
//!
//! Velocities are expressed in px per tick. Under [`TimeStep::PerTick`] every
//! tick advances positions by exactly one velocity; under
//! [`TimeStep::Elapsed`] the velocity is first scaled by how many nominal
//! ticks the elapsed wall-clock time represents. A world picks one policy at
//! construction and keeps it.

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::Body;
use crate::error::{ConfigResult, ensure_positive};

/// Nominal frame rate used when a caller ticks without a measured elapsed time
pub const DEFAULT_TICKS_PER_SECOND: f64 = 60.0;

/// How elapsed time maps onto position updates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TimeStep {
    /// One velocity step per tick, whatever the frame time
    #[default]
    PerTick,
    /// Velocity scaled by `elapsed_seconds * ticks_per_second`
    Elapsed { ticks_per_second: f64 },
}

impl TimeStep {
    /// Multiplier applied to velocities for a tick that took `elapsed_seconds`
    ///
    /// Negative, NaN or infinite elapsed times give 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ballpit::integrator::TimeStep;
    ///
    /// assert_eq!(TimeStep::PerTick.scale(0.5), 1.0);
    ///
    /// let elapsed = TimeStep::Elapsed { ticks_per_second: 60.0 };
    /// assert_eq!(elapsed.scale(0.5), 30.0);
    /// ```
    pub fn scale(&self, elapsed_seconds: f64) -> f64 {
        match self {
            TimeStep::PerTick => 1.0,
            TimeStep::Elapsed { .. } if !elapsed_seconds.is_finite() => 0.0,
            TimeStep::Elapsed { ticks_per_second } => elapsed_seconds.max(0.0) * ticks_per_second,
        }
    }

    /// Wall-clock length of one nominal tick
    pub fn nominal_seconds(&self) -> f64 {
        match self {
            TimeStep::PerTick => 1.0 / DEFAULT_TICKS_PER_SECOND,
            TimeStep::Elapsed { ticks_per_second } => 1.0 / ticks_per_second,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if let TimeStep::Elapsed { ticks_per_second } = self {
            ensure_positive("timeStep.ticksPerSecond", *ticks_per_second)?;
        }
        Ok(())
    }
}

/// A position integrator for bodies
pub trait Integrator: Send + Sync {
    /// Advance every body by `scale` velocity steps
    fn drift(&self, bodies: &mut [Body], scale: f64);
}

/// Explicit Euler: `position += velocity * scale`
///
/// # Examples
///
/// ```
/// use ballpit::body::{Body, BodyId};
/// use ballpit::integrator::{Euler, Integrator};
///
/// let mut bodies = vec![Body::new(BodyId(0), 5.0, [10.0, 10.0], [2.0, -1.0], "#fff")];
/// Euler.drift(&mut bodies, 1.0);
/// assert_eq!(bodies[0].position.x, 12.0);
/// assert_eq!(bodies[0].position.y, 9.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn drift(&self, bodies: &mut [Body], scale: f64) {
        bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * scale;
        });
    }
}

//! Bouncing-ball physics for a 2D canvas
//!
//! A [`SimulationWorld`] owns a set of circular bodies inside a rectangle and
//! advances them one tick at a time: pairwise collisions (elastic bounces, or
//! merges under the bonding policy), Euler integration, wall reflection and
//! repulsion from a pointer. Rendering is left to the caller, who gets a
//! [`BodySnapshot`] per body after every tick.

pub mod body;
pub mod boundary;
pub mod collisions;
pub mod config;
pub mod error;
pub mod integrator;
pub mod pointer;
pub mod sampling;
pub mod sparks;
pub mod world;

#[cfg(test)]
mod boundary_test;
#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod sampling_test;

pub use body::{Body, BodyId, BodySnapshot, Color};
pub use boundary::Bounds;
pub use config::{CollisionPolicy, SimulationConfig, ValueRange};
pub use error::{ConfigResult, ConfigurationError};
pub use integrator::TimeStep;
pub use sampling::BodyFactory;
pub use sparks::{SparkConfig, SparkSnapshot};
pub use world::{FrameSnapshot, SimulationWorld, TickStats};

//! Pairwise contact classification
//!
//! Discrete, per-frame checks on center distance only. There is no
//! broad phase; worlds hold a handful of bodies and sweep all pairs.

use crate::body::{Body, BodyId};
use crate::config::{CollisionPolicy, SimulationConfig};

/// How two bodies relate this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
    Separate,
    /// Centers closer than the sum of the radii
    Overlapping,
    /// Not overlapping, but closer than the bond threshold
    Bonding,
}

/// What counts as contact
///
/// # Examples
///
/// ```
/// use ballpit::collisions::ContactCriteria;
///
/// // Elastic only: pairs are either separate or overlapping
/// let elastic = ContactCriteria::elastic();
/// assert!(elastic.bond_threshold.is_none());
///
/// // Bond anything within 50px that is not already overlapping
/// let bonding = ContactCriteria::bonding(50.0);
/// assert_eq!(bonding.bond_threshold, Some(50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactCriteria {
    /// Bond distance; `None` disables bonding
    pub bond_threshold: Option<f64>,
}

impl ContactCriteria {
    pub fn elastic() -> Self {
        Self {
            bond_threshold: None,
        }
    }

    pub fn bonding(threshold: f64) -> Self {
        Self {
            bond_threshold: Some(threshold),
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        match config.collision_policy {
            CollisionPolicy::Elastic => Self::elastic(),
            CollisionPolicy::Bonding => Self::bonding(config.bond_threshold),
        }
    }
}

/// Classifies a pair of bodies
///
/// Symmetric in `a` and `b`. Identical centers count as overlapping. The bond
/// test only runs when the pair is not already overlapping.
///
/// # Examples
///
/// ```
/// use ballpit::body::{Body, BodyId};
/// use ballpit::collisions::{Contact, ContactCriteria, classify};
///
/// let a = Body::new(BodyId(0), 10.0, [0.0, 0.0], [0.0, 0.0], "#fff");
/// let b = Body::new(BodyId(1), 15.0, [40.0, 0.0], [0.0, 0.0], "#fff");
///
/// assert_eq!(classify(&a, &b, &ContactCriteria::elastic()), Contact::Separate);
/// assert_eq!(classify(&a, &b, &ContactCriteria::bonding(50.0)), Contact::Bonding);
/// ```
pub fn classify(a: &Body, b: &Body, criteria: &ContactCriteria) -> Contact {
    let separation = a.distance_to(b);

    if separation < a.radius + b.radius {
        return Contact::Overlapping;
    }

    match criteria.bond_threshold {
        Some(threshold) if separation < threshold => Contact::Bonding,
        _ => Contact::Separate,
    }
}

/// Angle of the line from `a`'s center to `b`'s center
///
/// Falls back to 0 (the +x axis) when the centers coincide.
pub fn normal_angle(a: &Body, b: &Body) -> f64 {
    let offset = b.position - a.position;
    if offset.x == 0.0 && offset.y == 0.0 {
        0.0
    } else {
        offset.y.atan2(offset.x)
    }
}

/// A pair that should bond once the sweep is over
#[derive(Debug, Clone, PartialEq)]
pub struct BondEvent {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Center distance when the pair was found
    pub separation: f64,
}

//! Collision resolution
//!
//! Two outcomes are possible for a close pair:
//! - Elastic bounce: velocities are exchanged along the contact normal, using
//!   each body's radius as its mass. Tangential components pass through.
//! - Bond merge: the pair is replaced by a single body whose radius is the sum
//!   of both radii.
//!
//! Bounces mutate bodies in place during a sweep. Merges change the body
//! collection, so they are recorded as [`BondEvent`]s and applied together
//! after the sweep by [`resolve_bonds`].

use std::collections::HashSet;

use nalgebra::{Rotation2, Vector2};

use crate::body::{Body, BodyId, Color, IdAllocator};
use crate::collisions::detection::{BondEvent, normal_angle};
use crate::config::SimulationConfig;

/// Optional refinements to the basic elastic bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ElasticOptions {
    /// Step each body once along the normal by its new normal velocity.
    /// Off by default: overlapping bodies keep their positions.
    pub advance_on_contact: bool,
    /// Skip pairs whose relative velocity points away from each other
    pub require_approach: bool,
}

impl ElasticOptions {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            advance_on_contact: config.advance_on_contact,
            require_approach: config.require_approach,
        }
    }
}

/// Post-collision normal speeds for a 1D elastic collision
///
/// `v1' = ((m1 - m2) v1 + 2 m2 v2) / (m1 + m2)` and `v2' = v1' + (v1 - v2)`.
pub fn exchange_normal(m1: f64, v1: f64, m2: f64, v2: f64) -> (f64, f64) {
    let v1_final = ((m1 - m2) * v1 + 2.0 * m2 * v2) / (m1 + m2);
    let v2_final = v1_final + (v1 - v2);
    (v1_final, v2_final)
}

/// True when `a` and `b` are closing along the line between their centers
pub fn is_approaching(a: &Body, b: &Body) -> bool {
    let relative_velocity = a.velocity - b.velocity;
    let offset = b.position - a.position;
    relative_velocity.dot(&offset) >= 0.0
}

/// Bounces two overlapping bodies off each other
///
/// Velocities are rotated into the contact frame, the normal components are
/// exchanged with radius as mass, and the result is rotated back. Coincident
/// centers use the +x axis as the normal, so the result is always finite.
///
/// Returns false if `require_approach` is set and the pair is separating.
///
/// # Examples
///
/// ```
/// use ballpit::body::{Body, BodyId};
/// use ballpit::collisions::{ElasticOptions, resolve_elastic};
///
/// let mut a = Body::new(BodyId(0), 10.0, [0.0, 0.0], [2.0, 0.0], "#fff");
/// let mut b = Body::new(BodyId(1), 10.0, [15.0, 0.0], [0.0, 0.0], "#fff");
///
/// assert!(resolve_elastic(&mut a, &mut b, &ElasticOptions::default()));
///
/// // Equal masses swap their normal velocities
/// assert!(a.velocity.x.abs() < 1e-12);
/// assert!((b.velocity.x - 2.0).abs() < 1e-12);
/// ```
pub fn resolve_elastic(a: &mut Body, b: &mut Body, options: &ElasticOptions) -> bool {
    if options.require_approach && !is_approaching(a, b) {
        return false;
    }

    let theta = normal_angle(a, b);
    let to_contact = Rotation2::new(-theta);
    let to_world = Rotation2::new(theta);

    let u1 = to_contact * a.velocity;
    let u2 = to_contact * b.velocity;
    let (v1n, v2n) = exchange_normal(a.mass(), u1.x, b.mass(), u2.x);

    if options.advance_on_contact {
        // Both positions are measured from a's center before it moves
        let origin = a.position;
        let separation = a.distance_to(b);
        a.position = origin + to_world * Vector2::new(v1n, 0.0);
        b.position = origin + to_world * Vector2::new(separation + v2n, 0.0);
    }

    a.velocity = to_world * Vector2::new(v1n, u1.y);
    b.velocity = to_world * Vector2::new(v2n, u2.y);
    true
}

/// Merges two bodies into one
///
/// The merged body sits at the midpoint, moves at the average velocity and
/// has the sum of both radii.
///
/// # Examples
///
/// ```
/// use ballpit::body::{Body, BodyId, Color};
/// use ballpit::collisions::merge_bodies;
///
/// let a = Body::new(BodyId(0), 10.0, [0.0, 0.0], [2.0, 0.0], "#fff");
/// let b = Body::new(BodyId(1), 15.0, [40.0, 0.0], [0.0, 4.0], "#000");
///
/// let merged = merge_bodies(&a, &b, BodyId(2), Color::new("#FF0000"));
/// assert_eq!(merged.radius, 25.0);
/// assert_eq!(merged.position.x, 20.0);
/// assert_eq!(merged.velocity.x, 1.0);
/// assert_eq!(merged.velocity.y, 2.0);
/// ```
pub fn merge_bodies(a: &Body, b: &Body, new_id: BodyId, color: Color) -> Body {
    Body {
        id: new_id,
        radius: a.radius + b.radius,
        position: nalgebra::center(&a.position, &b.position),
        velocity: (a.velocity + b.velocity) / 2.0,
        color,
    }
}

/// Applies a batch of bond events to the body collection
///
/// Handles overlapping events (one body in several pairs) by:
/// 1. Sorting events by separation, closest first
/// 2. Tracking which bodies have already merged this batch
/// 3. Skipping events that involve a consumed body
///
/// All consumed bodies are removed in one pass and the merged bodies are
/// appended in event order. Returns the IDs of the new bodies.
pub fn resolve_bonds(
    bodies: &mut Vec<Body>,
    mut events: Vec<BondEvent>,
    color: &Color,
    ids: &mut IdAllocator,
) -> Vec<BodyId> {
    events.sort_by(|a, b| a.separation.total_cmp(&b.separation));

    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut merged: Vec<Body> = Vec::new();

    for event in events {
        if event.body_a == event.body_b
            || consumed.contains(&event.body_a)
            || consumed.contains(&event.body_b)
        {
            continue;
        }

        let a = bodies.iter().find(|b| b.id == event.body_a);
        let b = bodies.iter().find(|b| b.id == event.body_b);

        if let (Some(a), Some(b)) = (a, b) {
            merged.push(merge_bodies(a, b, ids.next_id(), color.clone()));
            consumed.insert(event.body_a);
            consumed.insert(event.body_b);
        }
    }

    bodies.retain(|body| !consumed.contains(&body.id));

    let new_ids = merged.iter().map(|body| body.id).collect();
    bodies.extend(merged);
    new_ids
}

//! Collision detection and resolution between bodies
//!
//! Detection classifies each pair as separate, overlapping or bonding.
//! Resolution either bounces overlapping pairs elastically or merges
//! bonding pairs into a single larger body.

pub mod detection;
pub mod resolution;

#[cfg(test)]
mod detection_test;

pub use detection::{BondEvent, Contact, ContactCriteria, classify, normal_angle};
pub use resolution::{
    ElasticOptions, exchange_normal, is_approaching, merge_bodies, resolve_bonds, resolve_elastic,
};

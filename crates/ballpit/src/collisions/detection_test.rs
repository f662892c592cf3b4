use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::body::{Body, BodyId};
use crate::collisions::detection::*;
use crate::config::{CollisionPolicy, SimulationConfig};

fn body_at(id: u32, radius: f64, x: f64, y: f64) -> Body {
    Body::new(BodyId(id), radius, [x, y], [0.0, 0.0], "#fff")
}

#[test]
fn test_separate() {
    let a = body_at(0, 10.0, 0.0, 0.0);
    let b = body_at(1, 10.0, 100.0, 0.0);

    assert_eq!(classify(&a, &b, &ContactCriteria::elastic()), Contact::Separate);
    assert_eq!(
        classify(&a, &b, &ContactCriteria::bonding(50.0)),
        Contact::Separate
    );
}

#[test]
fn test_overlapping() {
    let a = body_at(0, 10.0, 0.0, 0.0);
    let b = body_at(1, 10.0, 12.0, 16.0); // distance 20 == r1 + r2 is not an overlap
    assert_eq!(classify(&a, &b, &ContactCriteria::elastic()), Contact::Separate);

    let c = body_at(2, 10.0, 12.0, 15.0);
    assert_eq!(
        classify(&a, &c, &ContactCriteria::elastic()),
        Contact::Overlapping
    );
}

#[test]
fn test_identical_centers_overlap() {
    let a = body_at(0, 5.0, 30.0, 30.0);
    let b = body_at(1, 8.0, 30.0, 30.0);

    assert_eq!(
        classify(&a, &b, &ContactCriteria::bonding(50.0)),
        Contact::Overlapping
    );
}

#[test]
fn test_bonding_only_when_not_overlapping() {
    let a = body_at(0, 10.0, 0.0, 0.0);
    let b = body_at(1, 15.0, 40.0, 0.0);
    let criteria = ContactCriteria::bonding(50.0);

    assert_eq!(classify(&a, &b, &criteria), Contact::Bonding);

    // Overlap wins over bonding
    let big = body_at(2, 35.0, 40.0, 0.0);
    assert_eq!(classify(&a, &big, &criteria), Contact::Overlapping);

    // Exactly at the threshold does not bond
    let far = body_at(3, 15.0, 50.0, 0.0);
    assert_eq!(classify(&a, &far, &criteria), Contact::Separate);
}

#[test]
fn test_elastic_never_bonds() {
    let a = body_at(0, 10.0, 0.0, 0.0);
    let b = body_at(1, 15.0, 40.0, 0.0);

    assert_eq!(classify(&a, &b, &ContactCriteria::elastic()), Contact::Separate);
}

#[test]
fn test_classify_is_symmetric() {
    let mut rng = ChaChaRng::seed_from_u64(2024);
    let criteria = ContactCriteria::bonding(50.0);

    for i in 0..500 {
        let a = body_at(
            0,
            rng.random_range(1.0..40.0),
            rng.random_range(0.0..120.0),
            rng.random_range(0.0..120.0),
        );
        let b = body_at(
            i + 1,
            rng.random_range(1.0..40.0),
            rng.random_range(0.0..120.0),
            rng.random_range(0.0..120.0),
        );
        assert_eq!(classify(&a, &b, &criteria), classify(&b, &a, &criteria));
    }
}

#[test]
fn test_criteria_from_config() {
    let elastic = SimulationConfig::default();
    assert_eq!(ContactCriteria::from_config(&elastic), ContactCriteria::elastic());

    let bonding = SimulationConfig {
        bond_threshold: 75.0,
        ..Default::default()
    }
    .with_policy(CollisionPolicy::Bonding);
    assert_eq!(
        ContactCriteria::from_config(&bonding),
        ContactCriteria::bonding(75.0)
    );
}

#[test]
fn test_normal_angle() {
    let a = body_at(0, 1.0, 0.0, 0.0);

    assert_relative_eq!(normal_angle(&a, &body_at(1, 1.0, 5.0, 0.0)), 0.0);
    assert_relative_eq!(normal_angle(&a, &body_at(1, 1.0, 0.0, 5.0)), FRAC_PI_2);
    assert_relative_eq!(normal_angle(&a, &body_at(1, 1.0, -5.0, 0.0)), PI);
}

#[test]
fn test_normal_angle_coincident_falls_back_to_x_axis() {
    let a = body_at(0, 1.0, 7.0, 7.0);
    let b = body_at(1, 1.0, 7.0, 7.0);

    assert_eq!(normal_angle(&a, &b), 0.0);
}

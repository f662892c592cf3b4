use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId};
use crate::boundary::{Bounds, reflect};
use crate::error::ConfigurationError;

fn bounds() -> Bounds {
    Bounds::new(200.0, 100.0).unwrap()
}

#[test]
fn test_bounds_rejects_bad_extent() {
    assert!(matches!(
        Bounds::new(-5.0, 100.0),
        Err(ConfigurationError::NonPositive { field: "width", .. })
    ));
    assert!(matches!(
        Bounds::new(100.0, f64::NAN),
        Err(ConfigurationError::NotFinite {
            field: "height",
            ..
        })
    ));
}

#[test]
fn test_center() {
    assert_eq!(bounds().center(), Point2::new(100.0, 50.0));
}

#[test]
fn test_reflect_right_wall() {
    let mut body = Body::new(BodyId(0), 5.0, [199.0, 50.0], [3.0, 1.0], "#fff");

    assert!(reflect(&mut body, &bounds()));
    assert_eq!(body.velocity, Vector2::new(-3.0, 1.0));
    // Position is never clamped
    assert_eq!(body.position, Point2::new(199.0, 50.0));
}

#[test]
fn test_reflect_left_and_top_walls() {
    let mut body = Body::new(BodyId(0), 10.0, [4.0, 6.0], [-2.0, -2.0], "#fff");

    assert!(reflect(&mut body, &bounds()));
    assert_eq!(body.velocity, Vector2::new(2.0, 2.0));
}

#[test]
fn test_reflect_bottom_wall_only() {
    let mut body = Body::new(BodyId(0), 10.0, [100.0, 95.0], [1.0, 4.0], "#fff");

    assert!(reflect(&mut body, &bounds()));
    assert_eq!(body.velocity, Vector2::new(1.0, -4.0));
}

#[test]
fn test_no_reflect_inside() {
    let mut body = Body::new(BodyId(0), 10.0, [100.0, 50.0], [1.0, 1.0], "#fff");

    assert!(!reflect(&mut body, &bounds()));
    assert_eq!(body.velocity, Vector2::new(1.0, 1.0));
}

#[test]
fn test_touching_wall_exactly_does_not_reflect() {
    let mut body = Body::new(BodyId(0), 10.0, [190.0, 10.0], [1.0, -1.0], "#fff");

    assert!(!reflect(&mut body, &bounds()));
}

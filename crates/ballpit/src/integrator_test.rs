use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::body::{Body, BodyId};
use crate::error::ConfigurationError;
use crate::integrator::{DEFAULT_TICKS_PER_SECOND, Euler, Integrator, TimeStep};

fn make_bodies() -> Vec<Body> {
    vec![
        Body::new(BodyId(0), 10.0, [100.0, 100.0], [1.0, 2.0], "#fff"),
        Body::new(BodyId(1), 20.0, [50.0, 80.0], [-3.0, 0.5], "#000"),
    ]
}

#[test]
fn test_euler_per_tick() {
    let mut bodies = make_bodies();
    Euler.drift(&mut bodies, TimeStep::PerTick.scale(0.1));

    assert_eq!(bodies[0].position, Point2::new(101.0, 102.0));
    assert_eq!(bodies[1].position, Point2::new(47.0, 80.5));
}

#[test]
fn test_euler_leaves_velocity_alone() {
    let mut bodies = make_bodies();
    let before: Vec<_> = bodies.iter().map(|b| b.velocity).collect();

    Euler.drift(&mut bodies, 1.0);

    let after: Vec<_> = bodies.iter().map(|b| b.velocity).collect();
    assert_eq!(before, after);
}

#[test]
fn test_elapsed_scaling() {
    let step = TimeStep::Elapsed {
        ticks_per_second: 60.0,
    };
    let mut bodies = make_bodies();

    // Two nominal frames worth of time
    Euler.drift(&mut bodies, step.scale(2.0 / 60.0));

    assert_relative_eq!(bodies[0].position.x, 102.0, epsilon = 1e-12);
    assert_relative_eq!(bodies[0].position.y, 104.0, epsilon = 1e-12);
}

#[test]
fn test_elapsed_ignores_negative_and_nan_time() {
    let step = TimeStep::Elapsed {
        ticks_per_second: 60.0,
    };

    assert_eq!(step.scale(-1.0), 0.0);
    assert_eq!(step.scale(f64::NAN), 0.0);
}

#[test]
fn test_elapsed_ignores_infinite_time() {
    let step = TimeStep::Elapsed {
        ticks_per_second: 60.0,
    };

    assert_eq!(step.scale(f64::INFINITY), 0.0);
    assert_eq!(step.scale(f64::NEG_INFINITY), 0.0);

    let mut bodies = make_bodies();
    let before: Vec<_> = bodies.iter().map(|b| b.position).collect();
    Euler.drift(&mut bodies, step.scale(f64::INFINITY));
    for (body, position) in bodies.iter().zip(before) {
        assert_eq!(body.position, position);
    }
}

#[test]
fn test_nominal_seconds() {
    assert_relative_eq!(
        TimeStep::PerTick.nominal_seconds(),
        1.0 / DEFAULT_TICKS_PER_SECOND
    );
    let step = TimeStep::Elapsed {
        ticks_per_second: 30.0,
    };
    assert_relative_eq!(step.nominal_seconds(), 1.0 / 30.0);
    assert_relative_eq!(step.scale(step.nominal_seconds()), 1.0);
}

#[test]
fn test_validate_ticks_per_second() {
    assert!(TimeStep::PerTick.validate().is_ok());

    let bad = TimeStep::Elapsed {
        ticks_per_second: 0.0,
    };
    assert!(matches!(
        bad.validate(),
        Err(ConfigurationError::NonPositive {
            field: "timeStep.ticksPerSecond",
            ..
        })
    ));
}

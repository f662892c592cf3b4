use nalgebra::Point2;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::body::{BodyId, Color};
use crate::config::{SimulationConfig, ValueRange, default_palette};
use crate::error::ConfigurationError;
use crate::sampling::{BodyFactory, create_body, sample_sign, sample_uniform};

#[test]
fn test_sample_uniform_stays_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let range = ValueRange::new(20.0, 60.0);

    for _ in 0..1000 {
        assert!(range.contains(sample_uniform(&mut rng, range)));
    }
}

#[test]
fn test_sample_uniform_degenerate_range() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let range = ValueRange::new(5.0, 5.0);

    assert_eq!(sample_uniform(&mut rng, range), 5.0);
}

#[test]
fn test_sample_sign_hits_both() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let signs: Vec<f64> = (0..200).map(|_| sample_sign(&mut rng)).collect();

    assert!(signs.iter().all(|s| *s == 1.0 || *s == -1.0));
    assert!(signs.contains(&1.0));
    assert!(signs.contains(&-1.0));
}

#[test]
fn test_velocities_are_diagonal() {
    let mut rng = ChaChaRng::seed_from_u64(3);
    let palette = default_palette();
    let speeds = ValueRange::new(0.5, 1.5);

    for i in 0..200 {
        let body = create_body(
            &mut rng,
            BodyId(i),
            Point2::new(0.0, 0.0),
            ValueRange::new(10.0, 30.0),
            speeds,
            &palette,
        );
        assert_eq!(body.velocity.x.abs(), body.velocity.y.abs());
        assert!(speeds.contains(body.velocity.x.abs()));
    }
}

#[test]
fn test_create_body_spawn_and_palette() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    let palette = vec![Color::new("a"), Color::new("b")];

    let body = create_body(
        &mut rng,
        BodyId(4),
        Point2::new(320.0, 240.0),
        ValueRange::new(10.0, 30.0),
        ValueRange::new(0.5, 1.5),
        &palette,
    );

    assert_eq!(body.id, BodyId(4));
    assert_eq!(body.position, Point2::new(320.0, 240.0));
    assert!(palette.contains(&body.color));
    assert!(body.radius >= 10.0 && body.radius <= 30.0);
}

#[test]
fn test_factory_is_reproducible() {
    let factory = BodyFactory::from_config(&SimulationConfig::bonding()).unwrap();
    let spawn = Point2::new(100.0, 100.0);

    let mut rng_a = ChaChaRng::seed_from_u64(99);
    let mut rng_b = ChaChaRng::seed_from_u64(99);

    for i in 0..10 {
        assert_eq!(
            factory.create(&mut rng_a, BodyId(i), spawn),
            factory.create(&mut rng_b, BodyId(i), spawn)
        );
    }
}

#[test]
fn test_factory_rejects_bad_ranges() {
    let palette = default_palette();

    assert!(matches!(
        BodyFactory::new(
            ValueRange::new(30.0, 10.0),
            ValueRange::new(0.5, 1.5),
            palette.clone()
        ),
        Err(ConfigurationError::InvalidRange {
            field: "sizeRange",
            ..
        })
    ));
    assert!(matches!(
        BodyFactory::new(
            ValueRange::new(0.0, 10.0),
            ValueRange::new(0.5, 1.5),
            palette.clone()
        ),
        Err(ConfigurationError::NonPositive {
            field: "sizeRange",
            ..
        })
    ));
    assert!(matches!(
        BodyFactory::new(
            ValueRange::new(10.0, 20.0),
            ValueRange::new(2.0, 1.0),
            palette
        ),
        Err(ConfigurationError::InvalidRange {
            field: "speedRange",
            ..
        })
    ));
}

#[test]
fn test_factory_rejects_empty_palette() {
    assert_eq!(
        BodyFactory::new(
            ValueRange::new(10.0, 20.0),
            ValueRange::new(0.5, 1.5),
            Vec::new()
        )
        .unwrap_err(),
        ConfigurationError::EmptyPalette
    );
}

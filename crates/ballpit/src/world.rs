use nalgebra::{Point2, Vector2};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use serde::Serialize;
use tracing::{debug, info, trace};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::body::{Body, BodyId, BodySnapshot, Color, IdAllocator};
use crate::boundary::{Bounds, reflect};
use crate::collisions::{
    BondEvent, Contact, ContactCriteria, ElasticOptions, classify, resolve_bonds, resolve_elastic,
};
use crate::config::SimulationConfig;
use crate::error::{ConfigResult, ensure_finite, ensure_positive};
use crate::integrator::{Euler, Integrator};
use crate::pointer::{Pointer, repel};
use crate::sampling::BodyFactory;
use crate::sparks::{Spark, SparkSnapshot, age_sparks, emit_sparks};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Overlapping pairs found in the sweep
    pub contacts: usize,
    /// Overlapping pairs that were actually bounced
    pub bounces: usize,
    /// Bodies created by bond merges
    pub merges: usize,
    /// Bodies with at least one velocity component flipped by a wall
    pub wall_hits: usize,
    /// Bodies pushed away by the pointer
    pub pointer_hits: usize,
}

/// Everything a renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
#[serde(rename_all = "camelCase")]
pub struct FrameSnapshot {
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub bodies: Vec<BodySnapshot>,
    pub sparks: Vec<SparkSnapshot>,
}

/// A canvas full of bouncing bodies
///
/// Owns every body outright. Each [`tick`](Self::tick) runs, in order:
/// 1. a pairwise sweep that bounces overlapping pairs in place and records
///    bonding pairs,
/// 2. all recorded bond merges at once,
/// 3. Euler integration,
/// 4. wall reflection,
/// 5. pointer repulsion.
///
/// # Examples
///
/// ```
/// use ballpit::config::SimulationConfig;
/// use ballpit::world::SimulationWorld;
///
/// let mut world = SimulationWorld::new(SimulationConfig::default(), 800.0, 600.0, 42).unwrap();
/// assert_eq!(world.body_count(), 6);
///
/// world.set_pointer(400.0, 300.0);
/// let frame = world.tick();
/// assert_eq!(frame.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationWorld {
    config: SimulationConfig,
    factory: BodyFactory,
    criteria: ContactCriteria,
    elastic: ElasticOptions,
    integrator: Euler,
    bounds: Bounds,
    pointer: Pointer,
    bodies: Vec<Body>,
    sparks: Vec<Spark>,
    ids: IdAllocator,
    rng: ChaChaRng,
    ticks: u64,
    last_stats: TickStats,
}

impl SimulationWorld {
    /// Creates a world and spawns `initial_body_count` bodies at the center
    ///
    /// Fails if the configuration or the canvas size is invalid.
    pub fn new(config: SimulationConfig, width: f64, height: f64, seed: u64) -> ConfigResult<Self> {
        config.validate()?;
        let bounds = Bounds::new(width, height)?;
        let factory = BodyFactory::from_config(&config)?;

        let mut world = Self {
            criteria: ContactCriteria::from_config(&config),
            elastic: ElasticOptions::from_config(&config),
            integrator: Euler,
            factory,
            bounds,
            pointer: Pointer::default(),
            bodies: Vec::with_capacity(config.initial_body_count),
            sparks: Vec::new(),
            ids: IdAllocator::new(),
            rng: ChaChaRng::seed_from_u64(seed),
            ticks: 0,
            last_stats: TickStats::default(),
            config,
        };

        let center = world.bounds.center();
        for _ in 0..world.config.initial_body_count {
            let id = world.ids.next_id();
            let body = world.factory.create(&mut world.rng, id, center);
            world.bodies.push(body);
        }

        info!(
            bodies = world.bodies.len(),
            width,
            height,
            seed,
            policy = ?world.config.collision_policy,
            "created simulation world"
        );

        Ok(world)
    }

    /// Resizes the canvas and moves every body to the new center
    ///
    /// This is a full position reset, not a rescale. Velocities are kept.
    pub fn set_bounds(&mut self, width: f64, height: f64) -> ConfigResult<()> {
        self.bounds = Bounds::new(width, height)?;
        let center = self.bounds.center();
        self.bodies.iter_mut().for_each(|body| body.position = center);

        info!(width, height, bodies = self.bodies.len(), "resized world");
        Ok(())
    }

    /// Moves the pointer; NaN or infinite coordinates clear it instead
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.set(x, y);
    }

    /// Moves the pointer off the canvas
    pub fn clear_pointer(&mut self) {
        self.pointer.clear();
    }

    /// Spawns one random body at `(x, y)` and returns its ID
    pub fn spawn(&mut self, x: f64, y: f64) -> BodyId {
        let id = self.ids.next_id();
        let body = self.factory.create(&mut self.rng, id, Point2::new(x, y));
        debug!(id = id.0, x, y, radius = body.radius, "spawned body");
        self.bodies.push(body);
        id
    }

    /// Adds a body with exact properties and returns its ID
    ///
    /// Fails on a non-positive radius or a non-finite position or velocity.
    pub fn add_body(
        &mut self,
        radius: f64,
        position: [f64; 2],
        velocity: [f64; 2],
        color: impl Into<Color>,
    ) -> ConfigResult<BodyId> {
        ensure_positive("radius", radius)?;
        for value in position {
            ensure_finite("position", value)?;
        }
        for value in velocity {
            ensure_finite("velocity", value)?;
        }

        let id = self.ids.next_id();
        self.bodies.push(Body::new(id, radius, position, velocity, color));
        Ok(id)
    }

    /// Advances one nominal frame and returns the bodies to draw
    pub fn tick(&mut self) -> Vec<BodySnapshot> {
        let elapsed = self.config.time_step.nominal_seconds();
        self.tick_elapsed(elapsed)
    }

    /// Advances one frame that took `elapsed_seconds` of wall-clock time
    ///
    /// Under [`TimeStep::PerTick`](crate::integrator::TimeStep::PerTick) the
    /// elapsed time only ages sparks.
    pub fn tick_elapsed(&mut self, elapsed_seconds: f64) -> Vec<BodySnapshot> {
        self.step(elapsed_seconds);
        self.snapshots()
    }

    /// Runs one tick and reports what happened
    pub fn step(&mut self, elapsed_seconds: f64) -> TickStats {
        let mut stats = TickStats::default();

        let bonds = self.sweep(&mut stats);
        if !bonds.is_empty() {
            let created = resolve_bonds(
                &mut self.bodies,
                bonds,
                &self.config.merged_color,
                &mut self.ids,
            );
            stats.merges = created.len();
            debug!(
                tick = self.ticks,
                merged = ?created,
                bodies = self.bodies.len(),
                "bonded bodies"
            );
        }

        let scale = self.config.time_step.scale(elapsed_seconds);
        self.integrator.drift(&mut self.bodies, scale);

        for body in self.bodies.iter_mut() {
            if reflect(body, &self.bounds) {
                stats.wall_hits += 1;
            }
            if repel(body, &self.pointer, self.config.pointer_escape_speed) {
                stats.pointer_hits += 1;
            }
        }

        age_sparks(&mut self.sparks, scale, elapsed_seconds);

        self.ticks += 1;
        self.last_stats = stats;
        trace!(
            tick = self.ticks,
            bodies = self.bodies.len(),
            contacts = stats.contacts,
            merges = stats.merges,
            sparks = self.sparks.len(),
            "tick"
        );
        stats
    }

    /// Pairwise pass over the bodies in collection order
    ///
    /// Overlapping pairs bounce immediately. Bonding pairs are only recorded;
    /// the collection is never resized while it is being swept.
    fn sweep(&mut self, stats: &mut TickStats) -> Vec<BondEvent> {
        let mut bonds = Vec::new();
        let n = self.bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(&mut self.bodies, i, j);

                match classify(a, b, &self.criteria) {
                    Contact::Separate => {}
                    Contact::Overlapping => {
                        stats.contacts += 1;
                        if let Some(sparks) = &self.config.sparks {
                            self.sparks.extend(emit_sparks(&mut self.rng, a, b, sparks));
                        }
                        if resolve_elastic(a, b, &self.elastic) {
                            stats.bounces += 1;
                        }
                    }
                    Contact::Bonding => bonds.push(BondEvent {
                        body_a: a.id,
                        body_b: b.id,
                        separation: a.distance_to(b),
                    }),
                }
            }
        }

        bonds
    }

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies.iter().map(Body::snapshot).collect()
    }

    pub fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.ticks,
            width: self.bounds.width,
            height: self.bounds.height,
            bodies: self.snapshots(),
            sparks: self.sparks.iter().map(Spark::snapshot).collect(),
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks run so far
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Sum of radius-weighted velocities
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(Body::momentum)
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }
}

/// Two distinct mutable bodies, `i < j`
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}

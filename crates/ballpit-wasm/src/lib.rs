//! WASM bindings for the ballpit simulation.
//!
//! This crate drives a [`SimulationWorld`] from a browser animation loop. The
//! page owns the canvas and the `requestAnimationFrame` callback; this crate
//! owns the bodies.
//!
//! # Architecture
//!
//! Worlds live in thread-local storage (WASM is single-threaded). Functions
//! return opaque IDs for referencing a world, and serializable snapshots for
//! drawing it.
//!
//! # Example Usage (JavaScript)
//!
//! ```javascript
//! const worldId = world_create(canvas.width, canvas.height, BigInt(Date.now()));
//!
//! canvas.addEventListener("mousemove", (e) => world_set_pointer(worldId, e.offsetX, e.offsetY));
//! canvas.addEventListener("mouseleave", () => world_clear_pointer(worldId));
//! window.addEventListener("resize", () => world_set_bounds(worldId, canvas.width, canvas.height));
//!
//! function frame() {
//!   ctx.clearRect(0, 0, canvas.width, canvas.height);
//!   for (const body of world_tick(worldId)) {
//!     ctx.beginPath();
//!     ctx.arc(body.position[0], body.position[1], body.radius, 0, Math.PI * 2);
//!     ctx.fillStyle = body.color;
//!     ctx.fill();
//!   }
//!   requestAnimationFrame(frame);
//! }
//! requestAnimationFrame(frame);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use ballpit::config::SimulationConfig;
use ballpit::world::SimulationWorld;

// =============================================================================
// Serialization helpers
// =============================================================================

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// =============================================================================
// Thread-local storage for worlds
// =============================================================================

thread_local! {
    static WORLDS: RefCell<HashMap<u32, SimulationWorld>> = RefCell::new(HashMap::new());
    static NEXT_WORLD_ID: RefCell<u32> = const { RefCell::new(0) };
}

fn insert_world(world: SimulationWorld) -> u32 {
    let id = NEXT_WORLD_ID.with(|next_id| {
        let mut id = next_id.borrow_mut();
        let current = *id;
        *id += 1;
        current
    });

    WORLDS.with(|worlds| {
        worlds.borrow_mut().insert(id, world);
    });

    id
}

fn not_found(world_id: u32) -> JsError {
    JsError::new(&format!("World {} not found", world_id))
}

fn with_world<R>(
    world_id: u32,
    f: impl FnOnce(&SimulationWorld) -> Result<R, JsError>,
) -> Result<R, JsError> {
    WORLDS.with(|worlds| {
        let worlds = worlds.borrow();
        let world = worlds.get(&world_id).ok_or_else(|| not_found(world_id))?;
        f(world)
    })
}

fn with_world_mut<R>(
    world_id: u32,
    f: impl FnOnce(&mut SimulationWorld) -> Result<R, JsError>,
) -> Result<R, JsError> {
    WORLDS.with(|worlds| {
        let mut worlds = worlds.borrow_mut();
        let world = worlds.get_mut(&world_id).ok_or_else(|| not_found(world_id))?;
        f(world)
    })
}

// =============================================================================
// World management
// =============================================================================

/// Create a world with the default elastic settings.
///
/// Returns a world ID for use with other functions.
///
/// # Arguments
/// * `width` - Canvas width in px
/// * `height` - Canvas height in px
/// * `seed` - Seed for body sizes, speeds and colors
#[wasm_bindgen]
pub fn world_create(width: f64, height: f64, seed: u64) -> Result<u32, JsError> {
    let world = SimulationWorld::new(SimulationConfig::default(), width, height, seed)?;
    Ok(insert_world(world))
}

/// Create a world from a partial configuration object.
///
/// Missing fields fall back to the defaults, so `{ collisionPolicy: "bonding" }`
/// is a complete configuration.
///
/// # Arguments
/// * `config` - Configuration object (camelCase fields)
/// * `width` - Canvas width in px
/// * `height` - Canvas height in px
/// * `seed` - Seed for body sizes, speeds and colors
#[wasm_bindgen]
pub fn world_create_with_config(
    config: JsValue,
    width: f64,
    height: f64,
    seed: u64,
) -> Result<u32, JsError> {
    let config: SimulationConfig = from_js(config)?;
    let world = SimulationWorld::new(config, width, height, seed)?;
    Ok(insert_world(world))
}

/// Delete a world to free memory.
#[wasm_bindgen]
pub fn world_delete(world_id: u32) {
    WORLDS.with(|worlds| {
        worlds.borrow_mut().remove(&world_id);
    });
}

// =============================================================================
// Input
// =============================================================================

/// Resize the canvas. Every body is moved to the new center.
#[wasm_bindgen]
pub fn world_set_bounds(world_id: u32, width: f64, height: f64) -> Result<(), JsError> {
    with_world_mut(world_id, |world| Ok(world.set_bounds(width, height)?))
}

/// Move the pointer to canvas coordinates `(x, y)`.
#[wasm_bindgen]
pub fn world_set_pointer(world_id: u32, x: f64, y: f64) -> Result<(), JsError> {
    with_world_mut(world_id, |world| {
        world.set_pointer(x, y);
        Ok(())
    })
}

/// Move the pointer off the canvas so it repels nothing.
#[wasm_bindgen]
pub fn world_clear_pointer(world_id: u32) -> Result<(), JsError> {
    with_world_mut(world_id, |world| {
        world.clear_pointer();
        Ok(())
    })
}

/// Spawn one random body at `(x, y)`.
///
/// # Returns
/// The new body's ID
#[wasm_bindgen]
pub fn world_spawn(world_id: u32, x: f64, y: f64) -> Result<u32, JsError> {
    with_world_mut(world_id, |world| Ok(world.spawn(x, y).0))
}

// =============================================================================
// Stepping
// =============================================================================

/// Advance one frame.
///
/// # Returns
/// Array of `{ id, position, radius, color }` body snapshots to draw
#[wasm_bindgen]
pub fn world_tick(world_id: u32) -> Result<JsValue, JsError> {
    with_world_mut(world_id, |world| to_js(&world.tick()))
}

/// Advance one frame that took `elapsed_seconds` of wall-clock time.
///
/// Only worlds configured with an elapsed time step scale their motion by it.
#[wasm_bindgen]
pub fn world_tick_elapsed(world_id: u32, elapsed_seconds: f64) -> Result<JsValue, JsError> {
    with_world_mut(world_id, |world| to_js(&world.tick_elapsed(elapsed_seconds)))
}

// =============================================================================
// State queries
// =============================================================================

/// Get the full frame: tick number, canvas size, bodies and sparks.
#[wasm_bindgen]
pub fn world_frame(world_id: u32) -> Result<JsValue, JsError> {
    with_world(world_id, |world| to_js(&world.frame()))
}

/// Get body count.
#[wasm_bindgen]
pub fn world_body_count(world_id: u32) -> Result<usize, JsError> {
    with_world(world_id, |world| Ok(world.body_count()))
}

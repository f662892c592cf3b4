//! Elastic collisions with a moving pointer
//!
//! Six bodies bounce around an 800x600 canvas while the pointer sweeps a
//! circle through the middle, flinging away anything it touches. Sparks are
//! enabled so every contact throws a burst.
//!
//! Run with: cargo run --package ballpit --example elastic_demo

use std::f64::consts::TAU;

use ballpit::config::SimulationConfig;
use ballpit::world::SimulationWorld;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ballpit Elastic Demo\n");
    println!("{}", "=".repeat(60));

    let mut world = SimulationWorld::new(SimulationConfig::with_sparks(), 800.0, 600.0, 42)?;

    let energy_start = world.kinetic_energy();
    println!("\nBodies: {}", world.body_count());
    println!("Initial kinetic energy: {:.3}", energy_start);

    let total_ticks = 1_200;
    let mut contacts = 0;
    let mut wall_hits = 0;
    let mut pointer_hits = 0;
    let mut peak_sparks = 0;

    for tick in 0..total_ticks {
        // Pointer circles the center once every 5 seconds
        let angle = TAU * tick as f64 / 300.0;
        world.set_pointer(400.0 + 150.0 * angle.cos(), 300.0 + 150.0 * angle.sin());

        world.tick();
        let stats = world.last_stats();
        contacts += stats.contacts;
        wall_hits += stats.wall_hits;
        pointer_hits += stats.pointer_hits;
        peak_sparks = peak_sparks.max(world.sparks().len());

        if tick % 300 == 0 {
            let frame = world.frame();
            println!(
                "tick {:5}: {} bodies, {} sparks, energy={:.3}",
                frame.tick,
                frame.bodies.len(),
                frame.sparks.len(),
                world.kinetic_energy()
            );
        }
    }
    world.clear_pointer();

    println!("\n{}", "=".repeat(60));
    println!("Final statistics:");
    println!("  Contacts: {}", contacts);
    println!("  Wall hits: {}", wall_hits);
    println!("  Pointer hits: {}", pointer_hits);
    println!("  Peak sparks: {}", peak_sparks);
    println!(
        "  Kinetic energy: {:.3} -> {:.3}",
        energy_start,
        world.kinetic_energy()
    );

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
    Ok(())
}

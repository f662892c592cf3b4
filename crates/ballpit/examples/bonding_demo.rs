//! Bonding policy example
//!
//! Ten large bodies start at the canvas center and bounce apart. Any two that
//! drift within the bond threshold of each other without touching merge into
//! one red body carrying both radii.
//!
//! Run with: cargo run --package ballpit --example bonding_demo

use ballpit::config::SimulationConfig;
use ballpit::world::SimulationWorld;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Ballpit Bonding Demo\n");
    println!("{}", "=".repeat(60));

    let config = SimulationConfig::bonding();
    let mut world = SimulationWorld::new(config, 1280.0, 720.0, 7)?;

    println!("\nInitial bodies: {}", world.body_count());
    for body in world.bodies() {
        println!(
            "  Body {:>2}: r={:5.1} px, v=({:+.2}, {:+.2}) px/tick, color={}",
            body.id.0,
            body.radius,
            body.velocity.x,
            body.velocity.y,
            body.color.as_str()
        );
    }

    println!("\nBond threshold: {} px", world.config().bond_threshold);
    println!("\n{}", "=".repeat(60));
    println!("Starting simulation...\n");

    let total_ticks = 3_600;
    let mut total_merges = 0;
    let mut total_bounces = 0;

    for _ in 0..total_ticks {
        let stats = world.step(1.0 / 60.0);
        total_bounces += stats.bounces;

        if stats.merges > 0 {
            total_merges += stats.merges;
            println!(
                "tick {:5}: {} merge(s), {} bodies left",
                world.tick_count(),
                stats.merges,
                world.body_count()
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Simulation complete!\n");

    println!("Final statistics:");
    println!("  Ticks: {}", world.tick_count());
    println!("  Bodies: {}", world.body_count());
    println!("  Merges: {}", total_merges);
    println!("  Bounces: {}", total_bounces);

    let momentum = world.total_momentum();
    println!("  Total momentum: ({:.3}, {:.3})", momentum.x, momentum.y);

    println!("\nFinal bodies:");
    for body in world.bodies() {
        println!(
            "  Body {:>2}: r={:5.1} px, pos=({:6.1}, {:6.1}), color={}",
            body.id.0,
            body.radius,
            body.position.x,
            body.position.y,
            body.color.as_str()
        );
    }

    println!("\n{}", "=".repeat(60));
    println!("Demo complete!");
    Ok(())
}

//! corridor — smallest driver for the rust_crowd steering framework.
//!
//! Marches 8 agents from the west edge of a 20×20 plane to goals on the
//! east edge, steering off 4 000 scattered markers.  Stands in for the
//! render loop a real embedding would provide: it ticks the simulation,
//! prints periodic progress, and dumps a final position table.

use std::time::Instant;

use anyhow::Result;

use crowd_core::{CrowdConfig, Tick, Vec2};
use crowd_sim::{CrowdObserver, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE:    u32   = 20;
const MARKER_COUNT: usize = 4_000;
const SEED:         u64   = 42;
const AGENT_COUNT:  usize = 8;
const TICK_BUDGET:  u64   = 5_000;

// ── Progress observer ─────────────────────────────────────────────────────────

struct ProgressPrinter {
    interval: u64,
}

impl CrowdObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, moving: usize) {
        if (tick.0 + 1) % self.interval == 0 {
            println!("  {tick}: {moving} agents still moving");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== corridor — rust_crowd marker steering ===");
    println!("Plane: {GRID_SIZE}×{GRID_SIZE}  |  Markers: {MARKER_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Start/goal pairs: west edge → east edge, evenly spaced rows.
    let starts: Vec<Vec2> = (0..AGENT_COUNT)
        .map(|i| Vec2::new(0.5, 2.0 + 2.0 * i as f32))
        .collect();
    let goals: Vec<Vec2> = (0..AGENT_COUNT)
        .map(|i| Vec2::new(19.0, 2.0 + 2.0 * i as f32))
        .collect();

    // 2. Build the simulation (scatters the marker field).
    let config = CrowdConfig::new(GRID_SIZE, MARKER_COUNT, SEED);
    let mut sim = SimBuilder::new(config).agents(starts, goals).build()?;
    println!("Scattered {} markers, attached {} agents", sim.markers().len(), AGENT_COUNT);
    println!();

    // 3. Run until everyone arrives or the budget runs out.
    let t0 = Instant::now();
    let mut obs = ProgressPrinter { interval: 500 };
    let stopped = sim.run_until_arrived(TICK_BUDGET, &mut obs);
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Stopped at {stopped} after {:.3} s — {}/{} arrived",
        elapsed.as_secs_f64(),
        sim.arrived_count(),
        AGENT_COUNT
    );
    println!();

    // 4. Final agent table.
    println!("{:<8} {:<16} {:<8}", "Agent", "Position", "Done");
    println!("{}", "-".repeat(34));
    for (i, snap) in sim.agent_positions().iter().enumerate() {
        println!(
            "{:<8} {:<16} {:<8}",
            i,
            snap.position.to_string(),
            if snap.done { "yes" } else { "no" },
        );
    }

    Ok(())
}

//! `crowd-sim` — the crowd controller and tick loop.
//!
//! # Tick protocol
//!
//! ```text
//! for each tick:
//!   ① Snapshot  — deep-copy the canonical marker grid.
//!   ② Vacate    — clear the snapshot cell under every agent's floored
//!                 position (done agents included) before any claiming.
//!   ③ Step      — each not-done agent, in sequence order, claims nearby
//!                 markers from the shared snapshot, steers, and moves at
//!                 most max_speed.  Earlier agents have claim priority.
//!   ④ Clamp     — every agent's position is clamped per axis into
//!                 [0, grid_size): below 0 → 0, at or above grid_size →
//!                 grid_size − 1.
//! ```
//!
//! Ticks never fail; malformed configuration is rejected by
//! [`SimBuilder::build`] instead.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use crowd_core::{CrowdConfig, Vec2};
//! use crowd_sim::{NoopObserver, SimBuilder};
//!
//! let config = CrowdConfig::new(20, 4_000, 42);
//! let mut sim = SimBuilder::new(config)
//!     .agents(starts, goals)
//!     .build()?;
//! sim.run_ticks(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CrowdObserver, NoopObserver};
pub use sim::{AgentSnapshot, Simulation};

//! `crowd-agent` — agent state and the per-tick steering step.
//!
//! # Steering model
//!
//! Each tick, a not-yet-arrived agent:
//!
//! 1. **Claims** every still-available marker strictly within its
//!    perception radius, removing them from the shared [`GridSnapshot`]
//!    so later agents cannot reuse them this tick.
//! 2. **Weights** each claimed marker by `dot(goal − pos, marker − pos)` —
//!    markers lying toward the goal pull positively, markers behind push
//!    negatively or contribute nothing.
//! 3. Accumulates a **motion vector** `Σ wᵢ · (markerᵢ − pos)`.
//! 4. **Displaces** along the normalized motion vector, with magnitude
//!    capped at `max_speed`; a zero motion vector means no movement.
//! 5. Marks itself **done** once the goal is closer than the arrival
//!    threshold.  Done is permanent.
//!
//! [`GridSnapshot`]: crowd_field::GridSnapshot

pub mod agent;

#[cfg(test)]
mod tests;

pub use agent::{ARRIVAL_RADIUS, Agent, DEFAULT_MAX_SPEED, DEFAULT_PERCEPTION_RADIUS};

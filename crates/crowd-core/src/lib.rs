//! `crowd-core` — foundational types for the `rust_crowd` steering framework.
//!
//! This crate is a dependency of every other `crowd-*` crate.  It
//! intentionally has no `crowd-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `AgentId`, `MarkerId`                             |
//! | [`vec2`]    | `Vec2` ground-plane vector arithmetic             |
//! | [`tick`]    | `Tick` simulation step counter                    |
//! | [`rng`]     | `SimRng` (deterministic scatter RNG)              |
//! | [`config`]  | `CrowdConfig`                                     |
//! | [`error`]   | `CrowdError`, `CrowdResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod tick;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CrowdConfig;
pub use error::{CrowdError, CrowdResult};
pub use ids::{AgentId, MarkerId};
pub use rng::SimRng;
pub use tick::Tick;
pub use vec2::Vec2;

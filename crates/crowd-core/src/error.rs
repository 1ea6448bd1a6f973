//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! higher-level errors via `From` impls or surface them directly.  The
//! error surface is small: the core performs no I/O, and degenerate
//! per-tick states (no claimed markers, zero motion) are ordinary branches,
//! not errors.

use thiserror::Error;

/// The top-level error type for `crowd-core`.
#[derive(Debug, Error)]
pub enum CrowdError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `crowd-core` operations.
pub type CrowdResult<T> = Result<T, CrowdError>;

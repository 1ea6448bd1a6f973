//! Top-level simulation configuration.

use crate::{CrowdError, CrowdResult};

/// Configuration for one crowd run.
///
/// The ground plane spans `[0, grid_size)` in both axes; one grid cell is
/// one square unit.  Marker count is unsigned by construction, so the
/// "negative marker count" misconfiguration is unrepresentable — zero
/// markers is valid (agents simply never move).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrowdConfig {
    /// Side length of the square plane in grid units.  Must be positive.
    pub grid_size: u32,

    /// Number of markers to scatter at construction time.
    pub marker_count: usize,

    /// Master RNG seed for the scatter.  The same seed always produces the
    /// same marker layout (and therefore the same run).
    pub seed: u64,
}

impl CrowdConfig {
    pub fn new(grid_size: u32, marker_count: usize, seed: u64) -> Self {
        Self { grid_size, marker_count, seed }
    }

    /// Fail fast on out-of-contract values rather than silently clamping.
    pub fn validate(&self) -> CrowdResult<()> {
        if self.grid_size == 0 {
            return Err(CrowdError::Config("grid_size must be positive".into()));
        }
        Ok(())
    }
}

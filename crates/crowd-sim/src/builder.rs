//! Fluent builder for constructing a [`Simulation`].

use crowd_agent::Agent;
use crowd_core::{CrowdConfig, SimRng, Tick, Vec2};
use crowd_field::MarkerField;

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`CrowdConfig`] — grid size, marker count, scatter seed.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.agents(starts, goals)`| No agents (attach before ticking to see motion) |
/// | `.field(f)`             | Fresh scatter from `SimRng::new(config.seed)` |
/// | `.perception_radius(r)` | 2.0 grid units                               |
/// | `.max_speed(s)`         | 0.05 grid units per tick                     |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(CrowdConfig::new(20, 4_000, 42))
///     .agents(starts, goals)
///     .build()?;
/// sim.run_ticks(100, &mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:            CrowdConfig,
    starts:            Vec<Vec2>,
    goals:             Vec<Vec2>,
    field:             Option<MarkerField>,
    perception_radius: Option<f32>,
    max_speed:         Option<f32>,
}

impl SimBuilder {
    pub fn new(config: CrowdConfig) -> Self {
        Self {
            config,
            starts:            Vec::new(),
            goals:             Vec::new(),
            field:             None,
            perception_radius: None,
            max_speed:         None,
        }
    }

    /// Supply paired start and goal points; one agent is created per pair
    /// and list order becomes claim-priority order within each tick.
    ///
    /// The lists must be the same length — validated at [`build`](Self::build).
    pub fn agents(mut self, starts: Vec<Vec2>, goals: Vec<Vec2>) -> Self {
        self.starts = starts;
        self.goals = goals;
        self
    }

    /// Supply a pre-built marker field (explicit layouts, shared scatters).
    ///
    /// Its grid size must match `config.grid_size`.  If not called, a fresh
    /// field is scattered from the config's seed and marker count.
    pub fn field(mut self, field: MarkerField) -> Self {
        self.field = Some(field);
        self
    }

    /// Override every agent's perception radius (grid units, must be positive).
    pub fn perception_radius(mut self, radius: f32) -> Self {
        self.perception_radius = Some(radius);
        self
    }

    /// Override every agent's per-tick speed cap (grid units, must be positive).
    pub fn max_speed(mut self, speed: f32) -> Self {
        self.max_speed = Some(speed);
        self
    }

    /// Validate inputs, scatter the field if none was supplied, and return
    /// a ready-to-tick [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;

        if self.starts.len() != self.goals.len() {
            return Err(SimError::StartGoalMismatch {
                starts: self.starts.len(),
                goals:  self.goals.len(),
            });
        }

        if let Some(r) = self.perception_radius {
            if r <= 0.0 {
                return Err(SimError::Config(format!(
                    "perception_radius must be positive, got {r}"
                )));
            }
        }
        if let Some(s) = self.max_speed {
            if s <= 0.0 {
                return Err(SimError::Config(format!("max_speed must be positive, got {s}")));
            }
        }

        // ── Resolve the marker field ──────────────────────────────────────
        let field = match self.field {
            Some(f) => {
                if f.grid_size() != self.config.grid_size {
                    return Err(SimError::Config(format!(
                        "field grid size {} does not match config grid size {}",
                        f.grid_size(),
                        self.config.grid_size
                    )));
                }
                f
            }
            None => {
                let mut rng = SimRng::new(self.config.seed);
                MarkerField::scatter(self.config.grid_size, self.config.marker_count, &mut rng)?
            }
        };

        // ── Create agents in claim-priority order ─────────────────────────
        let agents = self
            .starts
            .into_iter()
            .zip(self.goals)
            .map(|(start, goal)| {
                let mut agent = Agent::new(start, goal);
                if let Some(r) = self.perception_radius {
                    agent.perception_radius = r;
                }
                if let Some(s) = self.max_speed {
                    agent.max_speed = s;
                }
                agent
            })
            .collect();

        Ok(Simulation {
            config:       self.config,
            field,
            agents,
            current_tick: Tick::ZERO,
        })
    }
}

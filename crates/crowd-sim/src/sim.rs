//! The `Simulation` struct and its tick loop.

use crowd_agent::Agent;
use crowd_core::{CrowdConfig, Tick, Vec2};
use crowd_field::MarkerField;

use crate::{CrowdObserver, SimError, SimResult};

/// Per-agent view returned by [`Simulation::agent_positions`] for rendering
/// and queries.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentSnapshot {
    pub position: Vec2,
    pub done:     bool,
}

/// The crowd controller.
///
/// Owns the marker field and the agents, and advances them one discrete
/// step at a time.  Agent order is significant: it is the claim-priority
/// order within a tick.  Fields are `pub` for direct inspection, but only
/// [`tick`](Simulation::tick) should mutate them during a run.
///
/// Create via [`SimBuilder`][crate::SimBuilder]; ticks are driven by an
/// external caller (typically a render loop) at whatever cadence it likes.
pub struct Simulation {
    /// Grid size, marker count, and scatter seed for this run.
    pub config: CrowdConfig,

    /// Canonical marker storage.  Never mutated after construction; each
    /// tick works on a disposable snapshot of its grid.
    pub field: MarkerField,

    /// All agents, in claim-priority order.
    pub agents: Vec<Agent>,

    /// The tick about to be processed (starts at zero).
    pub current_tick: Tick,
}

impl Simulation {
    /// Attach one agent per start/goal pair, appended after any existing
    /// agents in claim-priority order.
    ///
    /// Attached agents use the default perception radius and speed cap;
    /// use the builder's overrides if the whole crowd needs different ones.
    pub fn attach_agents(&mut self, starts: Vec<Vec2>, goals: Vec<Vec2>) -> SimResult<()> {
        if starts.len() != goals.len() {
            return Err(SimError::StartGoalMismatch {
                starts: starts.len(),
                goals:  goals.len(),
            });
        }
        self.agents
            .extend(starts.into_iter().zip(goals).map(|(s, g)| Agent::new(s, g)));
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Advance the whole crowd by one discrete step.
    ///
    /// Never fails: degenerate states (no markers in range, zero motion)
    /// leave the affected agents in place and the tick completes normally.
    pub fn tick(&mut self) {
        // ── Phase 1: per-tick snapshot of the marker grid ─────────────────
        let mut snapshot = self.field.snapshot();
        let grid = self.config.grid_size as i64;

        // ── Phase 2: vacate every agent-occupied cell ─────────────────────
        //
        // Applies to all agents, done or not, before any claiming: markers
        // in a cell an agent currently stands in are unavailable to the
        // entire crowd this tick (including that agent itself).
        for agent in &self.agents {
            let (cx, cz) = agent.occupied_cell();
            if cx >= 0 && cz >= 0 && cx < grid && cz < grid {
                snapshot.clear_cell(cx as u32, cz as u32);
            }
        }

        // ── Phase 3: step agents in claim-priority order ──────────────────
        let markers = self.field.markers();
        for agent in &mut self.agents {
            agent.step(&mut snapshot, markers);
        }

        // ── Phase 4: clamp to the plane ───────────────────────────────────
        //
        // Hard boundary, not a reflection or wrap: below 0 pins to 0, at or
        // above grid_size pins to grid_size − 1.
        let span = self.config.grid_size as f32;
        let pin = (self.config.grid_size - 1) as f32;
        for agent in &mut self.agents {
            let p = &mut agent.position;
            if p.x < 0.0 {
                p.x = 0.0;
            } else if p.x >= span {
                p.x = pin;
            }
            if p.z < 0.0 {
                p.z = 0.0;
            } else if p.z >= span {
                p.z = pin;
            }
        }

        self.current_tick = self.current_tick + 1;
    }

    // ── Driving loops ─────────────────────────────────────────────────────

    /// Run exactly `n` ticks, invoking observer hooks at each boundary.
    pub fn run_ticks<O: CrowdObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.tick();
            observer.on_tick_end(now, self.moving_count());
        }
    }

    /// Tick until every agent has arrived or `max_ticks` have elapsed,
    /// whichever comes first.  Returns the tick at which driving stopped.
    pub fn run_until_arrived<O: CrowdObserver>(
        &mut self,
        max_ticks: u64,
        observer:  &mut O,
    ) -> Tick {
        let deadline = self.current_tick + max_ticks;
        while !self.all_arrived() && self.current_tick < deadline {
            let now = self.current_tick;
            observer.on_tick_start(now);
            self.tick();
            observer.on_tick_end(now, self.moving_count());
        }
        observer.on_sim_end(self.current_tick);
        self.current_tick
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The static list of all marker positions (for one-time render setup).
    #[inline]
    pub fn markers(&self) -> &[Vec2] {
        self.field.markers()
    }

    /// Current position and arrival flag of every agent, in claim-priority
    /// order (for per-frame rendering).
    pub fn agent_positions(&self) -> Vec<AgentSnapshot> {
        self.agents
            .iter()
            .map(|a| AgentSnapshot { position: a.position, done: a.done })
            .collect()
    }

    /// Number of agents that have reached their goal.
    pub fn arrived_count(&self) -> usize {
        self.agents.iter().filter(|a| a.done).count()
    }

    /// Number of agents still heading for their goal.
    #[inline]
    pub fn moving_count(&self) -> usize {
        self.agents.len() - self.arrived_count()
    }

    /// `true` once every agent is done.  Trivially true with no agents.
    pub fn all_arrived(&self) -> bool {
        self.agents.iter().all(|a| a.done)
    }
}

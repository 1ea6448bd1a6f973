//! Simulation observer trait for progress reporting.

use crowd_core::Tick;

/// Callbacks invoked by [`Simulation::run_ticks`][crate::Simulation::run_ticks]
/// and [`run_until_arrived`][crate::Simulation::run_until_arrived] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Rendering drivers typically implement
/// `on_tick_end` to pull fresh positions via
/// [`agent_positions`][crate::Simulation::agent_positions].
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl CrowdObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, moving: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {moving} agents still moving");
///         }
///     }
/// }
/// ```
pub trait CrowdObserver {
    /// Called at the very start of each tick, before the snapshot is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `moving` is the number of agents that have not yet reached their goal.
    fn on_tick_end(&mut self, _tick: Tick, _moving: usize) {}

    /// Called once when a driving loop finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`CrowdObserver`] that does nothing.  Use when you need to drive the
/// simulation but don't want progress callbacks.
pub struct NoopObserver;

impl CrowdObserver for NoopObserver {}

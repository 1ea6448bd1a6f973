//! The `Agent` struct and its single-step state transition.

use crowd_core::{MarkerId, Vec2};
use crowd_field::GridSnapshot;

/// Distance within which an agent considers a marker usable, in grid units.
pub const DEFAULT_PERCEPTION_RADIUS: f32 = 2.0;

/// Displacement cap per tick, in grid units.
pub const DEFAULT_MAX_SPEED: f32 = 0.05;

/// An agent is done once its goal is strictly closer than this, in grid units.
pub const ARRIVAL_RADIUS: f32 = 0.2;

/// One crowd member: a position, a fixed goal, and per-tick claim scratch.
///
/// Fields are `pub` for direct inspection by drivers and tests; the
/// simulation owns the agents and is the only writer during a run.
/// `claimed` and `weights` are parallel arrays rebuilt every step, kept in
/// claim order.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Current position.  Owned exclusively by this agent; mutated only by
    /// [`step`](Agent::step) and the simulation's boundary clamp.
    pub position: Vec2,

    /// Navigation target, fixed at creation.
    pub goal: Vec2,

    /// Perception radius in grid units (both the cell scan reach and the
    /// Euclidean claim threshold).
    pub perception_radius: f32,

    /// Per-tick displacement cap in grid units.
    pub max_speed: f32,

    /// `true` once the goal has been reached.  Monotonic: never resets, and
    /// a done agent's position is frozen.
    pub done: bool,

    /// Markers claimed this tick, in claim order.
    pub claimed: Vec<MarkerId>,

    /// Weight per claimed marker, parallel to `claimed`.
    pub weights: Vec<f32>,
}

impl Agent {
    /// Create an agent at `start` heading for `goal`, with default
    /// perception radius and speed cap.
    pub fn new(start: Vec2, goal: Vec2) -> Self {
        Self {
            position:          start,
            goal,
            perception_radius: DEFAULT_PERCEPTION_RADIUS,
            max_speed:         DEFAULT_MAX_SPEED,
            done:              false,
            claimed:           Vec::new(),
            weights:           Vec::new(),
        }
    }

    /// The grid cell this agent currently occupies (floored position).
    ///
    /// Signed: positions are only guaranteed in-bounds after the end-of-tick
    /// clamp, so the cell may be transiently outside the grid.
    #[inline]
    pub fn occupied_cell(&self) -> (i64, i64) {
        (self.position.x.floor() as i64, self.position.z.floor() as i64)
    }

    /// Advance this agent by one tick against the shared snapshot.
    ///
    /// No-op when `done`.  `markers` is the field's marker arena.
    pub fn step(&mut self, snapshot: &mut GridSnapshot, markers: &[Vec2]) {
        if self.done {
            return;
        }
        self.claim_markers(snapshot, markers);
        self.compute_weights(markers);
        let motion = self.compute_motion(markers);
        self.displace(motion);
        if self.position.distance(self.goal) < ARRIVAL_RADIUS {
            self.done = true;
        }
    }

    // ── Step phases ───────────────────────────────────────────────────────

    /// Scan the cell square `[-r, +r]²` around the occupied cell (bound
    /// `r = ceil(perception_radius)`, covering the whole perception circle)
    /// and claim every available marker strictly within `perception_radius`.
    ///
    /// Claimed markers are removed from `snapshot`, so claiming is
    /// first-come in agent sequence order: a marker claimed here is
    /// invisible to every later scan this tick.
    pub fn claim_markers(&mut self, snapshot: &mut GridSnapshot, markers: &[Vec2]) {
        self.claimed.clear();

        let grid = snapshot.grid_size() as i64;
        let reach = self.perception_radius.ceil() as i64;
        let (base_x, base_z) = self.occupied_cell();

        for i in -reach..=reach {
            for j in -reach..=reach {
                let (cx, cz) = (base_x + i, base_z + j);
                if cx < 0 || cz < 0 || cx >= grid || cz >= grid {
                    continue;
                }
                self.claimed.extend(snapshot.claim_from_cell(
                    cx as u32,
                    cz as u32,
                    self.position,
                    self.perception_radius,
                    markers,
                ));
            }
        }
    }

    /// Weight each claimed marker by `dot(goal − pos, marker − pos)`.
    ///
    /// Stored weights are the raw dot products; no renormalization is
    /// applied, so a marker's pull scales with both its alignment and its
    /// distance.
    pub fn compute_weights(&mut self, markers: &[Vec2]) {
        self.weights.clear();
        let to_goal = self.goal - self.position;
        for &id in &self.claimed {
            self.weights.push(to_goal.dot(markers[id.index()] - self.position));
        }
    }

    /// Accumulate `Σ wᵢ · (markerᵢ − pos)` over the claimed markers.
    ///
    /// Zero claimed markers yields the zero vector — a valid outcome, not
    /// an error; the agent simply will not move this tick.
    pub fn compute_motion(&self, markers: &[Vec2]) -> Vec2 {
        let mut motion = Vec2::ZERO;
        for (&id, &w) in self.claimed.iter().zip(&self.weights) {
            motion += (markers[id.index()] - self.position) * w;
        }
        motion
    }

    /// Move along `motion` with magnitude capped at `max_speed`.
    ///
    /// A zero-length motion vector produces no displacement (the direction
    /// is undefined, so the agent stays put rather than going NaN).
    pub fn displace(&mut self, motion: Vec2) {
        let Some(direction) = motion.try_normalize() else {
            return;
        };
        let speed = motion.length().min(self.max_speed);
        self.position += direction * speed;
    }
}

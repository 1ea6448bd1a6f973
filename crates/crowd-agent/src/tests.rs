//! Unit tests for the agent steering step.

use crowd_core::{MarkerId, Vec2};
use crowd_field::MarkerField;

use crate::{ARRIVAL_RADIUS, Agent, DEFAULT_MAX_SPEED, DEFAULT_PERCEPTION_RADIUS};

fn field(grid_size: u32, positions: Vec<Vec2>) -> MarkerField {
    MarkerField::from_positions(grid_size, positions).unwrap()
}

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn defaults() {
        let a = Agent::new(Vec2::new(1.0, 1.0), Vec2::new(5.0, 5.0));
        assert_eq!(a.perception_radius, DEFAULT_PERCEPTION_RADIUS);
        assert_eq!(a.max_speed, DEFAULT_MAX_SPEED);
        assert!(!a.done);
        assert!(a.claimed.is_empty());
    }

    #[test]
    fn occupied_cell_floors_position() {
        let a = Agent::new(Vec2::new(3.7, 0.2), Vec2::ZERO);
        assert_eq!(a.occupied_cell(), (3, 0));
        let b = Agent::new(Vec2::new(-0.3, 1.0), Vec2::ZERO);
        assert_eq!(b.occupied_cell(), (-1, 1));
    }
}

#[cfg(test)]
mod claiming {
    use super::*;

    #[test]
    fn claims_markers_within_radius_only() {
        // Agent at (5, 5), radius 2: one marker at distance 1, one at 3.
        let f = field(10, vec![Vec2::new(6.0, 5.0), Vec2::new(8.0, 5.0)]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));

        a.claim_markers(&mut snap, f.markers());
        assert_eq!(a.claimed, vec![MarkerId(0)]);
    }

    #[test]
    fn scan_near_plane_edge_skips_outside_cells() {
        // Reach-2 scan from cell (0, 0) touches cells down to (-2, -2);
        // those must be skipped, not indexed.
        let f = field(10, vec![Vec2::new(0.8, 0.8)]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(0.5, 0.5), Vec2::new(9.0, 9.0));

        a.claim_markers(&mut snap, f.markers());
        assert_eq!(a.claimed, vec![MarkerId(0)]);
    }

    #[test]
    fn earlier_claim_wins() {
        let f = field(10, vec![Vec2::new(5.5, 5.5)]);
        let mut snap = f.snapshot();
        let mut first = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 9.0));
        let mut second = Agent::new(Vec2::new(6.0, 6.0), Vec2::new(9.0, 9.0));

        first.claim_markers(&mut snap, f.markers());
        second.claim_markers(&mut snap, f.markers());

        assert_eq!(first.claimed, vec![MarkerId(0)]);
        assert!(second.claimed.is_empty());
    }
}

#[cfg(test)]
mod weights_and_motion {
    use super::*;

    #[test]
    fn marker_toward_goal_weighs_positive() {
        let f = field(10, vec![Vec2::new(6.0, 5.0), Vec2::new(4.0, 5.0)]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));

        a.claim_markers(&mut snap, f.markers());
        a.compute_weights(f.markers());

        assert_eq!(a.claimed.len(), 2);
        assert_eq!(a.weights.len(), 2);
        let ahead = a.claimed.iter().position(|&m| m == MarkerId(0)).unwrap();
        let behind = a.claimed.iter().position(|&m| m == MarkerId(1)).unwrap();
        assert!(a.weights[ahead] > 0.0, "marker toward goal must pull");
        assert!(a.weights[behind] < 0.0, "marker behind must push");
    }

    #[test]
    fn motion_is_zero_without_claims() {
        let f = field(10, vec![]);
        let a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));
        assert_eq!(a.compute_motion(f.markers()), Vec2::ZERO);
    }

    #[test]
    fn single_marker_motion_points_at_it() {
        let f = field(10, vec![Vec2::new(6.0, 5.0)]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));

        a.claim_markers(&mut snap, f.markers());
        a.compute_weights(f.markers());
        let motion = a.compute_motion(f.markers());

        assert!(motion.x > 0.0);
        assert_eq!(motion.z, 0.0);
    }
}

#[cfg(test)]
mod displacement {
    use super::*;

    #[test]
    fn zero_motion_means_no_movement() {
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));
        a.displace(Vec2::ZERO);
        assert_eq!(a.position, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn magnitude_capped_at_max_speed() {
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));
        let before = a.position;
        a.displace(Vec2::new(3.0, 4.0)); // |motion| = 5 >> max_speed
        let moved = before.distance(a.position);
        assert!((moved - a.max_speed).abs() < 1e-6, "moved {moved}");
    }

    #[test]
    fn small_motion_used_as_is() {
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));
        let before = a.position;
        a.displace(Vec2::new(0.01, 0.0)); // |motion| < max_speed
        let moved = before.distance(a.position);
        assert!((moved - 0.01).abs() < 1e-6);
    }

    #[test]
    fn step_displacement_bounded_with_claims() {
        // Dense markers ahead of the agent make |motion| large; the step
        // must still move at most max_speed.
        let markers: Vec<Vec2> = (0..10)
            .map(|i| Vec2::new(5.5 + 0.1 * i as f32, 5.0))
            .collect();
        let f = field(10, markers);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));

        let before = a.position;
        a.step(&mut snap, f.markers());
        assert!(!a.claimed.is_empty());
        assert!(before.distance(a.position) <= a.max_speed + 1e-6);
    }
}

#[cfg(test)]
mod arrival {
    use super::*;

    #[test]
    fn done_from_distance_threshold_alone() {
        // No markers anywhere: the agent cannot move, but starting within
        // the arrival radius it must still flag done on its first step.
        let f = field(10, vec![]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.1));

        a.step(&mut snap, f.markers());
        assert!(a.done, "0.1 < {ARRIVAL_RADIUS} must flag arrival");
        assert_eq!(a.position, Vec2::new(0.0, 0.0), "no markers, no movement");
    }

    #[test]
    fn just_outside_threshold_not_done() {
        let f = field(10, vec![]);
        let mut snap = f.snapshot();
        let mut a = Agent::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.25));

        a.step(&mut snap, f.markers());
        assert!(!a.done, "0.25 away is outside the 0.2 arrival radius");
    }

    #[test]
    fn done_agent_never_steps_again() {
        let f = field(10, vec![Vec2::new(5.5, 5.0)]);
        let mut a = Agent::new(Vec2::new(5.0, 5.0), Vec2::new(9.0, 5.0));
        a.done = true;

        let mut snap = f.snapshot();
        a.step(&mut snap, f.markers());

        assert_eq!(a.position, Vec2::new(5.0, 5.0));
        assert!(a.claimed.is_empty(), "done agents must not claim");
        assert_eq!(snap.available(), 1, "marker left untouched");
    }
}

//! Unit tests for crowd-core primitives.

#[cfg(test)]
mod vec2 {
    use crate::Vec2;

    #[test]
    fn arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn dot_sign_tracks_alignment() {
        let toward = Vec2::new(1.0, 0.0);
        assert!(toward.dot(Vec2::new(0.9, 0.1)) > 0.0);
        assert!(toward.dot(Vec2::new(-0.5, 0.0)) < 0.0);
        assert_eq!(toward.dot(Vec2::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn length_and_distance() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
        assert!((Vec2::ZERO.distance(v) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec2::new(3.0, 4.0).try_normalize().unwrap();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn normalize_zero_vector_is_none() {
        assert!(Vec2::ZERO.try_normalize().is_none());
    }
}

#[cfg(test)]
mod ids {
    use crate::{AgentId, MarkerId};

    #[test]
    fn index_roundtrip() {
        let id = MarkerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(MarkerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
        assert!(MarkerId(100) > MarkerId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(MarkerId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod tick {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let a: u64 = root.child(0).random();
        let b: u64 = root.child(1).random();
        assert_ne!(a, b, "child streams should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f32..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::CrowdConfig;

    #[test]
    fn valid_config_passes() {
        assert!(CrowdConfig::new(10, 100, 42).validate().is_ok());
    }

    #[test]
    fn zero_grid_size_rejected() {
        let err = CrowdConfig::new(0, 100, 42).validate().unwrap_err();
        assert!(err.to_string().contains("grid_size"));
    }

    #[test]
    fn zero_markers_allowed() {
        assert!(CrowdConfig::new(10, 0, 42).validate().is_ok());
    }
}

//! Enemy spawn patterns
//!
//! Enemies enter just outside one edge of the scene and drift linearly to roughly the
//! opposite side, with lateral jitter on both ends.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::SceneBounds;
use super::enemy::Trajectory;
use crate::consts::*;

/// Edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Top to bottom
    Top,
    /// Bottom to top
    Bottom,
    /// Left to right
    Left,
    /// Right to left
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Uniform sample in [0, span); zero for an empty span
#[inline]
fn jitter<R: Rng>(rng: &mut R, span: f32) -> f32 {
    if span > 0.0 {
        rng.random_range(0.0..span)
    } else {
        0.0
    }
}

/// Build a trajectory entering from `edge`
pub fn trajectory_from<R: Rng>(rng: &mut R, bounds: &SceneBounds, edge: Edge) -> Trajectory {
    let (w, h) = (bounds.width, bounds.height);

    let (start, end) = match edge {
        Edge::Top => (
            Vec2::new(w / 2.0 - jitter(rng, w), h * 0.55 + jitter(rng, h / 9.0)),
            Vec2::new(w / 2.0 - jitter(rng, w), h * -3.0 / 5.0),
        ),
        Edge::Bottom => (
            Vec2::new(w / 2.0 - jitter(rng, w), h * -0.55 - jitter(rng, h / 9.0)),
            Vec2::new(w / 2.0 - jitter(rng, w), h * 3.0 / 5.0),
        ),
        Edge::Left => (
            Vec2::new(w * -0.55 - jitter(rng, w / 9.0), h / 2.0 - jitter(rng, h)),
            Vec2::new(w / 2.0 + jitter(rng, w), h / 2.0 - jitter(rng, h)),
        ),
        Edge::Right => (
            Vec2::new(w * 0.55 + jitter(rng, w / 9.0), h / 2.0 - jitter(rng, h)),
            Vec2::new(-w / 2.0 - jitter(rng, w), h / 2.0 - jitter(rng, h)),
        ),
    };

    Trajectory {
        start,
        end,
        travel_secs: rng.random_range(TRAVEL_MIN_SECS..TRAVEL_MAX_SECS),
        linger_secs: rng.random_range(0.0..LINGER_MAX_SECS),
    }
}

/// Visual scale: one of 0.5, 0.6 or 0.7
pub fn random_scale<R: Rng>(rng: &mut R) -> f32 {
    (5 + rng.random_range(0..3u32)) as f32 / 10.0
}

pub fn random_variant<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(0..ENEMY_VARIANTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn bounds() -> SceneBounds {
        SceneBounds::new(900.0, 600.0)
    }

    #[test]
    fn test_every_edge_is_reachable() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Edge::random(&mut rng));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_starts_outside_visible_area() {
        let mut rng = Pcg32::seed_from_u64(11);
        let area = bounds().visible_area();
        for edge in Edge::ALL {
            for _ in 0..50 {
                let t = trajectory_from(&mut rng, &bounds(), edge);
                assert!(!area.contains_point(t.start), "{edge:?} started inside: {:?}", t.start);
            }
        }
    }

    #[test]
    fn test_scale_and_variant_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let s = random_scale(&mut rng);
            assert!((0.5..=0.8).contains(&s));
            assert!(random_variant(&mut rng) < ENEMY_VARIANTS);
        }
    }

    #[test]
    fn test_degenerate_bounds_do_not_panic() {
        let mut rng = Pcg32::seed_from_u64(5);
        let empty = SceneBounds::new(0.0, 0.0);
        for edge in Edge::ALL {
            let t = trajectory_from(&mut rng, &empty, edge);
            assert_eq!(t.start, Vec2::ZERO);
        }
    }

    proptest! {
        #[test]
        fn prop_top_entry_moves_down(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let b = bounds();
            let t = trajectory_from(&mut rng, &b, Edge::Top);
            prop_assert!(t.start.y >= b.height * 0.55);
            prop_assert!(t.start.y < b.height * 0.55 + b.height / 9.0);
            prop_assert!(t.displacement().y < 0.0);
            prop_assert!((TRAVEL_MIN_SECS..TRAVEL_MAX_SECS).contains(&t.travel_secs));
            prop_assert!((0.0..LINGER_MAX_SECS).contains(&t.linger_secs));
        }

        #[test]
        fn prop_side_entries_cross_the_scene(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let b = bounds();
            let left = trajectory_from(&mut rng, &b, Edge::Left);
            prop_assert!(left.start.x <= b.width * -0.55);
            prop_assert!(left.displacement().x > 0.0);
            let right = trajectory_from(&mut rng, &b, Edge::Right);
            prop_assert!(right.start.x >= b.width * 0.55);
            prop_assert!(right.displacement().x < 0.0);
            let bottom = trajectory_from(&mut rng, &b, Edge::Bottom);
            prop_assert!(bottom.start.y <= b.height * -0.55);
            prop_assert!(bottom.displacement().y > 0.0);
        }
    }
}

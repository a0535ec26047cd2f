//! Overlap testing between scene entities
//!
//! Everything in the scene is approximated by an axis-aligned box centred on the
//! entity's position, the same frame a sprite host would report.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box centred on `center` extending `half` in each direction
    pub fn from_center(center: Vec2, half: Vec2) -> Self {
        let half = half.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// True if the boxes share any area or touch along an edge
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Size of the play area; the scene is centred on the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub width: f32,
    pub height: f32,
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            width: crate::consts::DEFAULT_SCENE_WIDTH,
            height: crate::consts::DEFAULT_SCENE_HEIGHT,
        }
    }
}

impl SceneBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// The visible play area as a box
    pub fn visible_area(&self) -> Aabb {
        Aabb::from_center(Vec2::ZERO, Vec2::new(self.width, self.height) * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_and_separation() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(15.0, 0.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(25.0, 0.0), Vec2::splat(4.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(b.intersects(&c));
    }

    #[test]
    fn test_touching_edges_count_as_overlap() {
        let a = Aabb::from_center(Vec2::ZERO, Vec2::splat(5.0));
        let b = Aabb::from_center(Vec2::new(10.0, 0.0), Vec2::splat(5.0));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_visible_area_is_centred() {
        let bounds = SceneBounds::new(200.0, 100.0);
        let area = bounds.visible_area();
        assert_eq!(area.min, Vec2::new(-100.0, -50.0));
        assert_eq!(area.max, Vec2::new(100.0, 50.0));
        assert_eq!(area.center(), Vec2::ZERO);
        assert_eq!(area.size(), Vec2::new(200.0, 100.0));
        assert!(area.contains_point(Vec2::new(99.0, -49.0)));
        assert!(!area.contains_point(Vec2::new(0.0, 51.0)));
    }

    #[test]
    fn test_negative_scene_size_clamped() {
        let bounds = SceneBounds::new(-5.0, 10.0);
        assert_eq!(bounds.width, 0.0);
    }
}

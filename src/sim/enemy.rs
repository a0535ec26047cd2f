//! Enemies and their deterioration state machine

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Stable identity of a live enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Damage stage, ordered and forward-only
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Stage {
    #[default]
    Pristine,
    Worn,
    Damaged,
    /// Terminal
    Destroyed,
}

impl Stage {
    /// The following stage, `None` once destroyed
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Pristine => Some(Stage::Worn),
            Stage::Worn => Some(Stage::Damaged),
            Stage::Damaged => Some(Stage::Destroyed),
            Stage::Destroyed => None,
        }
    }

    /// Texture frame index within a sprite family
    pub fn frame(self) -> u8 {
        self as u8
    }
}

/// Result of a single deterioration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deterioration {
    /// Health decayed without crossing a whole number
    Unchanged,
    /// Moved to a later, non-terminal stage
    Advanced(Stage),
    /// Just entered the terminal stage
    Destroyed,
}

/// Opaque key the texture provider resolves to a sprite frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureKey {
    pub variant: u8,
    pub stage: Stage,
}

/// Straight-line path followed by an enemy: travel, then linger, then expire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub start: Vec2,
    pub end: Vec2,
    /// Seconds spent moving from `start` to `end`
    pub travel_secs: f32,
    /// Seconds spent idle at `end` before expiring
    pub linger_secs: f32,
}

impl Trajectory {
    pub fn displacement(&self) -> Vec2 {
        self.end - self.start
    }

    /// Position `age` seconds after spawning
    pub fn position_at(&self, age: f32) -> Vec2 {
        if self.travel_secs <= 0.0 {
            return self.end;
        }
        let t = (age / self.travel_secs).clamp(0.0, 1.0);
        self.start.lerp(self.end, t)
    }

    /// Total lifetime of the scheduled sequence
    pub fn total_secs(&self) -> f32 {
        self.travel_secs + self.linger_secs
    }
}

/// A live enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    /// Sprite family
    pub variant: u8,
    pub stage: Stage,
    pub health: f32,
    /// Simulation clock at creation (seconds)
    pub birth_time: f64,
    pub scale: f32,
    pub pos: Vec2,
    pub trajectory: Trajectory,
}

impl Enemy {
    pub fn new(id: EnemyId, variant: u8, scale: f32, trajectory: Trajectory, now: f64) -> Self {
        Self {
            id,
            variant,
            stage: Stage::Pristine,
            health: ENEMY_START_HEALTH,
            birth_time: now,
            scale,
            pos: trajectory.start,
            trajectory,
        }
    }

    /// Decay health once, advancing a stage when health drops below 3.0, 2.0 or 1.0
    pub fn deteriorate(&mut self) -> Deterioration {
        let before = self.health;
        let after = before * DETERIORATION_RATE;
        self.health = after;

        // Leaving the starting 4.0 is not a crossing
        if after.ceil() >= before.ceil() {
            return Deterioration::Unchanged;
        }

        match self.stage.next() {
            Some(Stage::Destroyed) => {
                self.stage = Stage::Destroyed;
                Deterioration::Destroyed
            }
            Some(stage) => {
                self.stage = stage;
                Deterioration::Advanced(stage)
            }
            None => Deterioration::Unchanged,
        }
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.birth_time
    }

    /// Move along the trajectory to where it is at `now`
    pub fn advance(&mut self, now: f64) {
        self.pos = self.trajectory.position_at(self.age(now) as f32);
    }

    /// True once travel and linger have both elapsed
    pub fn is_expired(&self, now: f64) -> bool {
        self.age(now) >= self.trajectory.total_secs() as f64
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(ENEMY_HALF_EXTENT * self.scale))
    }

    pub fn texture_key(&self) -> TextureKey {
        TextureKey {
            variant: self.variant,
            stage: self.stage,
        }
    }
}

//! Game state and core simulation types
//!
//! `GameState` is the single simulation context; every operation takes it explicitly.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, SceneBounds};
use super::enemy::{Enemy, EnemyId, Stage, TextureKey};
use super::motion::{Motion, Tween};
use super::spawn::{Edge, random_scale, random_variant, trajectory_from};
use crate::consts::*;
use crate::settings::Settings;
use crate::tuning::Tuning;
use crate::ui::StatusLine;

/// The player's swarm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mob {
    /// Particle birth rate, the player's attack power
    pub birth_rate: f32,
    pub scale: f32,
    pub pos: Vec2,
    pub visible: bool,
    /// Active move toward the last pointer position
    pub motion: Option<Motion>,
}

impl Default for Mob {
    fn default() -> Self {
        Self {
            birth_rate: MOB_START_BIRTH_RATE,
            scale: MOB_START_SCALE,
            pos: Vec2::ZERO,
            visible: true,
            motion: None,
        }
    }
}

impl Mob {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(MOB_HALF_EXTENT * self.scale))
    }

    /// Head toward `target` at constant speed, replacing any current move
    pub fn move_to(&mut self, target: Vec2) {
        let duration = self.pos.distance(target) / MOB_SPEED;
        self.motion = Some(Motion::new(self.pos, target, duration));
    }

    pub fn advance(&mut self, dt: f32) {
        if let Some(motion) = &mut self.motion {
            motion.advance(dt);
            self.pos = motion.position();
            if motion.is_finished() {
                self.motion = None;
            }
        }
    }
}

/// End-of-round overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Overlay {
    pub visible: bool,
    pub scale: Tween,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            visible: false,
            scale: Tween::fixed(0.0),
        }
    }
}

impl Overlay {
    pub fn bounds(&self) -> Aabb {
        let half = Vec2::new(OVERLAY_HALF_WIDTH, OVERLAY_HALF_HEIGHT) * self.scale.value();
        Aabb::from_center(Vec2::ZERO, half)
    }

    /// Hit test for taps
    pub fn contains(&self, point: Vec2) -> bool {
        self.visible && self.scale.value() > 0.0 && self.bounds().contains_point(point)
    }
}

/// Why an enemy left the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Destroyed by contact with the mob
    Killed,
    /// Finished its trajectory and wait
    Expired,
    /// Stayed outside the play area past the grace period
    OffScreen,
    /// Cleared by a restart
    Reset,
}

/// Stroke colour of a spinny effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinnyColor {
    Green,
    Blue,
    Red,
}

/// Events for the rendering and audio collaborators, drained by the host each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned {
        id: EnemyId,
        texture: TextureKey,
        pos: Vec2,
        scale: f32,
    },
    EnemyStageChanged {
        id: EnemyId,
        texture: TextureKey,
    },
    /// Unhide a dying enemy for its last frame
    EnemyRevealed {
        id: EnemyId,
    },
    EnemyRemoved {
        id: EnemyId,
        reason: RemovalReason,
    },
    EnemyKilled {
        id: EnemyId,
        pos: Vec2,
    },
    OverlayAnimated {
        from: f32,
        to: f32,
        duration: f32,
    },
    PlayerDied {
        kills: u32,
    },
    Restarted,
    MusicStarted,
    MusicStopped,
    Spinny {
        pos: Vec2,
        color: SpinnyColor,
    },
}

/// Work scheduled inside the simulation, processed once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimMessage {
    /// An enemy's move-then-wait sequence completed
    Expired(EnemyId),
    /// Replace a departed enemy
    SpawnRequested,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub bounds: SceneBounds,
    pub tuning: Tuning,
    /// Cosmetic pointer trails, read once from settings
    pub spinny_stuff: bool,
    /// Simulation clock (seconds)
    pub clock: f64,
    /// Frame counter
    pub frames: u64,
    pub mob: Mob,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub kills: u32,
    pub player_died: bool,
    pub overlay: Overlay,
    pub status: StatusLine,
    pub(crate) pending: VecDeque<SimMessage>,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game with the initial enemy population already spawned
    pub fn new(seed: u64, bounds: SceneBounds, settings: &Settings, tuning: Tuning) -> Self {
        let mob = Mob::default();
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            tuning,
            spinny_stuff: settings.spinny_stuff,
            clock: 0.0,
            frames: 0,
            status: StatusLine::new(mob.birth_rate, 0),
            mob,
            enemies: Vec::new(),
            kills: 0,
            player_died: false,
            overlay: Overlay::default(),
            pending: VecDeque::new(),
            events: Vec::new(),
            next_id: 1,
        };

        state.seed_population();
        state.events.push(GameEvent::MusicStarted);
        log::info!(
            "New game: seed={} scene={}x{} enemies={}",
            seed,
            bounds.width,
            bounds.height,
            state.enemies.len()
        );

        state
    }

    fn next_enemy_id(&mut self) -> EnemyId {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn `tuning.initial_population` enemies
    pub fn seed_population(&mut self) {
        for _ in 0..self.tuning.initial_population {
            self.spawn_enemy();
        }
    }

    /// Spawn one enemy from a random edge; no-op once the player has died
    pub fn spawn_enemy(&mut self) -> Option<EnemyId> {
        let edge = Edge::random(&mut self.rng);
        self.spawn_enemy_from(edge)
    }

    /// Spawn one enemy entering from `edge`; no-op once the player has died
    pub fn spawn_enemy_from(&mut self, edge: Edge) -> Option<EnemyId> {
        if self.player_died {
            return None;
        }

        let variant = random_variant(&mut self.rng);
        let trajectory = trajectory_from(&mut self.rng, &self.bounds, edge);
        let scale = random_scale(&mut self.rng);
        let id = self.next_enemy_id();
        let enemy = Enemy::new(id, variant, scale, trajectory, self.clock);

        log::debug!(
            "Spawned enemy {} from {:?}: {:?} -> {:?} over {:.1}s",
            id.0,
            edge,
            trajectory.start,
            trajectory.end,
            trajectory.travel_secs
        );

        self.events.push(GameEvent::EnemySpawned {
            id,
            texture: enemy.texture_key(),
            pos: enemy.pos,
            scale,
        });
        self.enemies.push(enemy);
        Some(id)
    }

    /// Remove an enemy by identity; `None` if it is already gone
    pub fn remove_enemy(&mut self, id: EnemyId, reason: RemovalReason) -> Option<Enemy> {
        let index = self.enemies.iter().position(|e| e.id == id)?;
        let enemy = self.enemies.remove(index);
        self.events.push(GameEvent::EnemyRemoved { id, reason });
        Some(enemy)
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Queue a replacement spawn for the end of the tick
    pub fn request_spawn(&mut self) {
        self.pending.push_back(SimMessage::SpawnRequested);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of messages waiting for the next tick
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            clock: self.clock,
            frames: self.frames,
            birth_rate: self.mob.birth_rate,
            mob_pos: self.mob.pos,
            kills: self.kills,
            player_died: self.player_died,
            enemies: self.enemies.len(),
            damaged: self
                .enemies
                .iter()
                .filter(|e| e.stage > Stage::Pristine)
                .count(),
            status: self.status.clone(),
        }
    }
}

/// Serializable summary of a running game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub clock: f64,
    pub frames: u64,
    pub birth_rate: f32,
    pub mob_pos: Vec2,
    pub kills: u32,
    pub player_died: bool,
    pub enemies: usize,
    /// Enemies past the pristine stage
    pub damaged: usize,
    pub status: StatusLine,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(42, SceneBounds::default(), &Settings::default(), Tuning::default())
    }

    #[test]
    fn test_new_game_spawns_initial_population() {
        let state = new_state();
        assert_eq!(state.enemies.len(), 10);
        assert_eq!(state.kills, 0);
        assert!(!state.player_died);
        assert_eq!(state.mob.birth_rate, MOB_START_BIRTH_RATE);
        assert_eq!(state.mob.scale, MOB_START_SCALE);
        let spawned = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemySpawned { .. }))
            .count();
        assert_eq!(spawned, 10);
        assert!(state.events.contains(&GameEvent::MusicStarted));
    }

    #[test]
    fn test_ids_are_unique_and_in_spawn_order() {
        let state = new_state();
        let ids: Vec<u32> = state.enemies.iter().map(|e| e.id.0).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_spawn_is_noop_when_dead() {
        let mut state = new_state();
        state.player_died = true;
        assert_eq!(state.spawn_enemy(), None);
        assert_eq!(state.enemies.len(), 10);
    }

    #[test]
    fn test_remove_missing_enemy_is_noop() {
        let mut state = new_state();
        let id = state.enemies[3].id;
        assert!(state.remove_enemy(id, RemovalReason::Expired).is_some());
        state.drain_events();
        assert!(state.remove_enemy(id, RemovalReason::OffScreen).is_none());
        assert!(state.events.is_empty());
        assert_eq!(state.enemies.len(), 9);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let a = new_state();
        let b = new_state();
        for (x, y) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(x.trajectory, y.trajectory);
            assert_eq!(x.variant, y.variant);
        }
    }

    #[test]
    fn test_mob_moves_at_constant_speed() {
        let mut mob = Mob::default();
        mob.move_to(Vec2::new(200.0, 0.0));
        mob.advance(1.0);
        assert!((mob.pos.x - MOB_SPEED).abs() < 1e-3);
        mob.advance(5.0);
        assert_eq!(mob.pos, Vec2::new(200.0, 0.0));
        assert!(mob.motion.is_none());
    }

    #[test]
    fn test_hidden_overlay_ignores_taps() {
        let mut overlay = Overlay::default();
        assert!(!overlay.contains(Vec2::ZERO));
        overlay.visible = true;
        overlay.scale = Tween::fixed(OVERLAY_SHOWN_SCALE);
        assert!(overlay.contains(Vec2::new(10.0, 10.0)));
        assert!(!overlay.contains(Vec2::new(OVERLAY_HALF_WIDTH * 5.0, 0.0)));
    }
}

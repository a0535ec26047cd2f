//! Mob Swarm - a swarm-defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (enemies, spawning, contact, death, restart)
//! - `platform`: Browser/native platform abstraction (logging, pointer input)
//! - `audio`: Sound cues derived from simulation events
//! - `ui`: Status line text and colour tiers
//! - `settings`: Persisted player preferences
//! - `tuning`: Simulation balance knobs

pub mod audio;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Frame timestep used by the headless driver (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Default scene size (points, scene is centred on the origin)
    pub const DEFAULT_SCENE_WIDTH: f32 = 1334.0;
    pub const DEFAULT_SCENE_HEIGHT: f32 = 750.0;

    /// Enemy starting health
    pub const ENEMY_START_HEALTH: f32 = 4.0;
    /// Multiplicative health decay per deterioration step
    pub const DETERIORATION_RATE: f32 = 0.990;
    /// Number of enemy sprite families in the atlas
    pub const ENEMY_VARIANTS: u8 = 3;
    /// Half extent of an enemy sprite at scale 1.0
    pub const ENEMY_HALF_EXTENT: f32 = 32.0;

    /// Enemy travel duration range (seconds)
    pub const TRAVEL_MIN_SECS: f32 = 15.0;
    pub const TRAVEL_MAX_SECS: f32 = 25.0;
    /// Upper bound of the random wait after travel (seconds)
    pub const LINGER_MAX_SECS: f32 = 2.0;
    /// Seconds an off-screen enemy is left alone before culling
    pub const OFFSCREEN_GRACE_SECS: f64 = 3.0;

    /// Mob defaults (restored on restart)
    pub const MOB_START_BIRTH_RATE: f32 = 0.5;
    pub const MOB_START_SCALE: f32 = 3.0;
    /// Half extent of the mob's emitter frame at scale 1.0
    pub const MOB_HALF_EXTENT: f32 = 24.0;
    /// Mob travel speed toward the pointer (points/second)
    pub const MOB_SPEED: f32 = 100.0;
    /// Birth rate decay per contact frame
    pub const MOB_DECAY: f32 = 0.999;
    /// Birth rate returned to the mob per kill
    pub const KILL_BONUS: f32 = 0.25;
    /// Mob is critically weak while `birth_rate * WEAKNESS_FACTOR < enemy.health`
    pub const WEAKNESS_FACTOR: f32 = 5.0;

    /// End-of-round overlay
    pub const OVERLAY_SHOWN_SCALE: f32 = 4.0;
    pub const OVERLAY_ANIM_SECS: f32 = 1.5;
    pub const OVERLAY_HALF_WIDTH: f32 = 100.0;
    pub const OVERLAY_HALF_HEIGHT: f32 = 50.0;
}

/// Attack power shown to the player: birth rate ×100, truncated toward zero
#[inline]
pub fn attack_power(birth_rate: f32) -> i64 {
    (birth_rate * 100.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_power_truncates() {
        assert_eq!(attack_power(0.5), 50);
        assert_eq!(attack_power(0.0099), 0);
        assert_eq!(attack_power(0.019), 1);
        assert_eq!(attack_power(0.0), 0);
    }
}

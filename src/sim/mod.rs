//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`'s `dt`
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, SceneBounds};
pub use enemy::{Deterioration, Enemy, EnemyId, Stage, TextureKey, Trajectory};
pub use motion::{Motion, Tween};
pub use spawn::Edge;
pub use state::{
    GameEvent, GameState, Mob, Overlay, RemovalReason, SimMessage, Snapshot, SpinnyColor,
};
pub use tick::{
    PointerEvent, PointerPhase, TickInput, apply_pointer, check_death, contact_step,
    cull_offscreen, move_mob, process_messages, restart, tick, update_status,
};

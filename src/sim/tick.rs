//! Per-frame simulation step
//!
//! Core game loop: pointer handling, movement, contact damage, death, culling and the
//! expiry/respawn queue.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::{Deterioration, EnemyId};
use super::state::{GameEvent, GameState, Mob, RemovalReason, SimMessage, SpinnyColor};
use crate::attack_power;
use crate::consts::*;
use crate::ui::StatusLine;

/// Phase of a pointer interaction, shared by touch and mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerPhase {
    Press,
    Move,
    Release,
}

/// A pointer event in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pos: Vec2,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, pos: Vec2) -> Self {
        Self { phase, pos }
    }
}

/// Input collected for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer events in arrival order
    pub pointer: Vec<PointerEvent>,
}

/// Advance the game by one rendered frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    for event in &input.pointer {
        apply_pointer(state, *event);
    }

    state.frames += 1;
    state.clock += dt as f64;

    state.mob.advance(dt);
    state.overlay.scale.advance(dt);

    // Scheduled move-then-wait sequences that completed this frame
    let now = state.clock;
    for enemy in &mut state.enemies {
        enemy.advance(now);
        if enemy.is_expired(now) {
            state.pending.push_back(SimMessage::Expired(enemy.id));
        }
    }

    contact_step(state);
    update_status(state);
    check_death(state);
    cull_offscreen(state);
    process_messages(state);
}

/// Route one pointer event: overlay restart, spinny trail, mob movement
pub fn apply_pointer(state: &mut GameState, event: PointerEvent) {
    let color = match event.phase {
        PointerPhase::Press => {
            if state.player_died && state.overlay.contains(event.pos) {
                restart(state);
            }
            SpinnyColor::Green
        }
        PointerPhase::Move => SpinnyColor::Blue,
        PointerPhase::Release => SpinnyColor::Red,
    };

    if state.spinny_stuff {
        state.events.push(GameEvent::Spinny {
            pos: event.pos,
            color,
        });
    }
    move_mob(state, event.pos);
}

/// Send the mob toward `target`; ignored once the player has died
pub fn move_mob(state: &mut GameState, target: Vec2) {
    if state.player_died {
        return;
    }
    state.mob.move_to(target);
}

/// Damage enemies touching the mob and drain the mob's birth rate
pub fn contact_step(state: &mut GameState) {
    let mob_bounds = state.mob.bounds();
    let contacts: Vec<EnemyId> = state
        .enemies
        .iter()
        .filter(|e| e.bounds().intersects(&mob_bounds))
        .map(|e| e.id)
        .collect();

    if !contacts.is_empty() || state.tuning.passive_decay {
        state.mob.birth_rate *= MOB_DECAY;
    }

    for id in contacts {
        let Some(enemy) = state.enemies.iter_mut().find(|e| e.id == id) else {
            continue;
        };
        let outcome = enemy.deteriorate();
        let health = enemy.health;
        let texture = enemy.texture_key();

        if outcome != Deterioration::Unchanged {
            state
                .events
                .push(GameEvent::EnemyStageChanged { id, texture });
        }
        if outcome == Deterioration::Destroyed {
            kill_enemy(state, id);
        }

        // Critically weak against this enemy
        if state.mob.birth_rate * WEAKNESS_FACTOR < health {
            state.mob.birth_rate *= MOB_DECAY;
        }
    }
}

/// Apply the consequences of an enemy reaching its terminal stage
fn kill_enemy(state: &mut GameState, id: EnemyId) {
    state.events.push(GameEvent::EnemyRevealed { id });

    let Some(enemy) = state.remove_enemy(id, RemovalReason::Killed) else {
        return;
    };

    state.mob.birth_rate += KILL_BONUS;
    state.request_spawn();
    state.kills += 1;
    state.events.push(GameEvent::EnemyKilled { id, pos: enemy.pos });

    log::debug!(
        "Enemy {} killed, kills={} birth_rate={:.3}",
        id.0,
        state.kills,
        state.mob.birth_rate
    );
}

/// Refresh the HUD labels
pub fn update_status(state: &mut GameState) {
    state.status = StatusLine::new(state.mob.birth_rate, state.kills);
}

/// Enter the end-of-round state once attack power truncates to zero
pub fn check_death(state: &mut GameState) {
    if attack_power(state.mob.birth_rate) != 0 && !state.player_died {
        return;
    }

    state.mob.birth_rate = 0.0;
    state.mob.visible = true;

    if state.player_died {
        return;
    }
    state.player_died = true;

    state.overlay.visible = true;
    state.overlay.scale = super::motion::Tween::new(0.0, OVERLAY_SHOWN_SCALE, OVERLAY_ANIM_SECS);
    state.events.push(GameEvent::OverlayAnimated {
        from: 0.0,
        to: OVERLAY_SHOWN_SCALE,
        duration: OVERLAY_ANIM_SECS,
    });
    state.events.push(GameEvent::PlayerDied { kills: state.kills });
    state.events.push(GameEvent::MusicStopped);

    log::info!(
        "Player died after {:.1}s with {} kills",
        state.clock,
        state.kills
    );
}

/// Remove enemies that stayed outside the play area past the grace period
pub fn cull_offscreen(state: &mut GameState) {
    let area = state.bounds.visible_area();
    let now = state.clock;
    let stale: Vec<EnemyId> = state
        .enemies
        .iter()
        .filter(|e| !e.bounds().intersects(&area) && e.age(now) > OFFSCREEN_GRACE_SECS)
        .map(|e| e.id)
        .collect();

    for id in stale {
        if state.remove_enemy(id, RemovalReason::OffScreen).is_some() {
            log::debug!("Culled off-screen enemy {}", id.0);
            state.request_spawn();
        }
    }
}

/// Drain the expiry/respawn queue
pub fn process_messages(state: &mut GameState) {
    while let Some(message) = state.pending.pop_front() {
        match message {
            SimMessage::Expired(id) => {
                // Already killed or culled: its schedule died with it
                if state.remove_enemy(id, RemovalReason::Expired).is_some() {
                    state.request_spawn();
                }
            }
            SimMessage::SpawnRequested => {
                state.spawn_enemy();
            }
        }
    }
}

/// Start a new round
pub fn restart(state: &mut GameState) {
    log::info!(
        "Restarting: clearing {} enemies (kills were {})",
        state.enemies.len(),
        state.kills
    );

    // One last deterioration as a send-off
    for enemy in &mut state.enemies {
        if enemy.deteriorate() != Deterioration::Unchanged {
            state.events.push(GameEvent::EnemyStageChanged {
                id: enemy.id,
                texture: enemy.texture_key(),
            });
        }
    }
    for enemy in state.enemies.drain(..) {
        state.events.push(GameEvent::EnemyRemoved {
            id: enemy.id,
            reason: RemovalReason::Reset,
        });
    }
    state
        .pending
        .retain(|m| !matches!(m, SimMessage::Expired(_)));

    state.player_died = false;
    state.seed_population();

    state.mob = Mob::default();
    state.overlay.scale.retarget(0.0, OVERLAY_ANIM_SECS);
    state.events.push(GameEvent::OverlayAnimated {
        from: state.overlay.scale.from,
        to: 0.0,
        duration: OVERLAY_ANIM_SECS,
    });
    state.kills = 0;
    state.events.push(GameEvent::MusicStarted);

    if state.tuning.double_seed_on_restart {
        state.seed_population();
    }

    state.events.push(GameEvent::Restarted);
    update_status(state);
}

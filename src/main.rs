//! Mob Swarm entry point
//!
//! Native builds run a headless session: an autopilot steers the mob toward the
//! nearest visible enemy, taps the overlay to restart after each death, and logs the
//! HUD once per simulated second.
//!
//! Usage: `mob-swarm [seed] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use mob_swarm::audio::{AudioManager, LogSink};
    use mob_swarm::consts::*;
    use mob_swarm::platform::input::{InputCollector, MouseAction, ScreenMapping};
    use mob_swarm::sim::{GameEvent, GameState, SceneBounds, tick};
    use mob_swarm::{Settings, Tuning};

    /// Screen the scene is presented on (the scene is twice the point size)
    const SCREEN_WIDTH: f32 = DEFAULT_SCENE_WIDTH / 2.0;
    const SCREEN_HEIGHT: f32 = DEFAULT_SCENE_HEIGHT / 2.0;

    fn parse_args() -> (u64, u32) {
        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0x5eed_u64);
        let seconds = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);
        (seed, seconds)
    }

    /// Inverse of `ScreenMapping::to_scene`
    fn to_screen(scene_pos: Vec2, scene: &SceneBounds) -> Vec2 {
        let normalized = Vec2::new(scene_pos.x / scene.width, -scene_pos.y / scene.height);
        (normalized + Vec2::splat(0.5)) * Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Chase the nearest on-screen enemy; tap the overlay once it has grown
    fn autopilot(state: &GameState, input: &mut InputCollector) {
        if state.player_died {
            if state.overlay.scale.is_finished() {
                input.mouse(MouseAction::Down, to_screen(Vec2::ZERO, &state.bounds));
            }
            return;
        }
        if state.mob.motion.is_some() {
            return;
        }

        let area = state.bounds.visible_area();
        let target = state
            .enemies
            .iter()
            .filter(|e| area.contains_point(e.pos))
            .min_by(|a, b| {
                a.pos
                    .distance(state.mob.pos)
                    .partial_cmp(&b.pos.distance(state.mob.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        if let Some(enemy) = target {
            input.mouse(MouseAction::Dragged, to_screen(enemy.pos, &state.bounds));
        }
    }

    pub fn run() {
        mob_swarm::platform::init_logging();
        let (seed, seconds) = parse_args();
        log::info!("Mob Swarm (headless) seed={} duration={}s", seed, seconds);

        let settings = Settings::load();
        let bounds = SceneBounds::default();
        let mut state = GameState::new(seed, bounds, &settings, Tuning::default());
        let mut input = InputCollector::new(ScreenMapping::new(SCREEN_WIDTH, SCREEN_HEIGHT, bounds));
        let mut audio = AudioManager::new(LogSink);

        let frames_per_second = (1.0 / FRAME_DT).round() as u64;
        let total_frames = seconds as u64 * frames_per_second;
        let mut rounds = 1u32;
        let mut best_kills = 0u32;

        for frame in 0..total_frames {
            autopilot(&state, &mut input);
            tick(&mut state, &input.take(), FRAME_DT);

            let events = state.drain_events();
            audio.handle_events(&events);
            for event in &events {
                match event {
                    GameEvent::PlayerDied { kills } => {
                        best_kills = best_kills.max(*kills);
                        log::info!("Round {} over: {} kills", rounds, kills);
                    }
                    GameEvent::Restarted => rounds += 1,
                    _ => {}
                }
            }

            if (frame + 1) % frames_per_second == 0 {
                log::info!(
                    "[{:>4.0}s] {} | enemies={}",
                    state.clock,
                    state.status,
                    state.enemies.len()
                );
            }
        }
        best_kills = best_kills.max(state.kills);

        log::info!("Finished: rounds={} best_kills={}", rounds, best_kills);
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(err) => log::warn!("Could not serialize snapshot: {}", err),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `mob_swarm::sim::tick` from its own frame callback
}

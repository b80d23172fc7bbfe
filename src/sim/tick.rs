//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Stage order
//! within a tick is fixed: physics, entity motion, collision, progression.

use super::collision::resolve_collisions;
use super::motion::scrolled_past;
use super::physics::step_player;
use super::state::{GameEvent, GamePhase, GameState, PlayerMode};

/// Ticks of look-ahead the autopilot uses to spot hazards
const AUTOPILOT_LOOKAHEAD_TICKS: f32 = 12.0;

/// Input commands for a single tick (deterministic)
///
/// `jump_held` is a level; the toggles are edges consumed by one tick.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (normal mode) or thrust (float mode) held
    pub jump_held: bool,
    /// Switch between normal and float mode
    pub toggle_float: bool,
    /// Pause toggle
    pub toggle_pause: bool,
    /// Demo mode - jump input is computed from the level ahead
    pub autopilot: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.died_last_tick = false;

    // Handle pause toggle
    if input.toggle_pause {
        state.paused = !state.paused;
        let paused = state.paused;
        state.emit(GameEvent::PauseChanged { paused });
    }

    // Don't tick if paused or finished
    if state.paused || state.phase == GamePhase::AllLevelsCleared {
        return;
    }

    if input.toggle_float {
        state.player.toggle_mode();
        let mode = state.player.mode;
        state.emit(GameEvent::ModeChanged { mode });
    }

    let jump_held = if input.autopilot {
        autopilot_jump(state)
    } else {
        input.jump_held
    };

    state.time_ticks += 1;
    state.score += 1;

    // Player physics
    if step_player(&mut state.player, jump_held, &state.tuning) {
        state.emit(GameEvent::Jumped);
    }

    // Entity motion: scroll, oscillate, cull
    state.player.pos.x += state.world_speed;
    for platform in &mut state.platforms {
        platform.motion.step();
    }
    for obstacle in &mut state.obstacles {
        obstacle.motion.step();
    }
    let camera = state.camera_x();
    state.spikes.retain(|s| !scrolled_past(s.x, s.size, camera));

    // Collision: landings first, then hazards
    let result = resolve_collisions(
        &mut state.player,
        &state.spikes,
        &state.platforms,
        &state.obstacles,
        &state.tuning,
    );
    if result.fatal.is_some() {
        state.respawn();
        state.died_last_tick = true;
        return;
    }

    let (fade, shrink) = (state.tuning.trail_fade, state.tuning.trail_shrink);
    state.player.record_trail(fade, shrink);

    // Level progression
    state.advance_checkpoint();
    state.check_level_end();
}

/// Decide whether to hold jump this tick
///
/// Normal mode taps jump from the ground when a spike or low obstacle is
/// about to reach the player. Float mode holds thrust while below a
/// cruising height.
fn autopilot_jump(state: &GameState) -> bool {
    let player = &state.player;
    match player.mode {
        PlayerMode::Normal => {
            if !player.on_ground {
                return false;
            }
            let front = player.pos.x + player.size;
            let reach = front + state.world_speed * AUTOPILOT_LOOKAHEAD_TICKS;
            let spike_ahead = state
                .spikes
                .iter()
                .any(|s| s.x + s.size > player.pos.x && s.x <= reach);
            let obstacle_ahead = state.obstacles.iter().any(|o| {
                let b = o.bounds();
                b.right() > player.pos.x && b.x <= reach && b.bottom() > player.pos.y
            });
            spike_ahead || obstacle_ahead
        }
        PlayerMode::Float => player.pos.y > state.tuning.ground_y() - 150.0,
    }
}

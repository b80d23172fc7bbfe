//! End-to-end gameplay scenarios driven through the public tick API

use spike_dash::Tuning;
use spike_dash::sim::{
    GameEvent, GameState, LevelTemplate, PlatformTemplate, Snapshot, SpikeTemplate, TickInput,
    tick,
};

fn level(spikes: &[(f32, f32)], checkpoints: &[f32], length: f32) -> LevelTemplate {
    LevelTemplate {
        spikes: spikes.iter().map(|&(x, size)| SpikeTemplate { x, size }).collect(),
        checkpoints: checkpoints.to_vec(),
        length,
        ..Default::default()
    }
}

#[test]
fn spike_at_start_kills_and_respawns_at_start() {
    let tuning = Tuning::default();
    let ground_y = tuning.ground_y();
    let mut state = GameState::new(tuning, vec![level(&[(100.0, 50.0)], &[], 5000.0)]);
    assert_eq!(state.player.pos.x, 100.0);
    assert_eq!(state.player.pos.y, ground_y);

    tick(&mut state, &TickInput::default());

    assert!(state.died_last_tick);
    assert_eq!(state.deaths, 1);
    assert_eq!(state.player.pos.x, 100.0);
    assert_eq!(state.player.pos.y, ground_y);
    assert_eq!(state.player.vy, 0.0);
    assert!(state.player.on_ground);
    assert!(state.player.trail.is_empty());
    assert!(state.drain_events().contains(&GameEvent::Died {
        at_x: 106.0,
        respawn_x: 100.0
    }));
    assert!(!Snapshot::capture(&state).alive);
}

#[test]
fn jump_lands_exactly_on_ground() {
    let tuning = Tuning::default();
    let ground_y = tuning.ground_y();
    let mut state = GameState::new(tuning, vec![level(&[], &[], 50_000.0)]);
    state.player.vy = -18.0;
    state.player.on_ground = false;

    let mut ticks = 0;
    let mut was_rising = true;
    while !state.player.on_ground {
        tick(&mut state, &TickInput::default());
        assert!(state.player.pos.y <= ground_y);
        if state.player.vy >= 0.0 {
            was_rising = false;
        }
        ticks += 1;
        assert!(ticks < 200, "never landed");
    }
    assert!(!was_rising);
    assert_eq!(state.player.pos.y, ground_y);
    assert_eq!(state.player.vy, 0.0);
    assert_eq!(state.player.angle, 0.0);
}

#[test]
fn checkpoint_becomes_respawn_point() {
    let mut state = GameState::new(
        Tuning::default(),
        vec![level(&[(800.0, 50.0)], &[600.0], 5000.0)],
    );
    assert_eq!(state.last_checkpoint, None);

    let mut ticks = 0;
    while state.deaths == 0 {
        tick(&mut state, &TickInput::default());
        ticks += 1;
        assert!(ticks < 500, "never hit the spike");
    }

    assert_eq!(state.last_checkpoint, Some(600.0));
    assert_eq!(state.player.pos.x, 600.0);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::CheckpointReached { x: 600.0 }));
    // The spike ahead of the checkpoint is rebuilt for the next attempt
    assert_eq!(state.spikes.len(), 1);
}

#[test]
fn reaching_level_end_loads_next_level() {
    let second = level(&[(700.0, 50.0), (1400.0, 60.0)], &[], 2000.0);
    let mut state = GameState::new(
        Tuning::default(),
        vec![level(&[], &[500.0], 1000.0), second.clone()],
    );
    state.player.pos.x = 1000.0;
    state.last_checkpoint = Some(500.0);

    tick(&mut state, &TickInput::default());

    assert_eq!(state.level_index, 1);
    assert_eq!(state.level, second);
    assert_eq!(state.player.pos.x, 100.0);
    assert_eq!(state.player.pos.y, state.tuning.ground_y());
    assert_eq!(state.last_checkpoint, None);
    assert_eq!(state.spikes.len(), 2);
    assert_eq!(state.world_speed, 6.5);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::LevelCleared { index: 0 }));
    assert!(events.contains(&GameEvent::LevelStarted { index: 1 }));
}

#[test]
fn falling_player_lands_on_platform() {
    let template = LevelTemplate {
        platforms: vec![PlatformTemplate {
            x: 50.0,
            y: 500.0,
            width: 300.0,
            height: 20.0,
            range: 0.0,
            speed: 0.0,
        }],
        length: 5000.0,
        ..Default::default()
    };
    let mut state = GameState::new(Tuning::default(), vec![template]);
    state.player.pos.y = 448.0;
    state.player.vy = 3.0;
    state.player.on_ground = false;
    state.player.angle = 0.7;

    tick(&mut state, &TickInput::default());

    assert_eq!(state.player.pos.y, 500.0 - state.player.size);
    assert_eq!(state.player.vy, 0.0);
    assert!(state.player.on_ground);
    assert_eq!(state.player.angle, 0.0);
    assert!(!state.died_last_tick);
}

#[test]
fn respawn_at_checkpoint_is_a_fixpoint() {
    let mut state = GameState::with_builtin_levels(Tuning::default());
    state.load_level(2);
    state.last_checkpoint = Some(1000.0);

    state.respawn();
    let first = Snapshot::capture(&state);
    state.respawn();
    let second = Snapshot::capture(&state);

    assert_eq!(first, second);
    assert_eq!(state.player.pos.x, 1000.0);
    assert_eq!(state.player.vy, 0.0);
}

#[test]
fn gameplay_never_mutates_templates() {
    let mut state = GameState::with_builtin_levels(Tuning::default());
    let templates = state.levels.clone();

    let inputs = [
        TickInput {
            jump_held: true,
            ..Default::default()
        },
        TickInput::default(),
        TickInput::default(),
        TickInput {
            autopilot: true,
            ..Default::default()
        },
    ];
    for i in 0..2000 {
        tick(&mut state, &inputs[i % inputs.len()]);
    }

    assert_eq!(state.levels, templates);
    assert_eq!(state.level, templates[state.level_index]);
}

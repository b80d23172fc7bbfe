//! Frame driver
//!
//! Owns the simulation context and the pending input. Hosts call the input
//! methods from their event handlers and `update`/`advance` once per
//! display frame; rendering reads `snapshot()` afterwards.

use super::level::LevelTemplate;
use super::snapshot::Snapshot;
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::tuning::Tuning;

/// A running game
#[derive(Debug, Clone)]
pub struct Simulation {
    state: GameState,
    input: TickInput,
    accumulator: f32,
}

impl Simulation {
    pub fn new(tuning: Tuning, levels: Vec<LevelTemplate>) -> Self {
        Self::from_state(GameState::new(tuning, levels))
    }

    pub fn with_builtin_levels(tuning: Tuning) -> Self {
        Self::from_state(GameState::with_builtin_levels(tuning))
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Jump/thrust button level
    pub fn set_jump_held(&mut self, held: bool) {
        self.input.jump_held = held;
    }

    /// Queue a float-mode toggle for the next tick
    pub fn toggle_float_mode(&mut self) {
        // Two presses before a tick cancel out
        self.input.toggle_float = !self.input.toggle_float;
    }

    /// Queue a pause toggle for the next tick
    pub fn toggle_pause(&mut self) {
        self.input.toggle_pause = !self.input.toggle_pause;
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
    }

    /// Run exactly `delta_ticks` ticks
    pub fn update(&mut self, delta_ticks: u32) {
        for _ in 0..delta_ticks {
            self.step();
        }
    }

    /// Accumulate real time and run as many fixed ticks as it covers
    ///
    /// Returns the number of ticks run (at most `MAX_SUBSTEPS`).
    pub fn advance(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop backlog we refused to simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    fn step(&mut self) {
        // A frozen tick never reads the float toggle, so it stays queued
        let runs = self.state.paused == self.input.toggle_pause
            && self.state.phase != GamePhase::AllLevelsCleared;

        tick(&mut self.state, &self.input);

        // Clear one-shot inputs after processing
        if runs {
            self.input.toggle_float = false;
        }
        self.input.toggle_pause = false;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}

//! Spike Dash - A side-scrolling reflex platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level progression)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-score leaderboard

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use sim::{GameState, Simulation, Snapshot};
pub use tuning::{Difficulty, EndPolicy, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Viewport defaults (pixels)
    pub const VIEWPORT_HEIGHT: f32 = 720.0;
    pub const GROUND_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Respawn x when no checkpoint has been passed
    pub const START_X: f32 = 100.0;

    /// Grounded-mode physics (per tick)
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_VELOCITY: f32 = -18.0;
    /// Extra upward push while jump is held and the player still rises
    pub const HOLD_BOOST: f32 = 0.3;
    /// Extra downward push while falling
    pub const FALL_BOOST: f32 = 0.35;
    /// Airborne spin per unit of vertical velocity
    pub const SPIN_FACTOR: f32 = 0.03;

    /// Float-mode physics (per tick)
    pub const FLOAT_THRUST: f32 = 0.6;
    pub const FLOAT_MAX_SPEED: f32 = 12.0;
    pub const FLOAT_TILT_FACTOR: f32 = 0.02;

    /// Depth below a platform top that still counts as a landing
    pub const LANDING_TOLERANCE: f32 = 10.0;

    /// World scroll speed (pixels per tick)
    pub const WORLD_SPEED: f32 = 6.0;
}

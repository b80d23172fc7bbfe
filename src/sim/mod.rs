//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (endless levels)
//! - Stable iteration order (template order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod generate;
pub mod geometry;
pub mod level;
pub mod motion;
pub mod physics;
pub mod progress;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, Hazard, resolve_collisions};
pub use driver::Simulation;
pub use generate::generate_level;
pub use geometry::{Rect, point_in_triangle, rect_overlap, spike_hit};
pub use level::{LevelTemplate, ObstacleTemplate, PlatformTemplate, SpikeTemplate, builtin_levels};
pub use motion::Oscillator;
pub use snapshot::Snapshot;
pub use state::{
    GameEvent, GamePhase, GameState, Obstacle, Platform, Player, PlayerMode, Spike, TrailPoint,
};
pub use tick::{TickInput, tick};

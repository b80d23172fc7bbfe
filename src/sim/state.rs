//! Game state and core simulation types
//!
//! `GameState` is the single owner of every mutable collection. Level
//! templates are held by value and only ever read.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::level::{LevelTemplate, builtin_levels};
use super::motion::Oscillator;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal per-tick simulation
    Active,
    /// Past the last template with `EndPolicy::Finish`
    AllLevelsCleared,
}

/// Player physics mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlayerMode {
    /// Gravity plus discrete jumps
    #[default]
    Normal,
    /// Continuous thrust up while held, down otherwise
    Float,
}

/// Trail point for player rendering
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPoint {
    /// Center of the player box when recorded (world space)
    pub pos: Vec2,
    pub alpha: f32,
    pub size: f32,
}

/// The player's square
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner in world space
    pub pos: Vec2,
    pub size: f32,
    /// Vertical velocity (pixels per tick, positive is down)
    pub vy: f32,
    /// Visual rotation in radians; collision ignores it
    pub angle: f32,
    pub on_ground: bool,
    pub mode: PlayerMode,
    /// Trail history for rendering (oldest first)
    #[serde(skip)]
    pub trail: Vec<TrailPoint>,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.start_x, tuning.ground_y()),
            size: tuning.player_size,
            vy: 0.0,
            angle: 0.0,
            on_ground: true,
            mode: PlayerMode::Normal,
            trail: Vec::new(),
        }
    }

    /// Collision box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Put the player back on the ground at `x`, standing still
    pub fn reset_at(&mut self, x: f32, ground_y: f32) {
        self.pos = Vec2::new(x, ground_y);
        self.vy = 0.0;
        self.angle = 0.0;
        self.on_ground = true;
        self.clear_trail();
    }

    /// Switch between normal and float mode
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            PlayerMode::Normal => PlayerMode::Float,
            PlayerMode::Float => PlayerMode::Normal,
        };
        self.angle = 0.0;
    }

    /// Record current position to trail and fade older points
    pub fn record_trail(&mut self, fade: f32, shrink: f32) {
        for point in &mut self.trail {
            point.alpha -= fade;
            point.size *= shrink;
        }
        self.trail.retain(|p| p.alpha > 0.0);
        self.trail.push(TrailPoint {
            pos: self.pos + Vec2::splat(self.size / 2.0),
            alpha: 1.0,
            size: self.size,
        });
    }

    /// Clear trail (on respawn/level load)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

/// A ground spike
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    /// Index in the level template
    pub id: u32,
    pub x: f32,
    pub size: f32,
}

/// A moving platform the player can land on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub motion: Oscillator,
}

impl Platform {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.motion.y, self.width, self.height)
    }
}

/// A moving square that kills on contact
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub x: f32,
    pub size: f32,
    pub motion: Oscillator,
}

impl Obstacle {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.motion.y, self.size, self.size)
    }
}

/// Something that happened during a tick, for audio/HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// Fatal contact; the player respawned at `respawn_x`
    Died { at_x: f32, respawn_x: f32 },
    CheckpointReached { x: f32 },
    LevelStarted { index: usize },
    LevelCleared { index: usize },
    AllLevelsCleared,
    ModeChanged { mode: PlayerMode },
    PauseChanged { paused: bool },
}

/// Complete simulation context (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Level templates, never mutated by gameplay
    pub levels: Vec<LevelTemplate>,
    /// Current level index (may exceed `levels` in endless mode)
    pub level_index: usize,
    /// Template the current attempt was built from
    pub level: LevelTemplate,
    pub phase: GamePhase,
    pub paused: bool,
    pub player: Player,
    pub spikes: Vec<Spike>,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    /// Checkpoint x coordinates for the current level
    pub checkpoints: Vec<f32>,
    /// Furthest checkpoint passed this level, if any
    pub last_checkpoint: Option<f32>,
    /// Current scroll speed (pixels per tick)
    pub world_speed: f32,
    /// Survival ticks, never reset during a run
    pub score: u64,
    pub deaths: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Whether the last tick ended in a respawn
    pub died_last_tick: bool,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new run over `levels`, starting at level 0
    pub fn new(tuning: Tuning, levels: Vec<LevelTemplate>) -> Self {
        let mut state = Self {
            player: Player::new(&tuning),
            world_speed: tuning.world_speed_for_level(0),
            tuning,
            levels,
            level_index: 0,
            level: LevelTemplate::default(),
            phase: GamePhase::Active,
            paused: false,
            spikes: Vec::new(),
            platforms: Vec::new(),
            obstacles: Vec::new(),
            checkpoints: Vec::new(),
            last_checkpoint: None,
            score: 0,
            deaths: 0,
            time_ticks: 0,
            died_last_tick: false,
            events: Vec::new(),
        };

        state.load_level(0);

        state
    }

    /// Create a new run over the built-in levels
    pub fn with_builtin_levels(tuning: Tuning) -> Self {
        let levels = builtin_levels(&tuning);
        Self::new(tuning, levels)
    }

    /// Left edge of the viewport in world space
    #[inline]
    pub fn camera_x(&self) -> f32 {
        super::motion::camera_left(self.player.pos.x, self.tuning.start_x)
    }

    /// Where a death right now would put the player
    #[inline]
    pub fn respawn_x(&self) -> f32 {
        self.last_checkpoint.unwrap_or(self.tuning.start_x)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

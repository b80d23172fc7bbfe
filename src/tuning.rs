//! Data-driven game balance
//!
//! Every physics and world constant the simulation reads lives here so that
//! variants (floatier jumps, faster scroll) are configuration, not code.
//! Persisted as JSON next to the high-score file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// World speed multiplier for this preset
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.35,
        }
    }
}

/// What happens after the last level template is cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EndPolicy {
    /// Stop in the `AllLevelsCleared` phase
    #[default]
    Finish,
    /// Start over at level 0
    Wrap,
    /// Keep going with generated levels
    Endless,
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_height: f32,
    /// Gap between the ground line and the bottom of the viewport
    pub ground_margin: f32,

    // === Player ===
    pub player_size: f32,
    pub start_x: f32,

    // === Grounded mode ===
    pub gravity: f32,
    pub jump_velocity: f32,
    pub hold_boost: f32,
    pub fall_boost: f32,
    pub spin_factor: f32,

    // === Float mode ===
    pub float_thrust: f32,
    pub float_max_speed: f32,
    pub float_tilt_factor: f32,

    // === Collision ===
    pub landing_tolerance: f32,

    // === World ===
    pub world_speed: f32,
    /// Added to the world speed per level index
    pub speed_ramp: f32,
    pub max_world_speed: f32,

    // === Visuals ===
    /// Trail alpha lost per tick
    pub trail_fade: f32,
    /// Trail size multiplier per tick
    pub trail_shrink: f32,

    // === Progression ===
    pub end_policy: EndPolicy,
    /// Seed for generated levels in `EndPolicy::Endless`
    pub endless_seed: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_height: VIEWPORT_HEIGHT,
            ground_margin: GROUND_MARGIN,

            player_size: PLAYER_SIZE,
            start_x: START_X,

            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            hold_boost: HOLD_BOOST,
            fall_boost: FALL_BOOST,
            spin_factor: SPIN_FACTOR,

            float_thrust: FLOAT_THRUST,
            float_max_speed: FLOAT_MAX_SPEED,
            float_tilt_factor: FLOAT_TILT_FACTOR,

            landing_tolerance: LANDING_TOLERANCE,

            world_speed: WORLD_SPEED,
            speed_ramp: 0.5,
            max_world_speed: 12.0,

            trail_fade: 0.03,
            trail_shrink: 0.97,

            end_policy: EndPolicy::Finish,
            endless_seed: 0x5EED,
        }
    }
}

impl Tuning {
    /// Create tuning from a difficulty preset (applies preset defaults)
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut tuning = Self::default();
        tuning.apply_difficulty(difficulty);
        tuning
    }

    /// Scale world speeds for a difficulty preset
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        let m = difficulty.speed_multiplier();
        self.world_speed *= m;
        self.max_world_speed *= m;
    }

    /// y coordinate of the ground line (spike bases sit here)
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.viewport_height - self.ground_margin
    }

    /// Lowest y the player's top edge may take
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground_line() - self.player_size
    }

    /// World speed for a level index, ramped and capped
    pub fn world_speed_for_level(&self, level_index: usize) -> f32 {
        let ramped = self.world_speed + self.speed_ramp * level_index as f32;
        ramped.min(self.max_world_speed.max(self.world_speed))
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    return tuning;
                }
                Err(e) => log::warn!("Invalid tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::info!("No tuning file at {} ({}), using defaults", path.display(), e),
        }
        Self::default()
    }

    /// Save tuning to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Tuning saved to {}", path.as_ref().display());
        Ok(())
    }
}

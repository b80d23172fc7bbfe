//! Level templates
//!
//! A template is plain data, loaded from JSON or built in. Every attempt
//! builds fresh entity records from it, so gameplay never writes back.

use serde::{Deserialize, Serialize};

use super::motion::{Oscillator, scrolled_past};
use super::state::{Obstacle, Platform, Spike};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpikeTemplate {
    pub x: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformTemplate {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub range: f32,
    #[serde(default)]
    pub speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleTemplate {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    #[serde(default)]
    pub range: f32,
    #[serde(default)]
    pub speed: f32,
}

/// Immutable description of one level
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelTemplate {
    #[serde(default)]
    pub spikes: Vec<SpikeTemplate>,
    #[serde(default)]
    pub platforms: Vec<PlatformTemplate>,
    #[serde(default)]
    pub obstacles: Vec<ObstacleTemplate>,
    /// Checkpoint x coordinates (unvalidated, order irrelevant)
    #[serde(default)]
    pub checkpoints: Vec<f32>,
    /// x the player must reach to clear the level
    pub length: f32,
}

/// Owned per-attempt collections built from a template
#[derive(Debug, Clone, Default)]
pub struct LevelEntities {
    pub spikes: Vec<Spike>,
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    pub checkpoints: Vec<f32>,
}

impl LevelTemplate {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a JSON array of templates
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build fresh entities for an attempt whose camera starts at `camera_left`
    ///
    /// Spikes already behind the camera are skipped. Entity ids are template
    /// indices, so rebuilding the same template yields identical records.
    pub fn instantiate(&self, camera_left: f32) -> LevelEntities {
        let spikes = self
            .spikes
            .iter()
            .enumerate()
            .filter(|(_, s)| !scrolled_past(s.x, s.size, camera_left))
            .map(|(i, s)| Spike {
                id: i as u32,
                x: s.x,
                size: s.size,
            })
            .collect();

        let platforms = self
            .platforms
            .iter()
            .enumerate()
            .map(|(i, p)| Platform {
                id: i as u32,
                x: p.x,
                width: p.width,
                height: p.height,
                motion: Oscillator::new(p.y, p.range, p.speed),
            })
            .collect();

        let obstacles = self
            .obstacles
            .iter()
            .enumerate()
            .map(|(i, o)| Obstacle {
                id: i as u32,
                x: o.x,
                size: o.size,
                motion: Oscillator::new(o.y, o.range, o.speed),
            })
            .collect();

        LevelEntities {
            spikes,
            platforms,
            obstacles,
            checkpoints: self.checkpoints.clone(),
        }
    }
}

/// Levels shipped with the game
///
/// Heights are measured from the ground line so they follow the viewport.
pub fn builtin_levels(tuning: &Tuning) -> Vec<LevelTemplate> {
    let ground = tuning.ground_line();
    let spike = |x: f32, size: f32| SpikeTemplate { x, size };
    let platform = |x: f32, above: f32, width: f32, range: f32, speed: f32| PlatformTemplate {
        x,
        y: ground - above,
        width,
        height: 20.0,
        range,
        speed,
    };
    let obstacle = |x: f32, above: f32, size: f32, range: f32, speed: f32| ObstacleTemplate {
        x,
        y: ground - above - size,
        size,
        range,
        speed,
    };

    vec![
        // First Steps
        LevelTemplate {
            spikes: vec![spike(300.0, 50.0), spike(600.0, 60.0), spike(900.0, 50.0)],
            platforms: vec![platform(400.0, 100.0, 150.0, 100.0, 2.0)],
            obstacles: Vec::new(),
            checkpoints: Vec::new(),
            length: 1200.0,
        },
        // Stepping Stones
        LevelTemplate {
            spikes: vec![
                spike(500.0, 50.0),
                spike(900.0, 50.0),
                spike(950.0, 50.0),
                spike(1500.0, 60.0),
                spike(2100.0, 50.0),
                spike(2150.0, 50.0),
                spike(2200.0, 50.0),
            ],
            platforms: vec![
                platform(1150.0, 120.0, 200.0, 60.0, 1.5),
                platform(2050.0, 160.0, 250.0, 0.0, 0.0),
            ],
            obstacles: vec![obstacle(1800.0, 140.0, 40.0, 80.0, 2.0)],
            checkpoints: vec![1300.0],
            length: 2600.0,
        },
        // Pendulum Run
        LevelTemplate {
            spikes: vec![
                spike(450.0, 50.0),
                spike(800.0, 60.0),
                spike(1400.0, 50.0),
                spike(1450.0, 50.0),
                spike(2300.0, 60.0),
                spike(2900.0, 50.0),
                spike(2950.0, 50.0),
                spike(3500.0, 60.0),
            ],
            platforms: vec![
                platform(1300.0, 140.0, 260.0, 80.0, 2.5),
                platform(2750.0, 150.0, 300.0, 40.0, 1.0),
            ],
            obstacles: vec![
                obstacle(1050.0, 150.0, 50.0, 100.0, 3.0),
                obstacle(1900.0, 120.0, 40.0, 120.0, 2.5),
                obstacle(3200.0, 160.0, 50.0, 60.0, 3.5),
            ],
            checkpoints: vec![1000.0, 2000.0, 3000.0],
            length: 3800.0,
        },
    ]
}

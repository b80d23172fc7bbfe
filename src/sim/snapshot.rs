//! Read-only per-tick view for renderers and HUDs
//!
//! Positions are converted to viewport space (camera at the left edge), so
//! a renderer can draw them directly.

use glam::Vec2;
use serde::Serialize;

use super::geometry::{Rect, spike_triangle};
use super::state::{GamePhase, GameState, PlayerMode, TrailPoint};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub angle: f32,
    pub mode: PlayerMode,
    pub on_ground: bool,
    pub trail: Vec<TrailPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpikeView {
    pub x: f32,
    pub size: f32,
    /// Left base, apex, right base
    pub triangle: [Vec2; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxView {
    pub rect: Rect,
    /// Kills on contact (obstacles) rather than supporting (platforms)
    pub fatal: bool,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// World x of the viewport's left edge
    pub camera_x: f32,
    pub player: PlayerView,
    pub spikes: Vec<SpikeView>,
    pub platforms: Vec<BoxView>,
    pub obstacles: Vec<BoxView>,
    /// Checkpoint x coordinates in viewport space
    pub checkpoints: Vec<f32>,
    pub last_checkpoint: Option<f32>,
    pub score: u64,
    pub level_index: usize,
    pub world_speed: f32,
    pub phase: GamePhase,
    pub paused: bool,
    /// False on the tick a fatal contact happened
    pub alive: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let camera_x = state.camera_x();
        let ground_line = state.tuning.ground_line();
        let to_view = |mut rect: Rect| {
            rect.x -= camera_x;
            rect
        };
        let offset = Vec2::new(camera_x, 0.0);

        let player = &state.player;
        Self {
            camera_x,
            player: PlayerView {
                rect: to_view(player.bounds()),
                angle: player.angle,
                mode: player.mode,
                on_ground: player.on_ground,
                trail: player
                    .trail
                    .iter()
                    .map(|t| TrailPoint {
                        pos: t.pos - offset,
                        ..*t
                    })
                    .collect(),
            },
            spikes: state
                .spikes
                .iter()
                .map(|s| SpikeView {
                    x: s.x - camera_x,
                    size: s.size,
                    triangle: spike_triangle(s.x - camera_x, s.size, ground_line),
                })
                .collect(),
            platforms: state
                .platforms
                .iter()
                .map(|p| BoxView {
                    rect: to_view(p.bounds()),
                    fatal: false,
                })
                .collect(),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| BoxView {
                    rect: to_view(o.bounds()),
                    fatal: true,
                })
                .collect(),
            checkpoints: state.checkpoints.iter().map(|x| x - camera_x).collect(),
            last_checkpoint: state.last_checkpoint,
            score: state.score,
            level_index: state.level_index,
            world_speed: state.world_speed,
            phase: state.phase,
            paused: state.paused,
            alive: !state.died_last_tick,
        }
    }
}

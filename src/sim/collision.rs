//! Collision detection and response
//!
//! Runs after physics and entity motion. Platform landings resolve first;
//! fatal contact is tested against the post-landing position. A spike tucked
//! under a platform edge can therefore land and kill in the same tick, and
//! the kill wins.

use super::geometry::{Rect, rect_overlap, spike_hit};
use super::state::{Obstacle, Platform, Player, Spike};
use crate::tuning::Tuning;

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    Spike { id: u32 },
    Obstacle { id: u32 },
}

/// Result of a collision pass
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CollisionResult {
    /// Platform the player landed on this tick
    pub landed_on: Option<u32>,
    /// Fatal contact, if any
    pub fatal: Option<Hazard>,
}

/// Whether the player is coming down onto the platform's top edge
///
/// Requires horizontal overlap, a non-negative vertical velocity, and the
/// player's bottom inside `(top, top + height + tolerance)`.
pub fn is_landing(player: &Player, platform: &Rect, tolerance: f32) -> bool {
    let bottom = player.bottom();
    player.pos.x + player.size > platform.x
        && player.pos.x < platform.right()
        && bottom > platform.y
        && bottom < platform.bottom() + tolerance
        && player.vy >= 0.0
}

/// Snap the player onto the first platform it is landing on
pub fn resolve_platforms(player: &mut Player, platforms: &[Platform], tuning: &Tuning) -> Option<u32> {
    let platform = platforms
        .iter()
        .find(|p| is_landing(player, &p.bounds(), tuning.landing_tolerance))?;

    let top = platform.bounds().y;
    player.pos.y = (top - player.size).clamp(0.0, tuning.ground_y());
    player.vy = 0.0;
    player.on_ground = true;
    player.angle = 0.0;
    Some(platform.id)
}

/// First spike or obstacle touching the player box
pub fn find_fatal_contact(
    player: &Rect,
    spikes: &[Spike],
    obstacles: &[Obstacle],
    ground_line: f32,
) -> Option<Hazard> {
    if let Some(spike) = spikes
        .iter()
        .find(|s| spike_hit(player, s.x, s.size, ground_line))
    {
        return Some(Hazard::Spike { id: spike.id });
    }

    obstacles
        .iter()
        .find(|o| rect_overlap(player, &o.bounds()))
        .map(|o| Hazard::Obstacle { id: o.id })
}

/// Full collision pass: landings, then hazards
pub fn resolve_collisions(
    player: &mut Player,
    spikes: &[Spike],
    platforms: &[Platform],
    obstacles: &[Obstacle],
    tuning: &Tuning,
) -> CollisionResult {
    let landed_on = resolve_platforms(player, platforms, tuning);
    let fatal = find_fatal_contact(&player.bounds(), spikes, obstacles, tuning.ground_line());
    CollisionResult { landed_on, fatal }
}

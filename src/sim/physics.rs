//! Player physics integration
//!
//! One call per tick. Both modes end with the player clamped to
//! `[0, ground_y]`.

use super::state::{Player, PlayerMode};
use crate::tuning::Tuning;

/// Integrate the player's vertical motion for one tick
///
/// Returns true if a jump started this tick.
pub fn step_player(player: &mut Player, jump_held: bool, tuning: &Tuning) -> bool {
    match player.mode {
        PlayerMode::Normal => step_normal(player, jump_held, tuning),
        PlayerMode::Float => {
            step_float(player, jump_held, tuning);
            false
        }
    }
}

fn step_normal(player: &mut Player, jump_held: bool, tuning: &Tuning) -> bool {
    let mut jumped = false;
    // Holding jump on the ground (or on landing) starts a jump
    if jump_held && player.on_ground {
        player.vy = tuning.jump_velocity;
        player.on_ground = false;
        jumped = true;
    }

    // Variable height: holding extends the ascent
    if jump_held && player.vy < 0.0 {
        player.vy -= tuning.hold_boost;
    }
    player.vy += tuning.gravity;
    // Snappier fall
    if player.vy > 0.0 {
        player.vy += tuning.fall_boost;
    }
    player.pos.y += player.vy;

    let ground_y = tuning.ground_y();
    if player.pos.y >= ground_y {
        player.pos.y = ground_y;
        player.vy = 0.0;
        player.on_ground = true;
        player.angle = 0.0;
    } else {
        player.on_ground = false;
        player.angle += player.vy * tuning.spin_factor;
    }

    clamp_ceiling(player);
    jumped
}

fn step_float(player: &mut Player, thrust_held: bool, tuning: &Tuning) {
    if thrust_held {
        player.vy -= tuning.float_thrust;
    } else {
        player.vy += tuning.float_thrust;
    }
    let max = tuning.float_max_speed;
    player.vy = player.vy.clamp(-max, max);
    player.pos.y += player.vy;

    let ground_y = tuning.ground_y();
    if player.pos.y >= ground_y {
        player.pos.y = ground_y;
        player.vy = player.vy.min(0.0);
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }

    clamp_ceiling(player);
    // Tilt follows velocity directly, no spin accumulation
    player.angle = player.vy * tuning.float_tilt_factor;
}

/// Keep the player inside the viewport top
fn clamp_ceiling(player: &mut Player) {
    if player.pos.y < 0.0 {
        player.pos.y = 0.0;
        player.vy = player.vy.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grounded() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(&tuning), tuning)
    }

    #[test]
    fn test_resting_player_stays_on_ground() {
        let (mut player, tuning) = grounded();
        for _ in 0..10 {
            assert!(!step_player(&mut player, false, &tuning));
            assert_eq!(player.pos.y, tuning.ground_y());
            assert_eq!(player.vy, 0.0);
            assert!(player.on_ground);
        }
    }

    #[test]
    fn test_jump_leaves_ground_and_spins() {
        let (mut player, tuning) = grounded();
        assert!(step_player(&mut player, true, &tuning));
        assert!(!player.on_ground);
        assert!(player.pos.y < tuning.ground_y());
        assert!(player.vy < 0.0);
        assert!(player.angle != 0.0);
    }

    #[test]
    fn test_holding_jump_goes_higher() {
        let (mut tapped, tuning) = grounded();
        let (mut held, _) = grounded();
        step_player(&mut tapped, true, &tuning);
        step_player(&mut held, true, &tuning);

        let mut apex_tapped = tapped.pos.y;
        let mut apex_held = held.pos.y;
        for _ in 0..80 {
            step_player(&mut tapped, false, &tuning);
            // Stop holding once airborne descent starts so it doesn't re-jump
            let hold = held.vy < 0.0;
            step_player(&mut held, hold, &tuning);
            apex_tapped = apex_tapped.min(tapped.pos.y);
            apex_held = apex_held.min(held.pos.y);
        }
        assert!(apex_held < apex_tapped);
    }

    #[test]
    fn test_ceiling_clamp() {
        let (mut player, tuning) = grounded();
        player.pos.y = 5.0;
        player.on_ground = false;
        player.vy = -30.0;
        step_player(&mut player, false, &tuning);
        assert_eq!(player.pos.y, 0.0);
        assert!(player.vy >= 0.0);
    }

    #[test]
    fn test_float_mode_velocity_is_bounded() {
        let (mut player, tuning) = grounded();
        player.toggle_mode();
        for _ in 0..100 {
            step_player(&mut player, true, &tuning);
            assert!(player.vy.abs() <= tuning.float_max_speed);
            assert!(player.pos.y >= 0.0);
        }
        assert_eq!(player.pos.y, 0.0);
        for _ in 0..100 {
            step_player(&mut player, false, &tuning);
            assert!(player.vy.abs() <= tuning.float_max_speed);
            assert!(player.pos.y <= tuning.ground_y());
        }
        assert_eq!(player.pos.y, tuning.ground_y());
    }

    #[test]
    fn test_float_tilt_tracks_velocity() {
        let (mut player, tuning) = grounded();
        player.toggle_mode();
        player.pos.y = 300.0;
        for _ in 0..5 {
            step_player(&mut player, true, &tuning);
        }
        assert_eq!(player.angle, player.vy * tuning.float_tilt_factor);
        step_player(&mut player, false, &tuning);
        assert_eq!(player.angle, player.vy * tuning.float_tilt_factor);
    }
}

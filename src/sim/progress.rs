//! Level and checkpoint state machine
//!
//! Loading a level and respawning both rebuild every per-attempt value in
//! one call, so nothing from the old attempt survives into the next
//! collision pass.

use super::generate::generate_level;
use super::motion::camera_left;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::EndPolicy;

/// Furthest checkpoint at or behind `player_x` that beats `last`
///
/// Scans every checkpoint; the list is not assumed to be sorted.
pub fn furthest_checkpoint(checkpoints: &[f32], player_x: f32, last: Option<f32>) -> Option<f32> {
    checkpoints
        .iter()
        .copied()
        .filter(|&cp| cp <= player_x && last.is_none_or(|l| cp > l))
        .reduce(f32::max)
}

impl GameState {
    /// Load level `index`, applying the end-of-content policy past the last
    /// template
    pub fn load_level(&mut self, index: usize) {
        let (index, template) = match self.levels.get(index) {
            Some(template) => (index, template.clone()),
            None => match self.tuning.end_policy {
                EndPolicy::Wrap if !self.levels.is_empty() => {
                    log::info!("All {} levels cleared, wrapping to level 1", self.levels.len());
                    (0, self.levels[0].clone())
                }
                EndPolicy::Endless => {
                    let seed = self.tuning.endless_seed;
                    (index, generate_level(seed, index, &self.tuning))
                }
                _ => {
                    log::info!("All levels cleared");
                    self.phase = GamePhase::AllLevelsCleared;
                    self.emit(GameEvent::AllLevelsCleared);
                    return;
                }
            },
        };

        self.level_index = index;
        self.level = template;
        self.phase = GamePhase::Active;
        self.world_speed = self.tuning.world_speed_for_level(index);
        self.last_checkpoint = None;
        let start_x = self.tuning.start_x;
        self.reset_attempt(start_x);

        log::info!(
            "Level {}: length={}, spikes={}, platforms={}, obstacles={}, speed={}",
            index + 1,
            self.level.length,
            self.level.spikes.len(),
            self.level.platforms.len(),
            self.level.obstacles.len(),
            self.world_speed
        );
        self.emit(GameEvent::LevelStarted { index });
    }

    /// Send the player back to the last checkpoint (or the level start)
    pub fn respawn(&mut self) {
        let at_x = self.player.pos.x;
        let respawn_x = self.respawn_x();
        self.deaths += 1;
        self.reset_attempt(respawn_x);
        log::debug!("Died at x={:.1}, respawning at x={:.1}", at_x, respawn_x);
        self.emit(GameEvent::Died { at_x, respawn_x });
    }

    /// Rebuild the attempt around a player standing at `x`
    fn reset_attempt(&mut self, x: f32) {
        let ground_y = self.tuning.ground_y();
        self.player.reset_at(x, ground_y);

        let entities = self.level.instantiate(camera_left(x, self.tuning.start_x));
        self.spikes = entities.spikes;
        self.platforms = entities.platforms;
        self.obstacles = entities.obstacles;
        self.checkpoints = entities.checkpoints;
    }

    /// Move `last_checkpoint` forward if the player passed a new one
    pub fn advance_checkpoint(&mut self) -> bool {
        match furthest_checkpoint(&self.checkpoints, self.player.pos.x, self.last_checkpoint) {
            Some(x) => {
                self.last_checkpoint = Some(x);
                log::debug!("Checkpoint reached at x={:.1}", x);
                self.emit(GameEvent::CheckpointReached { x });
                true
            }
            None => false,
        }
    }

    /// Advance to the next level if the player reached the end
    pub fn check_level_end(&mut self) -> bool {
        if self.player.pos.x < self.level.length {
            return false;
        }
        let cleared = self.level_index;
        log::info!("Level {} cleared (deaths so far: {})", cleared + 1, self.deaths);
        self.emit(GameEvent::LevelCleared { index: cleared });
        self.load_level(cleared + 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LevelTemplate;
    use crate::tuning::Tuning;

    fn level(length: f32) -> LevelTemplate {
        LevelTemplate {
            length,
            ..Default::default()
        }
    }

    #[test]
    fn test_furthest_checkpoint_takes_max() {
        let cps = [900.0, 300.0, 600.0, 1500.0];
        assert_eq!(furthest_checkpoint(&cps, 1000.0, None), Some(900.0));
        assert_eq!(furthest_checkpoint(&cps, 1000.0, Some(900.0)), None);
        assert_eq!(furthest_checkpoint(&cps, 200.0, None), None);
        assert_eq!(furthest_checkpoint(&cps, 600.0, Some(300.0)), Some(600.0));
    }

    #[test]
    fn test_out_of_range_checkpoints_are_harmless() {
        let cps = [-50.0, 1e9];
        assert_eq!(furthest_checkpoint(&cps, 100.0, None), Some(-50.0));
        assert_eq!(furthest_checkpoint(&cps, 100.0, Some(-50.0)), None);
    }

    #[test]
    fn test_finish_policy_enters_terminal_phase() {
        let mut state = GameState::new(Tuning::default(), vec![level(500.0)]);
        state.load_level(1);
        assert_eq!(state.phase, GamePhase::AllLevelsCleared);
        assert!(state.drain_events().contains(&GameEvent::AllLevelsCleared));
    }

    #[test]
    fn test_wrap_policy_returns_to_first_level() {
        let tuning = Tuning {
            end_policy: EndPolicy::Wrap,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, vec![level(500.0), level(700.0)]);
        state.load_level(5);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.level_index, 0);
        assert_eq!(state.level.length, 500.0);
    }

    #[test]
    fn test_endless_policy_generates() {
        let tuning = Tuning {
            end_policy: EndPolicy::Endless,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, vec![level(500.0)]);
        state.load_level(1);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.level_index, 1);
        assert!(state.level.length >= 3000.0);
        assert_eq!(state.player.pos.x, state.tuning.start_x);
    }

    #[test]
    fn test_endless_policy_keeps_going() {
        let tuning = Tuning {
            end_policy: EndPolicy::Endless,
            ..Default::default()
        };
        let mut state = GameState::with_builtin_levels(tuning);
        for index in 3..40 {
            state.load_level(index);
            assert_eq!(state.phase, GamePhase::Active);
            assert_eq!(state.level_index, index);
            assert!(state.world_speed <= state.tuning.max_world_speed);
        }
        // Clearing a generated level moves on to the next one
        state.player.pos.x = state.level.length;
        assert!(state.check_level_end());
        assert_eq!(state.level_index, 40);
    }

    #[test]
    fn test_empty_level_list_is_finished() {
        let state = GameState::new(Tuning::default(), Vec::new());
        assert_eq!(state.phase, GamePhase::AllLevelsCleared);
    }
}

//! Procedural level generation for endless mode
//!
//! Deterministic: the same seed and level index always yield the same
//! template. Levels are built from short segments laid out left to right
//! with enough run-up between them to react at the current world speed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::level::{LevelTemplate, ObstacleTemplate, PlatformTemplate, SpikeTemplate};
use crate::tuning::Tuning;

/// Empty run-up before the first segment
const LEAD_IN: f32 = 500.0;
/// Checkpoint spacing
const CHECKPOINT_EVERY: f32 = 1500.0;
/// Ticks of clear ground between segments at the level's speed
const MIN_GAP_TICKS: f32 = 45.0;

/// Generate the template for `index` from a run seed
pub fn generate_level(seed: u64, index: usize, tuning: &Tuning) -> LevelTemplate {
    let level_seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add((index as u64).wrapping_mul(1442695040888963407));
    let mut rng = Pcg32::seed_from_u64(level_seed);

    let ground = tuning.ground_line();
    let speed = tuning.world_speed_for_level(index);
    let min_gap = (speed * MIN_GAP_TICKS).max(200.0);
    let length = (3000.0 + index as f32 * 400.0).min(8000.0);

    let mut level = LevelTemplate {
        length,
        ..Default::default()
    };

    let mut x = tuning.start_x + LEAD_IN;
    while x < length - min_gap {
        let roll = rng.random_range(0..100u32);
        let width = match roll {
            // Single spike
            0..40 => {
                let size = rng.random_range(40.0..60.0);
                level.spikes.push(SpikeTemplate { x, size });
                size
            }
            // Spike pair or triple
            40..60 => {
                let count = rng.random_range(2..=3);
                let size = 50.0;
                for i in 0..count {
                    level.spikes.push(SpikeTemplate {
                        x: x + i as f32 * size,
                        size,
                    });
                }
                size * count as f32
            }
            // Platform bridging a spike row
            60..80 => {
                let width = rng.random_range(180.0..280.0);
                let above = rng.random_range(100.0..160.0);
                let range = if rng.random_bool(0.5) { rng.random_range(20.0..80.0) } else { 0.0 };
                level.platforms.push(PlatformTemplate {
                    x,
                    y: ground - above,
                    width,
                    height: 20.0,
                    range,
                    speed: if range > 0.0 { rng.random_range(1.0..3.0) } else { 0.0 },
                });
                let mut sx = x + 40.0;
                while sx + 50.0 <= x + width - 40.0 {
                    level.spikes.push(SpikeTemplate { x: sx, size: 50.0 });
                    sx += 50.0;
                }
                width
            }
            // Airborne obstacle to duck under
            _ => {
                let size = rng.random_range(40.0..55.0);
                let above = rng.random_range(130.0..180.0);
                level.obstacles.push(ObstacleTemplate {
                    x,
                    y: ground - above - size,
                    size,
                    range: rng.random_range(40.0..100.0),
                    speed: rng.random_range(1.5..3.5),
                });
                size
            }
        };
        x += width + min_gap + rng.random_range(0.0..min_gap);
    }

    let mut cp = CHECKPOINT_EVERY;
    while cp < length {
        level.checkpoints.push(cp);
        cp += CHECKPOINT_EVERY;
    }

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let tuning = Tuning::default();
        assert_eq!(generate_level(42, 3, &tuning), generate_level(42, 3, &tuning));
        assert_ne!(generate_level(42, 3, &tuning), generate_level(42, 4, &tuning));
    }

    #[test]
    fn test_generated_level_is_playable_shape() {
        let tuning = Tuning::default();
        for index in 0..10 {
            let level = generate_level(7, index, &tuning);
            assert!(level.length >= 3000.0);
            assert!(!level.spikes.is_empty() || !level.obstacles.is_empty());
            // Lead-in is clear
            let first_spike = level.spikes.iter().map(|s| s.x).fold(f32::MAX, f32::min);
            assert!(first_spike >= tuning.start_x + LEAD_IN);
            assert!(level.spikes.iter().all(|s| s.size > 0.0 && s.x < level.length));
            assert!(level.checkpoints.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_deep_level_indices() {
        let tuning = Tuning::default();
        for index in (13..200).chain([usize::MAX / 2, usize::MAX]) {
            let level = generate_level(tuning.endless_seed, index, &tuning);
            assert_eq!(level.length, 8000.0);
            assert!(!level.spikes.is_empty() || !level.obstacles.is_empty());
        }
    }
}

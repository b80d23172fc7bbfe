//! High score leaderboard system
//!
//! Persisted as a JSON file, tracks top 10 scores.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Survival ticks
    pub score: u64,
    /// Level reached (0-based)
    pub level: usize,
    pub deaths: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: u64,
}

impl HighScoreEntry {
    /// Higher score wins; on a tie the run with fewer deaths does
    fn ranked_below(&self, score: u64, deaths: u32) -> bool {
        score > self.score || (score == self.score && deaths < self.deaths)
    }
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a run qualifies for the leaderboard
    pub fn qualifies(&self, score: u64, deaths: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.entries.len() < MAX_HIGH_SCORES
            || self.entries.last().is_none_or(|e| e.ranked_below(score, deaths))
    }

    /// Get the rank a run would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64, deaths: u32) -> Option<usize> {
        if !self.qualifies(score, deaths) {
            return None;
        }
        Some(self.insertion_index(score, deaths) + 1)
    }

    /// Add a run to the leaderboard (if it qualifies)
    ///
    /// Returns the rank achieved (1-indexed) or None if didn't qualify.
    pub fn add_score(&mut self, score: u64, level: usize, deaths: u32, timestamp: u64) -> Option<usize> {
        if !self.qualifies(score, deaths) {
            return None;
        }
        let index = self.insertion_index(score, deaths);
        self.entries.insert(
            index,
            HighScoreEntry {
                score,
                level,
                deaths,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(index + 1)
    }

    /// First slot holding a run this one beats; equal runs queue behind
    fn insertion_index(&self, score: u64, deaths: u32) -> usize {
        self.entries
            .iter()
            .position(|e| e.ranked_below(score, deaths))
            .unwrap_or(self.entries.len())
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score so far (0 when empty)
    pub fn best(&self) -> u64 {
        self.entries.first().map(|e| e.score).unwrap_or(0)
    }

    /// Load high scores from a JSON file, starting fresh if missing or corrupt
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Ok(json) = std::fs::read_to_string(path) {
            match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    return scores;
                }
                Err(e) => log::warn!("Ignoring corrupt high score file {}: {}", path.display(), e),
            }
        }

        log::info!("No high scores found, starting fresh");
        Self::new()
    }

    /// Save high scores to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

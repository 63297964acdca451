//! Tournament configuration, loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::match_runner::MatchConfig;

/// Tournament-wide settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Games per engine pairing
    pub games_per_match: u32,
    /// Time budget per move in milliseconds (0 = no limit)
    pub move_time_ms: u64,
    /// Games longer than this are adjudicated as draws
    pub max_plies: u32,
    /// Random plies before the engines take over
    pub opening_plies: u32,
    /// Engines entered in gauntlets, e.g. "minimax:6" or "random"
    pub engines: Vec<String>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            move_time_ms: 0,
            max_plies: 200,
            opening_plies: 0,
            engines: vec!["minimax:6".to_string(), "random".to_string()],
        }
    }
}

impl TournamentConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Per-move time budget, if any
    pub fn move_time(&self) -> Option<Duration> {
        if self.move_time_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.move_time_ms))
        }
    }

    /// Build the per-match settings this config implies
    pub fn match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.games_per_match,
            move_time: self.move_time(),
            opening_plies: self.opening_plies,
            max_plies: self.max_plies,
            alternate_colors: true,
            verbose,
        }
    }
}

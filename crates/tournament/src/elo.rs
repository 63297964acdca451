//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting rating for new engines
pub const DEFAULT_RATING: f64 = 1500.0;

/// K-factor for rating updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// Aggregated result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchScore {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from the first engine's side (1 for win, 0.5 for draw,
    /// 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Record of a single match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub engine1: String,
    pub engine2: String,
    pub score: MatchScore,
    pub timestamp: String,
    pub rating_change: f64,
}

/// Elo ratings for every engine that has played
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    /// Ratings by engine name
    pub ratings: HashMap<String, f64>,
    /// Number of games played by each engine
    pub games_played: HashMap<String, u32>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a leaderboard from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save the leaderboard to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Get or initialize the rating for an engine
    pub fn rating(&mut self, engine: &str) -> f64 {
        *self
            .ratings
            .entry(engine.to_string())
            .or_insert(DEFAULT_RATING)
    }

    /// Update both ratings after a match. The match counts as
    /// `total_games` rated games at the aggregate score.
    pub fn record_match(&mut self, engine1: &str, engine2: &str, score: &MatchScore) {
        let r1 = self.rating(engine1);
        let r2 = self.rating(engine2);
        let expected = expected_score(r1, r2);
        let actual = score.score();

        let games = score.total_games() as f64;
        let rating_change = K_FACTOR * games * (actual - expected);

        self.ratings.insert(engine1.to_string(), r1 + rating_change);
        self.ratings.insert(engine2.to_string(), r2 - rating_change);

        *self.games_played.entry(engine1.to_string()).or_insert(0) += score.total_games();
        *self.games_played.entry(engine2.to_string()).or_insert(0) += score.total_games();

        self.history.push(MatchRecord {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            score: score.clone(),
            timestamp: unix_timestamp(),
            rating_change,
        });
    }

    /// Ratings sorted best first
    pub fn standings(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print standings to stdout
    pub fn print_standings(&self) {
        println!("\n=== Engine Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Engine", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.standings() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

/// Expected score of a player rated `rating` against `opponent`.
pub fn expected_score(rating: f64, opponent: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((opponent - rating) / 400.0))
}

/// Seconds since the epoch, enough precision for match records
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_expect_half() {
        assert!((expected_score(1500.0, 1500.0) - 0.5).abs() < 1e-9);
        assert!(expected_score(1700.0, 1500.0) > 0.5);
        assert!(expected_score(1500.0, 1700.0) < 0.5);
    }

    #[test]
    fn test_winner_gains_loser_drops() {
        let mut board = Leaderboard::new();
        let score = MatchScore {
            wins: 10,
            losses: 0,
            draws: 0,
        };
        board.record_match("engine1", "engine2", &score);

        assert!(board.rating("engine1") > DEFAULT_RATING);
        assert!(board.rating("engine2") < DEFAULT_RATING);
        assert_eq!(board.games_played["engine1"], 10);
        assert_eq!(board.history.len(), 1);
    }

    #[test]
    fn test_ratings_are_conserved() {
        let mut board = Leaderboard::new();
        let score = MatchScore {
            wins: 6,
            losses: 3,
            draws: 1,
        };
        board.record_match("a", "b", &score);

        let total: f64 = board.ratings.values().sum();
        assert!((total - 2.0 * DEFAULT_RATING).abs() < 1e-6);
    }

    #[test]
    fn test_match_score_aggregation() {
        let mut score = MatchScore::new();
        score.add(GameResult::Win);
        score.add(GameResult::Win);
        score.add(GameResult::Draw);
        score.add(GameResult::Loss);

        assert_eq!(score.total_games(), 4);
        assert!((score.score() - 0.625).abs() < 1e-9);
        assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
        assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut board = Leaderboard::new();
        board.record_match(
            "a",
            "b",
            &MatchScore {
                wins: 2,
                losses: 1,
                draws: 1,
            },
        );

        let path = std::env::temp_dir().join("checkers_leaderboard_test.json");
        let path = path.to_string_lossy().to_string();
        board.save(&path).unwrap();
        let loaded = Leaderboard::load(&path).unwrap();
        assert_eq!(loaded.history.len(), 1);
        assert_eq!(loaded.ratings.len(), 2);
        let _ = std::fs::remove_file(&path);
    }
}

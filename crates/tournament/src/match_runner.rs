//! Match runner for playing games between engines

use crate::elo::{GameResult, MatchScore};
use checkers_core::{find_possible_moves, Color, Deadline, Engine, GameState};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Duration;

/// Settings for a match between two engines
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Time budget per move (None = no limit)
    pub move_time: Option<Duration>,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Games longer than this are adjudicated as draws
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            move_time: None,
            opening_plies: 0,
            max_plies: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Fresh deadline for one move
    fn deadline(&self) -> Deadline {
        match self.move_time {
            Some(budget) => Deadline::from_budget(budget),
            None => Deadline::unlimited(),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// Returns the score from engine1's side.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchScore {
        let mut score = MatchScore::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_red = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_red {
                self.play_game(engine1, engine2)
            } else {
                self.play_game(engine2, engine1).flipped()
            };

            score.add(game_result);

            if self.config.verbose {
                let color = if engine1_red { "R" } else { "W" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    score.wins,
                    score.losses,
                    score.draws
                );
            }
        }

        score
    }

    /// Play a single game, returns the result from red's side.
    fn play_game(&self, red: &mut dyn Engine, white: &mut dyn Engine) -> GameResult {
        let mut state = GameState::startpos();
        red.new_game();
        white.new_game();

        // Randomized opening so repeated games diverge
        let mut rng = thread_rng();
        for _ in 0..self.config.opening_plies {
            let successors = find_possible_moves(&state);
            match successors.choose(&mut rng) {
                Some(next) => state = next.clone(),
                None => break,
            }
        }

        for _ply in 0..self.config.max_plies {
            if state.is_draw() {
                return GameResult::Draw;
            }
            match state.winner() {
                Some(Color::Red) => return GameResult::Win,
                Some(Color::White) => return GameResult::Loss,
                None => {}
            }

            // Fresh deadline for each move (resets the clock)
            let deadline = self.config.deadline();
            let result = match state.next_player {
                Color::Red => red.select_move(&state, &deadline),
                Color::White => white.select_move(&state, &deadline),
            };
            state = result.state;
        }

        // Ply cap reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
) -> MatchScore {
    let config = MatchConfig {
        num_games,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

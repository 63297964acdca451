//! Tournament Runner for checkers engines
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across engine versions
//! - Generating reports for strength comparisons
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the search engine and the random baseline
//! cargo run -p tournament -- match minimax:6 random --games 20
//!
//! # Run a gauntlet (one engine vs all configured opponents)
//! cargo run -p tournament -- gauntlet minimax:8 --games 10
//!
//! # Show the current leaderboard
//! cargo run -p tournament -- leaderboard
//! ```

mod config;
mod elo;
mod match_runner;
mod results;

pub use config::*;
pub use elo::*;
pub use match_runner::*;
pub use results::*;

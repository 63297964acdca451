//! Advisory per-move time budgets.
//!
//! A `Deadline` tells an engine how much wall-clock time the caller has
//! allotted for the current move. Engines treat it as advisory: the
//! fixed-depth search never aborts a tree in flight, and harnesses only
//! log when a move ran past its budget. Callers pick a search depth
//! that fits their budget empirically.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn unlimited() -> Self {
        Self { expires_at: None }
    }

    /// Expires `budget` from now.
    pub fn from_budget(budget: Duration) -> Self {
        Self {
            expires_at: Some(Instant::now() + budget),
        }
    }

    /// Expires at the given instant.
    pub fn at(instant: Instant) -> Self {
        Self {
            expires_at: Some(instant),
        }
    }

    /// Time left on the budget, `None` when unlimited.
    pub fn remaining(&self) -> Option<Duration> {
        self.expires_at
            .map(|at| at.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::unlimited()
    }
}

#[cfg(test)]
#[path = "deadline_tests.rs"]
mod deadline_tests;

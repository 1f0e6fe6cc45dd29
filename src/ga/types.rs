//! Solver state and run results.

use std::time::Duration;

/// Lifecycle of a [`GaSolver`](super::GaSolver).
///
/// `Initialized → Running { generation } → Terminated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverState {
    /// Initial population created, no generation run yet.
    Initialized,
    /// `generation` (0-based) has completed and more remain.
    Running {
        /// Last completed generation.
        generation: usize,
    },
    /// All generations have run.
    Terminated,
}

/// Result of a genetic run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Shortest closed tour found during the entire run.
    pub best_tour: Vec<usize>,

    /// Closed length of `best_tour`.
    pub best_length: u64,

    /// Coordinates of `best_tour`, starting city repeated at the end.
    pub best_path: Vec<(f64, f64)>,

    /// Number of generations completed.
    pub generations: usize,

    /// Generations in which the best length improved, ascending.
    pub improvement_log: Vec<usize>,

    /// Best length after each completed generation.
    pub length_history: Vec<u64>,

    /// Wall-clock time spent in the generation loop.
    pub elapsed: Duration,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl GaResult {
    /// Generation of the most recent improvement.
    pub fn last_improvement(&self) -> Option<usize> {
        self.improvement_log.last().copied()
    }
}

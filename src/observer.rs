//! Per-step events emitted by the solvers.
//!
//! Solvers never render or print. They hand structured events to an
//! [`Observer`]; a renderer, a CLI or a test decides what to do with them.

/// A new shortest path found by the brute-force search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Incumbent {
    /// City indices in visiting order.
    pub tour: Vec<usize>,
    /// City coordinates in visiting order (open path).
    pub path: Vec<(f64, f64)>,
    /// Open path length.
    pub length: u64,
    /// 1-based ordinal of the permutation that produced it.
    pub permutation: u64,
}

/// State of the genetic search after one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// Generation just completed (0-based).
    pub generation: usize,
    /// Best closed tour length seen so far.
    pub best_length: u64,
    /// Best tour seen so far.
    pub best_tour: Vec<usize>,
    /// Coordinates of the best tour, starting city repeated at the end.
    pub best_path: Vec<(f64, f64)>,
    /// Generations in which the best length improved, ascending.
    pub improvement_log: Vec<usize>,
}

impl GenerationReport {
    /// Generation of the most recent improvement.
    pub fn last_improvement(&self) -> Option<usize> {
        self.improvement_log.last().copied()
    }
}

/// Receives solver events.
///
/// Both methods default to no-ops, so an observer only implements what it
/// consumes. `()` is the silent observer.
pub trait Observer {
    /// Called each time the brute-force search finds a strictly shorter path.
    fn on_incumbent(&mut self, _incumbent: &Incumbent) {}

    /// Called at the end of every genetic generation.
    fn on_generation(&mut self, _report: &GenerationReport) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_incumbent(&mut self, incumbent: &Incumbent) {
        (**self).on_incumbent(incumbent);
    }

    fn on_generation(&mut self, report: &GenerationReport) {
        (**self).on_generation(report);
    }
}

/// Observer that keeps every event, in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Brute-force incumbents.
    pub incumbents: Vec<Incumbent>,
    /// Genetic generation reports.
    pub generations: Vec<GenerationReport>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Observer for Recorder {
    fn on_incumbent(&mut self, incumbent: &Incumbent) {
        self.incumbents.push(incumbent.clone());
    }

    fn on_generation(&mut self, report: &GenerationReport) {
        self.generations.push(report.clone());
    }
}

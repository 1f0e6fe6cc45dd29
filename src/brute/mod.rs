//! Brute-force search.
//!
//! Enumerates every permutation of the city set, measures each as an
//! **open** path (no edge back to the start) and keeps the strictly
//! shortest one seen so far. Because the search is exhaustive the final
//! incumbent is the global optimum. Cost is O(N·N!), so the city count is
//! capped by [`BruteForceConfig::max_cities`].
//!
//! # Key Types
//!
//! - [`BruteForceConfig`]: city-count ceiling
//! - [`BruteForceSolver`]: validated solver owning cities and distances
//! - [`BruteForceResult`]: optimum, elapsed time and run statistics

mod config;
mod permutations;
mod runner;

pub use config::{BruteForceConfig, MAX_TRACTABLE_CITIES};
pub use permutations::{factorial, next_permutation};
pub use runner::{BruteForceResult, BruteForceSolver};

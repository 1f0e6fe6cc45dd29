//! Mating-pool construction (roulette wheel).
//!
//! The normalized fitness vector is turned into P+1 cumulative breakpoints
//! `[0, f0, f0+f1, .., 1]`. Every draw samples `r` in `[0, 1)` and takes
//! the breakpoint **nearest** to `r`; breakpoint `k` selects member `k-1`.
//! Nearest-breakpoint lookup approximates interval search and may pick a
//! neighbor of the exact roulette member. Breakpoint 0 wraps around to the
//! last member.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, §1.4 (roulette wheel)

use rand::Rng;

/// Prefix sums of `fitness`, prepended with 0 (P+1 entries).
pub fn cumulative_breakpoints(fitness: &[f64]) -> Vec<f64> {
    let mut breakpoints = Vec::with_capacity(fitness.len() + 1);
    let mut acc = 0.0;
    breakpoints.push(acc);
    for &f in fitness {
        acc += f;
        breakpoints.push(acc);
    }
    breakpoints
}

/// Index of the breakpoint closest to `r`; the lowest index wins ties.
///
/// Equivalent to a linear arg-min of `|breakpoints[k] - r|`, in
/// O(log P) because breakpoints are non-decreasing.
///
/// # Panics
/// Panics if `breakpoints` is empty.
pub fn nearest_breakpoint(breakpoints: &[f64], r: f64) -> usize {
    assert!(!breakpoints.is_empty(), "no breakpoints to select from");

    let above = breakpoints.partition_point(|&b| b < r);
    if above == 0 {
        return 0;
    }
    let below_value = breakpoints[above - 1];
    // First occurrence of the value just below `r`.
    let below = breakpoints.partition_point(|&b| b < below_value);
    if above == breakpoints.len() {
        return below;
    }
    if r - below_value <= breakpoints[above] - r {
        below
    } else {
        above
    }
}

/// Population member selected by breakpoint `k`.
pub fn member_for_breakpoint(k: usize, population_size: usize) -> usize {
    if k == 0 {
        population_size - 1
    } else {
        k - 1
    }
}

/// Index of the fittest member; the first one wins ties.
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn fittest_index(fitness: &[f64]) -> usize {
    assert!(!fitness.is_empty(), "cannot pick the fittest of an empty population");
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}

/// Builds a mating pool of the same size as `population`.
///
/// Slot 0 always holds the fittest member of `population`.
///
/// # Panics
/// Panics if `population` is empty or `fitness` has a different length.
pub fn mating_pool<R: Rng>(
    population: &[Vec<usize>],
    fitness: &[f64],
    rng: &mut R,
) -> Vec<Vec<usize>> {
    assert_eq!(
        population.len(),
        fitness.len(),
        "fitness must align with population"
    );
    let n = population.len();
    let breakpoints = cumulative_breakpoints(fitness);

    let mut pool: Vec<Vec<usize>> = (0..n)
        .map(|_| {
            let r: f64 = rng.random();
            let k = nearest_breakpoint(&breakpoints, r);
            population[member_for_breakpoint(k, n)].clone()
        })
        .collect();

    pool[0] = population[fittest_index(fitness)].clone();
    pool
}

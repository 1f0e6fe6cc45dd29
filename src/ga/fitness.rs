//! Fitness evaluation.
//!
//! Each tour is measured as a **closed** loop. Fitness is the inverse of
//! that length, normalized over the population into a probability
//! distribution for roulette selection.

use crate::model::DistanceMatrix;

/// Fitness assigned to a zero-length tour instead of dividing by zero.
pub const ZERO_LENGTH_FITNESS: f64 = 1.0e12;

/// Best tour seen across all generations of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestSoFar {
    length: u64,
    tour: Vec<usize>,
    improvement_log: Vec<usize>,
}

impl Default for BestSoFar {
    fn default() -> Self {
        Self::new()
    }
}

impl BestSoFar {
    /// Nothing seen yet: the length is `u64::MAX`.
    pub fn new() -> Self {
        Self {
            length: u64::MAX,
            tour: Vec::new(),
            improvement_log: Vec::new(),
        }
    }

    /// Best closed length, `u64::MAX` before the first evaluation.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Best tour, empty before the first evaluation.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Generations in which the best length improved, ascending.
    pub fn improvement_log(&self) -> &[usize] {
        &self.improvement_log
    }

    /// Adopts `tour` if it is strictly shorter. Returns whether it was adopted.
    fn offer(&mut self, tour: &[usize], length: u64) -> bool {
        if length < self.length {
            self.length = length;
            self.tour.clear();
            self.tour.extend_from_slice(tour);
            true
        } else {
            false
        }
    }
}

/// Evaluates a population.
///
/// Updates `best` with every strictly shorter tour (in population order)
/// and, if anything improved, appends `generation` to its improvement log
/// once. Returns the normalized fitness vector, aligned with `population`.
pub fn evaluate(
    population: &[Vec<usize>],
    matrix: &DistanceMatrix,
    generation: usize,
    best: &mut BestSoFar,
    parallel: bool,
) -> Vec<f64> {
    let lengths = closed_lengths(population, matrix, parallel);

    let mut improved = false;
    for (tour, &length) in population.iter().zip(&lengths) {
        improved |= best.offer(tour, length);
    }
    if improved {
        best.improvement_log.push(generation);
    }

    normalize(lengths.iter().map(|&len| raw_fitness(len)).collect())
}

/// `1 / length`, or [`ZERO_LENGTH_FITNESS`] for a zero-length tour.
pub fn raw_fitness(length: u64) -> f64 {
    if length == 0 {
        ZERO_LENGTH_FITNESS
    } else {
        1.0 / length as f64
    }
}

/// Scales `values` so they sum to 1.
///
/// An empty or all-zero input is returned unchanged.
pub fn normalize(mut values: Vec<f64>) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        for v in &mut values {
            *v /= total;
        }
    }
    values
}

#[cfg(feature = "parallel")]
fn closed_lengths(
    population: &[Vec<usize>],
    matrix: &DistanceMatrix,
    parallel: bool,
) -> Vec<u64> {
    use rayon::prelude::*;

    if parallel {
        population
            .par_iter()
            .map(|tour| matrix.closed_length(tour))
            .collect()
    } else {
        population.iter().map(|tour| matrix.closed_length(tour)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn closed_lengths(
    population: &[Vec<usize>],
    matrix: &DistanceMatrix,
    _parallel: bool,
) -> Vec<u64> {
    population.iter().map(|tour| matrix.closed_length(tour)).collect()
}

//! Dense pairwise distance matrix.

use super::city::City;
use crate::error::{TspError, TspResult};

/// A dense n×n distance matrix stored in row-major order.
///
/// Distances are Euclidean, rounded to the nearest integer (ties to even).
/// Integer distances keep tour-length comparisons exact.
///
/// # Examples
///
/// ```
/// use u_tsp::model::{cities_from_points, DistanceMatrix};
///
/// let cities = cities_from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// let dm = DistanceMatrix::from_cities(&cities).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix from city coordinates.
    ///
    /// Cities may arrive in any order, but their indices must be exactly
    /// `0..N`; row `i` belongs to the city whose `index` is `i`.
    ///
    /// Fails with [`TspError::InvalidInput`] when a distance does not fit in
    /// a `u64`, or when N times the longest segment does not, since no closed
    /// tour length could then be summed exactly.
    pub fn from_cities(cities: &[City]) -> TspResult<Self> {
        check_index_set(cities)?;

        let n = cities.len();
        let mut data = vec![0; n * n];
        for (a, ca) in cities.iter().enumerate() {
            for cb in &cities[a + 1..] {
                let d = rounded_distance(ca, cb)?;
                data[ca.index * n + cb.index] = d;
                data[cb.index * n + ca.index] = d;
            }
        }

        let matrix = Self { data, size: n };
        matrix.check_length_bound()?;
        Ok(matrix)
    }

    /// Distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest single-segment distance.
    pub fn max_distance(&self) -> u64 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    /// Returns `true` if `d(i, j) == d(j, i)` everywhere and the diagonal is zero.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.get(i, i) == 0 && (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i))
        })
    }

    /// Every tour length is at most `size × max_distance`; that bound must fit.
    fn check_length_bound(&self) -> TspResult<()> {
        let max = self.max_distance();
        match max.checked_mul(self.size as u64) {
            Some(_) => Ok(()),
            None => Err(TspError::input(format!(
                "tour lengths over {} cities with segments up to {} overflow u64",
                self.size, max
            ))),
        }
    }

    /// Length of the open path through `tour`: N-1 segments, no return edge.
    pub fn open_length(&self, tour: &[usize]) -> u64 {
        tour.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Length of the closed tour: the open path plus the edge back to the start.
    pub fn closed_length(&self, tour: &[usize]) -> u64 {
        match (tour.first(), tour.last()) {
            (Some(&first), Some(&last)) => self.open_length(tour) + self.get(last, first),
            _ => 0,
        }
    }
}

fn rounded_distance(a: &City, b: &City) -> TspResult<u64> {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let d = (dx * dx + dy * dy).sqrt().round_ties_even();
    // 2^64 is exact in f64; anything below it converts without clamping.
    if d.is_finite() && d < u64::MAX as f64 {
        Ok(d as u64)
    } else {
        Err(TspError::input(format!(
            "distance between cities {} and {} is out of range",
            a.index, b.index
        )))
    }
}

/// Indices must cover `0..N` exactly once.
fn check_index_set(cities: &[City]) -> TspResult<()> {
    let n = cities.len();
    let mut seen = vec![false; n];
    for city in cities {
        if city.index >= n {
            return Err(TspError::input(format!(
                "city index {} out of range for {} cities",
                city.index, n
            )));
        }
        if seen[city.index] {
            return Err(TspError::input(format!(
                "duplicate city index {}",
                city.index
            )));
        }
        seen[city.index] = true;
    }
    Ok(())
}

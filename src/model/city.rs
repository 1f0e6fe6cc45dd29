//! Cities and random city generation.

use crate::error::{TspError, TspResult};
use rand::Rng;
use std::collections::HashSet;

/// A city on the plane.
///
/// `index` is the city's stable identity and its row/column in the
/// [`DistanceMatrix`](super::DistanceMatrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Position in `0..N`.
    pub index: usize,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl City {
    /// Creates a city.
    pub fn new(index: usize, x: f64, y: f64) -> Self {
        Self { index, x, y }
    }

    /// Coordinates as a tuple.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Builds cities from plain coordinates, indexing them in order.
///
/// ```
/// use u_tsp::model::cities_from_points;
///
/// let cities = cities_from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert_eq!(cities[1].index, 1);
/// ```
pub fn cities_from_points(points: &[(f64, f64)]) -> Vec<City> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| City::new(i, x, y))
        .collect()
}

/// Bounding box for random city generation.
///
/// Cities are placed at integer coordinates in
/// `[margin, width - margin] × [margin, height - margin]`, which keeps a
/// city marker of radius `margin` fully on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Distance kept from every edge.
    pub margin: u32,
}

impl Bounds {
    /// Creates a bounding box.
    pub fn new(width: u32, height: u32, margin: u32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Canvas used by the brute-force view: 600×500, margin 5.
    pub fn brute_force_canvas() -> Self {
        Self::new(600, 500, 5)
    }

    /// Canvas used by the genetic view: 700×600, margin 5.
    pub fn genetic_canvas() -> Self {
        Self::new(700, 600, 5)
    }

    /// Checks that the usable area is non-empty.
    pub fn validate(&self) -> TspResult<()> {
        let span = self.margin.saturating_mul(2);
        if span > self.width || span > self.height {
            return Err(TspError::config(format!(
                "margin {} leaves no room in a {}x{} canvas",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::brute_force_canvas()
    }
}

/// Generates `n` cities uniformly inside `bounds`.
///
/// Coordinates may coincide; callers that need a tour should rely on
/// solver construction to reject degenerate sets.
pub fn generate_cities<R: Rng>(n: usize, bounds: &Bounds, rng: &mut R) -> TspResult<Vec<City>> {
    bounds.validate()?;
    let (lo_x, hi_x) = (bounds.margin, bounds.width - bounds.margin);
    let (lo_y, hi_y) = (bounds.margin, bounds.height - bounds.margin);

    Ok((0..n)
        .map(|i| {
            let x = rng.random_range(lo_x..=hi_x);
            let y = rng.random_range(lo_y..=hi_y);
            City::new(i, f64::from(x), f64::from(y))
        })
        .collect())
}

/// Counts distinct coordinate pairs.
pub fn distinct_coordinates(cities: &[City]) -> usize {
    // +0.0 folds -0.0 into 0.0 so both hash alike.
    cities
        .iter()
        .map(|c| ((c.x + 0.0).to_bits(), (c.y + 0.0).to_bits()))
        .collect::<HashSet<_>>()
        .len()
}

/// Rejects non-finite coordinates and sets with fewer than two distinct points.
pub fn validate_cities(cities: &[City]) -> TspResult<()> {
    if let Some(bad) = cities.iter().find(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return Err(TspError::input(format!(
            "city {} has non-finite coordinates ({}, {})",
            bad.index, bad.x, bad.y
        )));
    }
    let distinct = distinct_coordinates(cities);
    if distinct < 2 {
        return Err(TspError::DegenerateInput { distinct });
    }
    Ok(())
}

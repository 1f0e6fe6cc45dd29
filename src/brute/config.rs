//! Brute-force configuration.

use crate::error::{TspError, TspResult};

/// Hard ceiling on the city count: 12! ≈ 4.8·10⁸ permutations.
pub const MAX_TRACTABLE_CITIES: usize = 12;

/// Configuration for the brute-force search.
///
/// # Examples
///
/// ```
/// use u_tsp::brute::BruteForceConfig;
///
/// let config = BruteForceConfig::default();
/// assert_eq!(config.max_cities, 10);
/// assert!(config.check_city_count(9).is_ok());
/// assert!(config.check_city_count(11).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BruteForceConfig {
    /// Largest accepted city count.
    ///
    /// Runtime grows as N!; 10 cities (3 628 800 permutations) finish in
    /// well under a second, each extra city multiplies that by N.
    pub max_cities: usize,
}

impl Default for BruteForceConfig {
    fn default() -> Self {
        Self { max_cities: 10 }
    }
}

impl BruteForceConfig {
    /// Sets the city-count ceiling.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_cities < 2 {
            return Err(TspError::config("max_cities must be at least 2"));
        }
        if self.max_cities > MAX_TRACTABLE_CITIES {
            return Err(TspError::config(format!(
                "max_cities {} exceeds the tractable limit of {}",
                self.max_cities, MAX_TRACTABLE_CITIES
            )));
        }
        Ok(())
    }

    /// Checks a city count against `2..=max_cities`.
    pub fn check_city_count(&self, n: usize) -> TspResult<()> {
        if n < 2 {
            return Err(TspError::config(format!(
                "brute force needs at least 2 cities, got {n}"
            )));
        }
        if n > self.max_cities {
            return Err(TspError::config(format!(
                "{n} cities exceeds the brute-force ceiling of {}",
                self.max_cities
            )));
        }
        Ok(())
    }
}

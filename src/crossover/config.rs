//! Recombination configuration.
//!
//! [`RecombinationConfig`] holds the parameters that control how a parent
//! pool is fed to a crossover operator by [`RecombinationRunner`](super::RecombinationRunner).

use crate::random::RngRandomization;
use rand::rngs::StdRng;

/// Configuration for one recombination pass over a parent pool.
///
/// # Defaults
///
/// ```
/// use u_crossover::crossover::RecombinationConfig;
///
/// let config = RecombinationConfig::default();
/// assert!((config.crossover_probability - 0.75).abs() < 1e-10);
/// assert!(!config.parallel);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_crossover::crossover::RecombinationConfig;
///
/// let config = RecombinationConfig::default()
///     .with_crossover_probability(0.9)
///     .with_parallel(true)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecombinationConfig {
    /// Probability of crossing a group of parents (0.0–1.0).
    ///
    /// Groups that are not crossed contribute no offspring.
    pub crossover_probability: f64,

    /// Whether to cross groups in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature; otherwise groups are
    /// crossed sequentially.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for RecombinationConfig {
    fn default() -> Self {
        Self {
            crossover_probability: 0.75,
            parallel: false,
            seed: None,
        }
    }
}

impl RecombinationConfig {
    /// Sets the crossover probability.
    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability.clamp(0.0, 1.0);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the randomization service described by [`seed`](Self::seed).
    pub fn randomization(&self) -> RngRandomization<StdRng> {
        match self.seed {
            Some(seed) => RngRandomization::seeded(seed),
            None => RngRandomization::from_entropy(),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.crossover_probability) {
            return Err(format!(
                "crossover_probability must be within [0, 1], got {}",
                self.crossover_probability
            ));
        }
        Ok(())
    }
}

//! Parent selection strategies.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Fitness;
use crate::error::SelectionError;
use crate::random::Randomization;
use tracing::instrument;

/// Selection strategy for choosing parents.
///
/// All strategies assume **minimization** (lower fitness = better).
///
/// # Examples
///
/// ```
/// use u_crossover::random::RngRandomization;
/// use u_crossover::selection::Selection;
///
/// let fitnesses = [4.0, 1.0, 3.0, 2.0];
/// let mut random = RngRandomization::seeded(42);
///
/// let parents = Selection::Elite.select(&fitnesses, 2, &mut random)?;
/// assert_eq!(parents, vec![1, 3]);
/// # Ok::<(), u_crossover::error::SelectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection on inverted fitness.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Linear rank-based selection.
    ///
    /// # Complexity
    /// O(n log n) per call (sort), O(n) per selection
    Rank,

    /// The `number` best individuals, best first.
    Elite,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Type name reported in errors.
    pub fn name(&self) -> &'static str {
        match self {
            Selection::Tournament(_) => "TournamentSelection",
            Selection::Roulette => "RouletteWheelSelection",
            Selection::Rank => "RankSelection",
            Selection::Elite => "EliteSelection",
        }
    }

    /// Selects `number` parent indices from a population given by its fitnesses.
    ///
    /// Apart from [`Selection::Elite`], indices are drawn with replacement.
    #[instrument(level = "debug", skip_all, fields(selection = self.name(), population = fitnesses.len(), number = number))]
    pub fn select<F: Fitness>(
        &self,
        fitnesses: &[F],
        number: usize,
        random: &mut dyn Randomization,
    ) -> Result<Vec<usize>, SelectionError> {
        let fail = |message: String| -> Result<Vec<usize>, SelectionError> {
            tracing::warn!(%message, "selection rejected");
            Err(SelectionError::new(Some(self.name()), message))
        };

        if number < 2 {
            return fail("The number of selected chromosomes should be at least 2.".into());
        }
        if fitnesses.is_empty() {
            return fail("The population must have at least one chromosome.".into());
        }

        match *self {
            Selection::Tournament(0) => fail("The tournament size should be at least 1.".into()),
            Selection::Tournament(k) => Ok((0..number)
                .map(|_| tournament(fitnesses, k, &mut *random))
                .collect()),
            Selection::Roulette => {
                let weights = roulette_weights(fitnesses);
                Ok((0..number).map(|_| spin(&weights, &mut *random)).collect())
            }
            Selection::Rank => {
                let (order, weights) = rank_weights(fitnesses);
                Ok((0..number)
                    .map(|_| order[spin(&weights, &mut *random)])
                    .collect())
            }
            Selection::Elite if number > fitnesses.len() => fail(format!(
                "Cannot select {number} elite chromosomes from a population of {}.",
                fitnesses.len()
            )),
            Selection::Elite => Ok(sorted_indices(fitnesses).into_iter().take(number).collect()),
        }
    }
}

/// Tournament selection: pick k random individuals, return best.
fn tournament<F: Fitness>(fitnesses: &[F], k: usize, random: &mut dyn Randomization) -> usize {
    let n = fitnesses.len();

    let mut best_idx = random.get_int(0, n);
    for _ in 1..k {
        let idx = random.get_int(0, n);
        if fitnesses[idx] < fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette weights using inverse fitness transformation.
///
/// For minimization: weight_i = max_fitness - fitness_i + epsilon
fn roulette_weights<F: Fitness>(fitnesses: &[F]) -> Vec<f64> {
    let values: Vec<f64> = fitnesses.iter().map(|f| f.to_f64()).collect();
    let max_fitness = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let epsilon = 1e-10;

    values
        .iter()
        .map(|&f| {
            let w = max_fitness - f + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect()
}

/// Indices sorted by fitness ascending (best first) with linear rank weights.
///
/// weight_i = n - rank_i
fn rank_weights<F: Fitness>(fitnesses: &[F]) -> (Vec<usize>, Vec<f64>) {
    let order = sorted_indices(fitnesses);
    let n = order.len();
    let weights = (0..n).map(|rank| (n - rank) as f64).collect();
    (order, weights)
}

fn sorted_indices<F: Fitness>(fitnesses: &[F]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitnesses.len()).collect();
    order.sort_by(|&a, &b| {
        fitnesses[a]
            .partial_cmp(&fitnesses[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}

/// Picks a position proportionally to `weights`.
fn spin(weights: &[f64], random: &mut dyn Randomization) -> usize {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return random.get_int(0, weights.len());
    }

    let threshold = random.get_double() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    weights.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandomization, RngRandomization};

    fn counts(selection: Selection, fitnesses: &[f64], draws: usize) -> Vec<u32> {
        let mut random = RngRandomization::seeded(42);
        let mut counts = vec![0u32; fitnesses.len()];
        for idx in selection.select(fitnesses, draws, &mut random).unwrap() {
            counts[idx] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let counts = counts(Selection::Tournament(4), &[10.0, 5.0, 1.0, 8.0], 10000);
        let best_count = counts[2];
        assert!(
            best_count > 6000,
            "expected best to be selected >60% of the time, got {best_count}/10000"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let counts = counts(Selection::Tournament(1), &[10.0, 5.0, 1.0, 8.0], 10000);
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let counts = counts(Selection::Roulette, &[100.0, 50.0, 1.0, 80.0], 10000);
        assert!(
            counts[2] > counts[0],
            "best should be selected more often: {counts:?}"
        );
    }

    #[test]
    fn test_rank_favors_best() {
        let counts = counts(Selection::Rank, &[100.0, 50.0, 1.0, 80.0], 10000);
        assert!(counts[2] > counts[0], "best should be selected more: {counts:?}");
    }

    #[test]
    fn test_elite_takes_best_in_order() {
        let mut random = FixedRandomization::new();
        let picked = Selection::Elite
            .select(&[3.0, 0.5, 2.0, 1.0], 3, &mut random)
            .unwrap();
        assert_eq!(picked, vec![1, 3, 2]);
    }

    #[test]
    fn test_single_individual() {
        let mut random = RngRandomization::seeded(42);
        for sel in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            assert_eq!(sel.select(&[5.0], 2, &mut random).unwrap(), vec![0, 0]);
        }
    }

    #[test]
    fn test_equal_fitness_roulette_is_uniform() {
        let counts = counts(Selection::Roulette, &[5.0, 5.0, 5.0, 5.0], 10000);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_number_below_two_rejected() {
        let mut random = FixedRandomization::new();
        let err = Selection::Rank.select(&[1.0, 2.0], 1, &mut random).unwrap_err();
        assert_eq!(err.selection(), "RankSelection");
        assert_eq!(
            err.to_string(),
            "RankSelection: The number of selected chromosomes should be at least 2."
        );
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut random = FixedRandomization::new();
        let empty: [f64; 0] = [];
        let err = Selection::Tournament(3)
            .select(&empty, 2, &mut random)
            .unwrap_err();
        assert_eq!(err.selection(), "TournamentSelection");
    }

    #[test]
    fn test_zero_tournament_rejected() {
        let mut random = FixedRandomization::new();
        assert!(Selection::Tournament(0)
            .select(&[1.0, 2.0], 2, &mut random)
            .is_err());
    }

    #[test]
    fn test_elite_larger_than_population_rejected() {
        let mut random = FixedRandomization::new();
        let err = Selection::Elite
            .select(&[1.0f32, 2.0], 3, &mut random)
            .unwrap_err();
        assert!(err.message().contains("population of 2"));
    }
}

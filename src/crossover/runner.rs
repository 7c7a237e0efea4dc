//! Recombination pass over a parent pool.
//!
//! [`RecombinationRunner`] is the mating driver an evolutionary loop calls
//! once per generation: parents → groups → crossover → offspring.

use super::config::RecombinationConfig;
use super::types::Crossover;
use crate::chromosome::Chromosome;
use crate::error::CrossoverError;
use crate::random::Randomization;
#[cfg(feature = "parallel")]
use crate::random::RngRandomization;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::instrument;

/// Feeds a parent pool through a crossover operator.
///
/// Parents are consumed in consecutive groups of
/// [`parents_number`](super::CrossoverParams::parents_number); a trailing
/// incomplete group is ignored. Each group is crossed with probability
/// [`RecombinationConfig::crossover_probability`], and the offspring of all
/// crossed groups are returned in group order.
///
/// # Usage
///
/// ```
/// use u_crossover::chromosome::GeneChromosome;
/// use u_crossover::crossover::{
///     PartiallyMappedCrossover, RecombinationConfig, RecombinationRunner,
/// };
///
/// let parents: Vec<_> = (0..4)
///     .map(|_| GeneChromosome::permutation(10))
///     .collect();
/// let config = RecombinationConfig::default()
///     .with_crossover_probability(1.0)
///     .with_seed(42);
/// let mut random = config.randomization();
///
/// let offspring =
///     RecombinationRunner::run(&PartiallyMappedCrossover, &parents, &config, &mut random)?;
/// assert_eq!(offspring.len(), 4);
/// # Ok::<(), u_crossover::error::CrossoverError>(())
/// ```
pub struct RecombinationRunner;

impl RecombinationRunner {
    /// Runs one recombination pass.
    ///
    /// The first failing crossover aborts the pass and its error is
    /// returned; no offspring are returned on failure.
    ///
    /// With the `parallel` feature and [`RecombinationConfig::parallel`] set,
    /// each crossed group receives its own generator seeded from `random`.
    /// The result is deterministic for a fixed seed but differs from the
    /// sequential draw sequence.
    #[instrument(level = "debug", skip_all, fields(
        operator = crossover.name(),
        parents = parents.len(),
        probability = config.crossover_probability,
    ))]
    pub fn run<C, X>(
        crossover: &X,
        parents: &[C],
        config: &RecombinationConfig,
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError>
    where
        C: Chromosome + Send + Sync,
        X: Crossover<C> + Sync + ?Sized,
    {
        config.validate().map_err(CrossoverError::InvalidConfig)?;
        let params = crossover.params();
        params
            .validate()
            .map_err(|e| CrossoverError::new(Some(crossover.name()), e))?;

        let groups: Vec<&[C]> = parents
            .chunks_exact(params.parents_number)
            .filter(|_| random.get_double() < config.crossover_probability)
            .collect();
        tracing::debug!(groups = groups.len(), "crossing parent groups");

        if config.parallel {
            #[cfg(feature = "parallel")]
            return cross_parallel(crossover, &groups, random);
        }

        let mut offspring = Vec::with_capacity(groups.len() * params.children_number);
        for group in groups {
            offspring.extend(crossover.cross(group, random)?);
        }
        Ok(offspring)
    }
}

#[cfg(feature = "parallel")]
fn cross_parallel<C, X>(
    crossover: &X,
    groups: &[&[C]],
    random: &mut dyn Randomization,
) -> Result<Vec<C>, CrossoverError>
where
    C: Chromosome + Send + Sync,
    X: Crossover<C> + Sync + ?Sized,
{
    let seeds: Vec<u64> = groups.iter().map(|_| random.get_seed()).collect();

    let batches = groups
        .par_iter()
        .zip(seeds.par_iter())
        .map(|(group, &seed)| {
            let mut local = RngRandomization::seeded(seed);
            crossover.cross(group, &mut local)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(batches.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::{has_repeated_gene, GeneChromosome};
    use crate::crossover::{OnePointCrossover, PartiallyMappedCrossover};
    use crate::random::{FixedRandomization, RngRandomization};

    fn pool(n: usize, len: usize) -> Vec<GeneChromosome<usize>> {
        (0..n)
            .map(|i| GeneChromosome::new((0..len).map(|g| (g + i) % len).collect()))
            .collect()
    }

    #[test]
    fn test_all_groups_crossed() {
        let parents = pool(6, 8);
        let config = RecombinationConfig::default().with_crossover_probability(1.0);
        let mut random = RngRandomization::seeded(42);

        let offspring =
            RecombinationRunner::run(&PartiallyMappedCrossover, &parents, &config, &mut random)
                .unwrap();
        assert_eq!(offspring.len(), 6);
        for child in &offspring {
            assert_eq!(child.len(), 8);
            assert!(!has_repeated_gene(child.genes()));
        }
    }

    #[test]
    fn test_trailing_group_ignored() {
        let parents = pool(5, 4);
        let config = RecombinationConfig::default().with_crossover_probability(1.0);
        let mut random = RngRandomization::seeded(1);

        let offspring =
            RecombinationRunner::run(&OnePointCrossover::new(1), &parents, &config, &mut random)
                .unwrap();
        assert_eq!(offspring.len(), 4);
    }

    #[test]
    fn test_zero_probability_crosses_nothing() {
        let parents = pool(4, 4);
        let config = RecombinationConfig::default().with_crossover_probability(0.0);
        let mut random = FixedRandomization::new();

        let offspring =
            RecombinationRunner::run(&OnePointCrossover::new(0), &parents, &config, &mut random)
                .unwrap();
        assert!(offspring.is_empty());
    }

    #[test]
    fn test_probability_draw_per_group() {
        let parents = pool(6, 4);
        let config = RecombinationConfig::default().with_crossover_probability(0.5);
        // First and third groups cross; the second does not.
        let mut random = FixedRandomization::new().with_doubles([0.1, 0.9, 0.4]);

        let offspring =
            RecombinationRunner::run(&OnePointCrossover::new(0), &parents, &config, &mut random)
                .unwrap();
        assert_eq!(offspring.len(), 4);
        assert_eq!(offspring[0].genes()[0], parents[0].genes()[0]);
        assert_eq!(offspring[2].genes()[0], parents[4].genes()[0]);
    }

    #[test]
    fn test_error_aborts_pass() {
        let mut parents = pool(4, 4);
        parents[3] = GeneChromosome::new(vec![0, 0, 1, 2]);
        let config = RecombinationConfig::default().with_crossover_probability(1.0);
        let mut random = RngRandomization::seeded(3);

        let err =
            RecombinationRunner::run(&PartiallyMappedCrossover, &parents, &config, &mut random)
                .unwrap_err();
        assert_eq!(err.operator(), "PartiallyMappedCrossover");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let parents = pool(2, 4);
        let mut config = RecombinationConfig::default();
        config.crossover_probability = 3.0;
        let mut random = FixedRandomization::new();

        let err = RecombinationRunner::run(&OnePointCrossover::new(0), &parents, &config, &mut random)
            .unwrap_err();
        assert!(matches!(err, CrossoverError::InvalidConfig(_)));
    }

    #[test]
    fn test_parallel_flag_is_deterministic() {
        let parents = pool(10, 12);
        let config = RecombinationConfig::default()
            .with_crossover_probability(1.0)
            .with_parallel(true);

        let run = |seed| {
            let mut random = RngRandomization::seeded(seed);
            RecombinationRunner::run(&PartiallyMappedCrossover, &parents, &config, &mut random)
                .unwrap()
        };
        let a = run(9);
        assert_eq!(a.len(), 10);
        assert_eq!(a, run(9));
        for child in &a {
            assert!(!has_repeated_gene(child.genes()));
        }
    }
}

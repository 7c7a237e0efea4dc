//! Partially mapped crossover (PMX).
//!
//! # Algorithm (Goldberg & Lingle, 1985)
//!
//! 1. Draw two distinct cut points and sort them into an inclusive window
//!    `[first_cut, second_cut]`
//! 2. Each offspring inherits the *other* parent's window verbatim
//! 3. Every position outside the window takes the same-position gene of its
//!    own parent; if that gene already occurs in the inherited window, it is
//!    replaced by the gene at the matching position of its own parent's
//!    window, repeating until the gene is free
//!
//! The two windows define a bijection, so each substitution chain visits a
//! window position at most once and the offspring stay permutations.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Larrañaga et al. (1999), "Genetic Algorithms for the Travelling Salesman
//!   Problem: A Review of Representations and Operators"

use super::types::{Crossover, CrossoverParams};
use crate::chromosome::{any_has_repeated_gene, Chromosome};
use crate::error::CrossoverError;
use crate::random::Randomization;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::instrument;

/// Partially mapped crossover for permutation chromosomes.
///
/// Requires two parents of at least 3 genes with no repeated gene values;
/// produces two offspring that are again free of repeated genes.
///
/// # Examples
///
/// ```
/// use u_crossover::chromosome::{Chromosome, GeneChromosome};
/// use u_crossover::crossover::{Crossover, PartiallyMappedCrossover};
/// use u_crossover::random::FixedRandomization;
///
/// let parents = vec![
///     GeneChromosome::new(vec![1, 2, 3, 4, 5, 6, 7, 8]),
///     GeneChromosome::new(vec![3, 7, 5, 1, 6, 8, 2, 4]),
/// ];
/// // Cut points are sorted, so [5, 3] yields the window 3..=5.
/// let mut random = FixedRandomization::new().with_unique_ints(vec![5, 3]);
///
/// let children = PartiallyMappedCrossover.cross(&parents, &mut random)?;
/// assert_eq!(children[0].genes(), &[4, 2, 3, 1, 6, 8, 7, 5]);
/// assert_eq!(children[1].genes(), &[3, 7, 8, 4, 5, 6, 2, 1]);
/// # Ok::<(), u_crossover::error::CrossoverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartiallyMappedCrossover;

impl PartiallyMappedCrossover {
    pub const NAME: &'static str = "PartiallyMappedCrossover";
    pub const DISPLAY_NAME: &'static str = "Partially Mapped (PMX)";
    pub const PARAMS: CrossoverParams = CrossoverParams {
        parents_number: 2,
        children_number: 2,
        min_length: 3,
        is_ordered: true,
    };

    /// Builds both offspring for the inclusive window `[first_cut, second_cut]`.
    fn build_offspring<C>(
        parent1: &C,
        parent2: &C,
        first_cut: usize,
        second_cut: usize,
    ) -> Result<Vec<C>, CrossoverError>
    where
        C: Chromosome,
        C::Gene: Eq + Hash,
    {
        let parent1_genes = parent1.genes();
        let parent2_genes = parent2.genes();
        let window = first_cut..=second_cut;

        let parent1_section = &parent1_genes[window.clone()];
        let parent2_section = &parent2_genes[window.clone()];

        let mut offspring1 = parent1.create_new();
        let mut offspring2 = parent2.create_new();
        offspring1.replace_genes(first_cut, parent2_section)?;
        offspring2.replace_genes(first_cut, parent1_section)?;

        let parent1_lookup = section_lookup(parent1_section);
        let parent2_lookup = section_lookup(parent2_section);

        for i in (0..parent1_genes.len()).filter(|i| !window.contains(i)) {
            let gene = resolve_gene(&parent1_genes[i], &parent2_lookup, parent1_section)?;
            offspring1.replace_gene(i, gene)?;

            let gene = resolve_gene(&parent2_genes[i], &parent1_lookup, parent2_section)?;
            offspring2.replace_gene(i, gene)?;
        }

        Ok(vec![offspring1, offspring2])
    }
}

/// Maps each gene of a mapping section to its position in the section.
fn section_lookup<G: Eq + Hash>(section: &[G]) -> HashMap<&G, usize> {
    section.iter().enumerate().map(|(i, g)| (g, i)).collect()
}

/// Follows the mapping chain until `candidate` no longer occurs in the
/// section occupying the offspring window.
///
/// `occupying` indexes the window's current section; `source` is the
/// section of the parent the candidate came from. A well-formed pair of
/// sections resolves within `source.len()` substitutions.
fn resolve_gene<G>(
    candidate: &G,
    occupying: &HashMap<&G, usize>,
    source: &[G],
) -> Result<G, CrossoverError>
where
    G: Clone + Eq + Hash,
{
    let mut gene = candidate;
    for _ in 0..=source.len() {
        match occupying.get(gene) {
            Some(&index) => gene = &source[index],
            None => return Ok(gene.clone()),
        }
    }

    Err(CrossoverError::new(
        Some(PartiallyMappedCrossover::NAME),
        "The mapping sections do not form a bijection; the parents are not permutations of the same genes.",
    ))
}

impl<C> Crossover<C> for PartiallyMappedCrossover
where
    C: Chromosome,
    C::Gene: Eq + Hash,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn params(&self) -> CrossoverParams {
        Self::PARAMS
    }

    #[instrument(level = "debug", skip_all, fields(length = parents.first().map(Chromosome::len)))]
    fn perform_cross(
        &self,
        parents: &[C],
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError> {
        if any_has_repeated_gene(parents) {
            tracing::warn!("parents with repeated genes rejected");
            return Err(CrossoverError::new(
                Some(Self::NAME),
                "The Partially Mapped Crossover (PMX) can be only used with ordered chromosomes. \
                 The specified chromosome has repeated genes.",
            ));
        }

        let (parent1, parent2) = (&parents[0], &parents[1]);

        let mut cut_points = random.get_unique_ints(2, 0, parent1.len());
        cut_points.sort_unstable();
        let (first_cut, second_cut) = (cut_points[0], cut_points[1]);
        tracing::debug!(first_cut, second_cut, "mapping window");

        Self::build_offspring(parent1, parent2, first_cut, second_cut)
    }
}

//! One-point crossover.

use super::types::{Crossover, CrossoverParams};
use crate::chromosome::Chromosome;
use crate::error::CrossoverError;
use crate::random::Randomization;
use tracing::instrument;

/// One-point crossover (C1).
///
/// Both parents are cut after [`swap_point_index`](Self::swap_point_index)
/// and their tails are exchanged. The first child takes genes
/// `0..=swap_point_index` from the first parent and the rest from the
/// second; the second child is the mirror image.
///
/// The operator is representation-agnostic: applied to permutations it
/// may produce repeated genes.
///
/// # Examples
///
/// ```
/// use u_crossover::chromosome::{Chromosome, GeneChromosome};
/// use u_crossover::crossover::{Crossover, OnePointCrossover};
/// use u_crossover::random::FixedRandomization;
///
/// let parents = vec![
///     GeneChromosome::new(vec![0, 0, 0]),
///     GeneChromosome::new(vec![1, 1, 1]),
/// ];
/// let mut random = FixedRandomization::new();
///
/// let children = OnePointCrossover::new(0).cross(&parents, &mut random)?;
/// assert_eq!(children[0].genes(), &[0, 1, 1]);
/// assert_eq!(children[1].genes(), &[1, 0, 0]);
///
/// let children = OnePointCrossover::new(1).cross(&parents, &mut random)?;
/// assert_eq!(children[0].genes(), &[0, 0, 1]);
/// assert_eq!(children[1].genes(), &[1, 1, 0]);
/// # Ok::<(), u_crossover::error::CrossoverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OnePointCrossover {
    /// Zero-based index of the last gene taken from the left parent.
    pub swap_point_index: usize,
}

impl OnePointCrossover {
    pub const NAME: &'static str = "OnePointCrossover";
    pub const DISPLAY_NAME: &'static str = "One-Point";
    pub const PARAMS: CrossoverParams = CrossoverParams {
        parents_number: 2,
        children_number: 2,
        min_length: 2,
        is_ordered: false,
    };

    pub fn new(swap_point_index: usize) -> Self {
        Self { swap_point_index }
    }

    /// Sets the swap point index.
    pub fn with_swap_point_index(mut self, index: usize) -> Self {
        self.swap_point_index = index;
        self
    }

    /// Builds one child: head from `left`, tail from `right`.
    fn create_child<C: Chromosome>(&self, left: &C, right: &C) -> Result<C, CrossoverError> {
        let cut_genes_count = self.swap_point_index + 1;
        let mut child = left.create_new();
        child.replace_genes(0, &left.genes()[..cut_genes_count])?;
        child.replace_genes(cut_genes_count, &right.genes()[cut_genes_count..])?;
        Ok(child)
    }
}

impl<C: Chromosome> Crossover<C> for OnePointCrossover {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn display_name(&self) -> &'static str {
        Self::DISPLAY_NAME
    }

    fn params(&self) -> CrossoverParams {
        Self::PARAMS
    }

    #[instrument(level = "debug", skip_all, fields(swap_point_index = self.swap_point_index))]
    fn perform_cross(
        &self,
        parents: &[C],
        _random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError> {
        let (first, second) = (&parents[0], &parents[1]);
        let length = first.len();

        if self.swap_point_index >= length.saturating_sub(1) {
            tracing::warn!(
                swap_point_index = self.swap_point_index,
                length,
                "swap point leaves no gene on one side"
            );
            return Err(CrossoverError::SwapPointOutOfRange {
                operator: Self::NAME.to_string(),
                swap_point_index: self.swap_point_index,
                length,
            });
        }

        Ok(vec![
            self.create_child(first, second)?,
            self.create_child(second, first)?,
        ])
    }
}

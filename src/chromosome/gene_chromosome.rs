//! `Vec`-backed chromosome.

use super::types::Chromosome;
use crate::error::ChromosomeError;
use std::fmt;

/// A chromosome storing its genes in a `Vec`.
///
/// [`create_new`](Chromosome::create_new) fills the new instance with
/// `G::default()`.
///
/// # Examples
///
/// ```
/// use u_crossover::chromosome::{Chromosome, GeneChromosome};
///
/// let tour = GeneChromosome::permutation(4);
/// assert_eq!(tour.genes(), &[0, 1, 2, 3]);
/// assert_eq!(tour.to_string(), "|0|1|2|3|");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneChromosome<G> {
    genes: Vec<G>,
}

impl<G> GeneChromosome<G> {
    /// Creates a chromosome holding `genes`.
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    /// Consumes the chromosome and returns its genes.
    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl GeneChromosome<usize> {
    /// Creates the identity permutation `0..n`.
    pub fn permutation(n: usize) -> Self {
        Self::new((0..n).collect())
    }
}

impl<G> From<Vec<G>> for GeneChromosome<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}

impl<G> Chromosome for GeneChromosome<G>
where
    G: Clone + Default + PartialEq + fmt::Debug,
{
    type Gene = G;

    fn genes(&self) -> &[G] {
        &self.genes
    }

    fn replace_gene(&mut self, index: usize, gene: G) -> Result<(), ChromosomeError> {
        let length = self.genes.len();
        let slot = self
            .genes
            .get_mut(index)
            .ok_or(ChromosomeError::IndexOutOfRange { index, length })?;
        *slot = gene;
        Ok(())
    }

    fn replace_genes(&mut self, start: usize, genes: &[G]) -> Result<(), ChromosomeError> {
        let length = self.genes.len();
        let end = start
            .checked_add(genes.len())
            .filter(|&end| end <= length)
            .ok_or(ChromosomeError::RangeOutOfBounds {
                start,
                count: genes.len(),
                length,
            })?;
        self.genes[start..end].clone_from_slice(genes);
        Ok(())
    }

    fn create_new(&self) -> Self {
        Self::new(vec![G::default(); self.genes.len()])
    }
}

impl<G: fmt::Display> fmt::Display for GeneChromosome<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for gene in &self.genes {
            write!(f, "{gene}|")?;
        }
        Ok(())
    }
}

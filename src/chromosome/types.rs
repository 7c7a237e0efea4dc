//! Core chromosome trait and gene helpers.

use crate::error::ChromosomeError;
use std::collections::HashSet;
use std::hash::Hash;

/// An ordered, fixed-length sequence of genes.
///
/// All chromosomes passed to one crossover call must share the same
/// [`len`](Chromosome::len). Crossover operators treat parents as read-only
/// and build every offspring from [`create_new`](Chromosome::create_new), so
/// an offspring never shares storage with a parent.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Tour {
///     cities: Vec<usize>,
/// }
///
/// impl Chromosome for Tour {
///     type Gene = usize;
///     fn genes(&self) -> &[usize] { &self.cities }
///     fn replace_gene(&mut self, index: usize, gene: usize) -> Result<(), ChromosomeError> {
///         // bounds check, then write
///     }
///     fn replace_genes(&mut self, start: usize, genes: &[usize]) -> Result<(), ChromosomeError> {
///         // bounds check, then copy
///     }
///     fn create_new(&self) -> Self { Tour { cities: vec![0; self.cities.len()] } }
/// }
/// ```
pub trait Chromosome: Sized {
    /// The gene value held at each position.
    type Gene: Clone + PartialEq + std::fmt::Debug;

    /// Returns the full ordered gene sequence.
    fn genes(&self) -> &[Self::Gene];

    /// Number of genes. Constant for a given chromosome configuration.
    fn len(&self) -> usize {
        self.genes().len()
    }

    /// Returns `true` if the chromosome has no genes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the gene at `index`, if any.
    fn gene(&self, index: usize) -> Option<&Self::Gene> {
        self.genes().get(index)
    }

    /// Replaces the gene at `index`.
    fn replace_gene(&mut self, index: usize, gene: Self::Gene) -> Result<(), ChromosomeError>;

    /// Replaces a contiguous run of genes beginning at `start`.
    fn replace_genes(&mut self, start: usize, genes: &[Self::Gene]) -> Result<(), ChromosomeError>;

    /// Creates a fresh chromosome with the same configuration (length).
    ///
    /// The genes of the new instance are unspecified placeholders; callers
    /// are expected to overwrite every position.
    fn create_new(&self) -> Self;
}

/// Returns `true` if any gene value occurs more than once.
pub fn has_repeated_gene<G: Eq + Hash>(genes: &[G]) -> bool {
    let mut seen = HashSet::with_capacity(genes.len());
    !genes.iter().all(|g| seen.insert(g))
}

/// Returns `true` if any of the chromosomes has a repeated gene.
pub fn any_has_repeated_gene<C>(chromosomes: &[C]) -> bool
where
    C: Chromosome,
    C::Gene: Eq + Hash,
{
    chromosomes.iter().any(|c| has_repeated_gene(c.genes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::GeneChromosome;

    #[test]
    fn test_has_repeated_gene() {
        assert!(!has_repeated_gene::<u8>(&[]));
        assert!(!has_repeated_gene(&[1, 2, 3]));
        assert!(has_repeated_gene(&[1, 2, 1]));
        assert!(has_repeated_gene(&['a', 'a']));
    }

    #[test]
    fn test_any_has_repeated_gene() {
        let ok = GeneChromosome::new(vec![0, 1, 2]);
        let bad = GeneChromosome::new(vec![0, 0, 2]);

        assert!(!any_has_repeated_gene(&[ok.clone(), ok.clone()]));
        assert!(any_has_repeated_gene(&[ok, bad]));
    }

    #[test]
    fn test_default_accessors() {
        let c = GeneChromosome::new(vec![7, 8]);
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert_eq!(c.gene(1), Some(&8));
        assert_eq!(c.gene(2), None);
    }
}

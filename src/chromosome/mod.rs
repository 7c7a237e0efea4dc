//! Chromosome abstraction consumed by the crossover operators.
//!
//! Operators never own a chromosome representation. They read parent genes
//! through [`Chromosome::genes`], build offspring through
//! [`Chromosome::create_new`], and populate them with
//! [`Chromosome::replace_gene`] / [`Chromosome::replace_genes`].
//!
//! # Key Types
//!
//! - [`Chromosome`]: The capability set every representation implements
//! - [`GeneChromosome`]: A `Vec`-backed implementation for tests and simple problems

mod gene_chromosome;
mod types;

pub use gene_chromosome::GeneChromosome;
pub use types::{any_has_repeated_gene, has_repeated_gene, Chromosome};

//! Crossover (recombination) operators.
//!
//! Every operator implements [`Crossover`]: it validates its parents against
//! its [`CrossoverParams`], consults the injected
//! [`Randomization`](crate::random::Randomization) service when it needs cut
//! points, and returns freshly built offspring.
//!
//! # Operators
//!
//! - [`OnePointCrossover`]: Swap tails after a configurable index (any representation)
//! - [`PartiallyMappedCrossover`] (PMX): Two cut points with mapping repair (permutations only)
//!
//! # Key Types
//!
//! - [`CrossoverKind`]: Closed set of built-in operators for configuration
//! - [`RecombinationConfig`]: Crossover probability, parallelism, seed
//! - [`RecombinationRunner`]: Feeds a parent pool through an operator
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"

mod config;
mod kind;
mod one_point;
mod pmx;
mod runner;
mod types;

pub use config::RecombinationConfig;
pub use kind::CrossoverKind;
pub use one_point::OnePointCrossover;
pub use pmx::PartiallyMappedCrossover;
pub use runner::RecombinationRunner;
pub use types::{Crossover, CrossoverParams};

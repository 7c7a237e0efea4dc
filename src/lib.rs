//! Pluggable crossover operators for genetic algorithms.
//!
//! Provides the recombination layer of a GA engine:
//!
//! - **Chromosome abstraction**: The capability set operators rely on
//!   (read genes, replace genes, create a fresh instance)
//! - **Crossover operators**: One-point crossover and partially mapped
//!   crossover (PMX) behind a single [`Crossover`](crossover::Crossover) contract
//! - **Recombination runner**: Feeds a parent pool through an operator with a
//!   crossover probability, optionally in parallel
//! - **Selection**: Tournament, roulette, rank, and elite parent selection
//! - **Randomization**: An injected service so callers control determinism
//!
//! # Architecture
//!
//! The evolutionary loop, fitness evaluation, and population book-keeping are
//! owned by consumers. Operators treat parents as read-only, never touch
//! global state, and report failures as structured error values naming the
//! operator that raised them.

pub mod chromosome;
pub mod crossover;
pub mod error;
pub mod random;
pub mod selection;

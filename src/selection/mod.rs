//! Parent selection.
//!
//! Selection decides which individuals become parents for crossover.
//! Strategies work on a slice of fitness values and return indices into it;
//! invalid requests are reported as [`SelectionError`](crate::error::SelectionError)
//! values naming the strategy.

mod strategy;
mod types;

pub use strategy::Selection;
pub use types::Fitness;

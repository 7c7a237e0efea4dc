//! Closed set of built-in operators, for configuration and tooling.

use super::one_point::OnePointCrossover;
use super::pmx::PartiallyMappedCrossover;
use super::types::{Crossover, CrossoverParams};
use crate::chromosome::Chromosome;
use crate::error::CrossoverError;
use crate::random::Randomization;
use std::hash::Hash;

/// A built-in crossover operator selected by configuration.
///
/// # Examples
///
/// ```
/// use u_crossover::crossover::CrossoverKind;
///
/// // Offer only the operators that keep permutations valid.
/// let ordered: Vec<_> = CrossoverKind::all()
///     .into_iter()
///     .filter(|kind| kind.params().supports(8, true))
///     .map(|kind| kind.display_name())
///     .collect();
/// assert_eq!(ordered, vec!["Partially Mapped (PMX)"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum CrossoverKind {
    /// [`OnePointCrossover`] with the given swap point.
    OnePoint { swap_point_index: usize },

    /// [`PartiallyMappedCrossover`].
    PartiallyMapped,
}

impl Default for CrossoverKind {
    fn default() -> Self {
        CrossoverKind::OnePoint {
            swap_point_index: 0,
        }
    }
}

impl CrossoverKind {
    /// Every built-in operator with its default configuration.
    pub fn all() -> [CrossoverKind; 2] {
        [CrossoverKind::default(), CrossoverKind::PartiallyMapped]
    }

    /// Type name of the underlying operator.
    pub fn name(&self) -> &'static str {
        match self {
            CrossoverKind::OnePoint { .. } => OnePointCrossover::NAME,
            CrossoverKind::PartiallyMapped => PartiallyMappedCrossover::NAME,
        }
    }

    /// Human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            CrossoverKind::OnePoint { .. } => OnePointCrossover::DISPLAY_NAME,
            CrossoverKind::PartiallyMapped => PartiallyMappedCrossover::DISPLAY_NAME,
        }
    }

    pub fn params(&self) -> CrossoverParams {
        match self {
            CrossoverKind::OnePoint { .. } => OnePointCrossover::PARAMS,
            CrossoverKind::PartiallyMapped => PartiallyMappedCrossover::PARAMS,
        }
    }
}

impl From<OnePointCrossover> for CrossoverKind {
    fn from(op: OnePointCrossover) -> Self {
        CrossoverKind::OnePoint {
            swap_point_index: op.swap_point_index,
        }
    }
}

impl From<PartiallyMappedCrossover> for CrossoverKind {
    fn from(_: PartiallyMappedCrossover) -> Self {
        CrossoverKind::PartiallyMapped
    }
}

impl<C> Crossover<C> for CrossoverKind
where
    C: Chromosome,
    C::Gene: Eq + Hash,
{
    fn name(&self) -> &'static str {
        CrossoverKind::name(self)
    }

    fn display_name(&self) -> &'static str {
        CrossoverKind::display_name(self)
    }

    fn params(&self) -> CrossoverParams {
        CrossoverKind::params(self)
    }

    fn perform_cross(
        &self,
        parents: &[C],
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError> {
        match *self {
            CrossoverKind::OnePoint { swap_point_index } => {
                OnePointCrossover::new(swap_point_index).perform_cross(parents, random)
            }
            CrossoverKind::PartiallyMapped => PartiallyMappedCrossover.perform_cross(parents, random),
        }
    }
}

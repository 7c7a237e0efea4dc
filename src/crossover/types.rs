//! The crossover operator contract.
//!
//! [`Crossover`] is the single seam between an evolutionary loop and the
//! recombination strategies. Shared precondition checks live in
//! [`CrossoverParams::check_parents`] and are composed into the default
//! [`Crossover::cross`], so a strategy only implements
//! [`Crossover::perform_cross`].

use crate::chromosome::Chromosome;
use crate::error::CrossoverError;
use crate::random::Randomization;

/// Parent/offspring requirements of a crossover operator.
///
/// Exposed so that a generic caller can check compatibility with its
/// chromosome encoding before invoking the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrossoverParams {
    /// Exact number of parents required per call.
    pub parents_number: usize,

    /// Number of offspring produced per call.
    pub children_number: usize,

    /// Minimum chromosome length accepted.
    pub min_length: usize,

    /// Whether offspring are guaranteed to stay permutations (no repeated genes).
    pub is_ordered: bool,
}

impl CrossoverParams {
    /// Creates parameters for an unordered operator.
    pub fn new(parents_number: usize, children_number: usize, min_length: usize) -> Self {
        Self {
            parents_number,
            children_number,
            min_length,
            is_ordered: false,
        }
    }

    /// Marks the operator as permutation-preserving.
    pub fn ordered(mut self) -> Self {
        self.is_ordered = true;
        self
    }

    /// Validates the parameters themselves.
    pub fn validate(&self) -> Result<(), String> {
        if self.parents_number == 0 {
            return Err("parents_number must be at least 1".into());
        }
        if self.children_number == 0 {
            return Err("children_number must be at least 1".into());
        }
        Ok(())
    }

    /// Returns `true` if chromosomes of `length` genes can be crossed.
    ///
    /// When `ordered_encoding` is set, the operator must also preserve
    /// permutation validity.
    pub fn supports(&self, length: usize, ordered_encoding: bool) -> bool {
        length >= self.min_length && (self.is_ordered || !ordered_encoding)
    }

    /// Checks the shared preconditions of a crossover call.
    ///
    /// In order: parent count, minimum length, and equal lengths across parents.
    pub fn check_parents<C: Chromosome>(
        &self,
        operator: &str,
        parents: &[C],
    ) -> Result<(), CrossoverError> {
        if parents.len() != self.parents_number {
            return Err(CrossoverError::ParentsNumber {
                operator: operator.to_string(),
                expected: self.parents_number,
                actual: parents.len(),
            });
        }

        if let Some(short) = parents.iter().find(|p| p.len() < self.min_length) {
            return Err(CrossoverError::ChromosomeTooShort {
                operator: operator.to_string(),
                min_length: self.min_length,
                actual: short.len(),
            });
        }

        if let Some(first) = parents.first() {
            let expected = first.len();
            if let Some(other) = parents.iter().find(|p| p.len() != expected) {
                return Err(CrossoverError::LengthMismatch {
                    operator: operator.to_string(),
                    expected,
                    actual: other.len(),
                });
            }
        }

        Ok(())
    }
}

/// A recombination strategy.
///
/// Parents are read-only. Offspring are freshly built through
/// [`Chromosome::create_new`] and never share storage with a parent.
///
/// # Implementing
///
/// ```ignore
/// struct SwapParents;
///
/// impl<C: Chromosome + Clone> Crossover<C> for SwapParents {
///     fn name(&self) -> &'static str { "SwapParents" }
///     fn display_name(&self) -> &'static str { "Swap" }
///     fn params(&self) -> CrossoverParams { CrossoverParams::new(2, 2, 1) }
///     fn perform_cross(
///         &self,
///         parents: &[C],
///         _random: &mut dyn Randomization,
///     ) -> Result<Vec<C>, CrossoverError> {
///         Ok(vec![parents[1].clone(), parents[0].clone()])
///     }
/// }
/// ```
pub trait Crossover<C: Chromosome> {
    /// Type name reported in errors.
    fn name(&self) -> &'static str;

    /// Human-readable label for tooling.
    fn display_name(&self) -> &'static str;

    /// Parent/offspring requirements.
    fn params(&self) -> CrossoverParams;

    /// Strategy-specific recombination.
    ///
    /// Called by [`cross`](Crossover::cross) once the shared preconditions
    /// hold; implementations may assume the parent count and lengths are valid.
    fn perform_cross(
        &self,
        parents: &[C],
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError>;

    /// Validates `parents` and produces offspring.
    ///
    /// On success exactly [`CrossoverParams::children_number`] offspring are
    /// returned, each as long as the parents.
    fn cross(&self, parents: &[C], random: &mut dyn Randomization) -> Result<Vec<C>, CrossoverError> {
        let params = self.params();
        let _span = tracing::debug_span!(
            "cross",
            operator = self.name(),
            parents = parents.len(),
            length = parents.first().map(|p| p.len()),
        )
        .entered();

        if let Err(err) = params.check_parents(self.name(), parents) {
            tracing::warn!(%err, "rejected crossover parents");
            return Err(err);
        }

        let children = self.perform_cross(parents, random)?;
        debug_assert_eq!(children.len(), params.children_number);
        Ok(children)
    }
}

impl<C, T> Crossover<C> for &T
where
    C: Chromosome,
    T: Crossover<C> + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn display_name(&self) -> &'static str {
        (**self).display_name()
    }

    fn params(&self) -> CrossoverParams {
        (**self).params()
    }

    fn perform_cross(
        &self,
        parents: &[C],
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError> {
        (**self).perform_cross(parents, random)
    }

    fn cross(&self, parents: &[C], random: &mut dyn Randomization) -> Result<Vec<C>, CrossoverError> {
        (**self).cross(parents, random)
    }
}

impl<C, T> Crossover<C> for Box<T>
where
    C: Chromosome,
    T: Crossover<C> + ?Sized,
{
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn display_name(&self) -> &'static str {
        (**self).display_name()
    }

    fn params(&self) -> CrossoverParams {
        (**self).params()
    }

    fn perform_cross(
        &self,
        parents: &[C],
        random: &mut dyn Randomization,
    ) -> Result<Vec<C>, CrossoverError> {
        (**self).perform_cross(parents, random)
    }

    fn cross(&self, parents: &[C], random: &mut dyn Randomization) -> Result<Vec<C>, CrossoverError> {
        (**self).cross(parents, random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::GeneChromosome;
    use crate::random::FixedRandomization;

    /// Returns the parents reversed; counts calls to `perform_cross`.
    struct Reverse {
        calls: std::cell::Cell<usize>,
    }

    impl Crossover<GeneChromosome<u8>> for Reverse {
        fn name(&self) -> &'static str {
            "Reverse"
        }

        fn display_name(&self) -> &'static str {
            "Reverse"
        }

        fn params(&self) -> CrossoverParams {
            CrossoverParams::new(2, 2, 2)
        }

        fn perform_cross(
            &self,
            parents: &[GeneChromosome<u8>],
            _random: &mut dyn Randomization,
        ) -> Result<Vec<GeneChromosome<u8>>, CrossoverError> {
            self.calls.set(self.calls.get() + 1);
            Ok(vec![parents[1].clone(), parents[0].clone()])
        }
    }

    fn reverse() -> Reverse {
        Reverse {
            calls: std::cell::Cell::new(0),
        }
    }

    #[test]
    fn test_cross_delegates_after_validation() {
        let op = reverse();
        let parents = vec![
            GeneChromosome::new(vec![0, 0]),
            GeneChromosome::new(vec![1, 1]),
        ];
        let children = op.cross(&parents, &mut FixedRandomization::new()).unwrap();
        assert_eq!(children[0].genes(), &[1, 1]);
        assert_eq!(children[1].genes(), &[0, 0]);
        assert_eq!(op.calls.get(), 1);
    }

    #[test]
    fn test_wrong_parent_count_rejected_before_perform_cross() {
        let op = reverse();
        let parents = vec![GeneChromosome::new(vec![0, 0])];
        let err = op.cross(&parents, &mut FixedRandomization::new()).unwrap_err();
        assert_eq!(
            err,
            CrossoverError::ParentsNumber {
                operator: "Reverse".into(),
                expected: 2,
                actual: 1,
            }
        );
        assert_eq!(op.calls.get(), 0);
    }

    #[test]
    fn test_short_parent_rejected() {
        let op = reverse();
        let parents = vec![GeneChromosome::new(vec![0, 0]), GeneChromosome::new(vec![1])];
        let err = op.cross(&parents, &mut FixedRandomization::new()).unwrap_err();
        assert!(matches!(
            err,
            CrossoverError::ChromosomeTooShort {
                min_length: 2,
                actual: 1,
                ..
            }
        ));
        assert_eq!(op.calls.get(), 0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let op = reverse();
        let parents = vec![
            GeneChromosome::new(vec![0, 0]),
            GeneChromosome::new(vec![1, 1, 1]),
        ];
        let err = op.cross(&parents, &mut FixedRandomization::new()).unwrap_err();
        assert!(matches!(
            err,
            CrossoverError::LengthMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_boxed_operator_forwards() {
        let op: Box<dyn Crossover<GeneChromosome<u8>>> = Box::new(reverse());
        assert_eq!(op.name(), "Reverse");
        let parents = vec![
            GeneChromosome::new(vec![2, 3]),
            GeneChromosome::new(vec![4, 5]),
        ];
        let children = op.cross(&parents, &mut FixedRandomization::new()).unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_params_validate() {
        assert!(CrossoverParams::new(2, 2, 2).validate().is_ok());
        assert!(CrossoverParams::new(0, 2, 2).validate().is_err());
        assert!(CrossoverParams::new(2, 0, 2).validate().is_err());
    }

    #[test]
    fn test_params_supports() {
        let unordered = CrossoverParams::new(2, 2, 2);
        assert!(unordered.supports(2, false));
        assert!(!unordered.supports(1, false));
        assert!(!unordered.supports(10, true));

        let ordered = CrossoverParams::new(2, 2, 3).ordered();
        assert!(ordered.is_ordered);
        assert!(ordered.supports(3, true));
        assert!(ordered.supports(3, false));
        assert!(!ordered.supports(2, true));
    }
}

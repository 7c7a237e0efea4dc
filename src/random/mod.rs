//! Randomization service consumed by the operators.
//!
//! Operators never reach for a global RNG. The service is passed explicitly
//! to every call, so callers control determinism and thread-safety and can
//! substitute a scripted source in tests.
//!
//! # Key Types
//!
//! - [`Randomization`]: The service contract
//! - [`RngRandomization`]: Adapter over any [`rand::Rng`]
//! - [`FixedRandomization`]: Replays scripted values for deterministic tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of random numbers for operators.
pub trait Randomization {
    /// Returns `count` distinct integers in `[min, max)`.
    ///
    /// # Panics
    /// Panics if the range holds fewer than `count` integers.
    fn get_unique_ints(&mut self, count: usize, min: usize, max: usize) -> Vec<usize>;

    /// Returns an integer in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    fn get_int(&mut self, min: usize, max: usize) -> usize;

    /// Returns a double in `[0, 1)`.
    fn get_double(&mut self) -> f64;

    /// Returns a fresh seed for deriving an independent generator.
    fn get_seed(&mut self) -> u64;
}

impl<T: Randomization + ?Sized> Randomization for &mut T {
    fn get_unique_ints(&mut self, count: usize, min: usize, max: usize) -> Vec<usize> {
        (**self).get_unique_ints(count, min, max)
    }

    fn get_int(&mut self, min: usize, max: usize) -> usize {
        (**self).get_int(min, max)
    }

    fn get_double(&mut self) -> f64 {
        (**self).get_double()
    }

    fn get_seed(&mut self) -> u64 {
        (**self).get_seed()
    }
}

/// [`Randomization`] backed by a [`rand::Rng`].
///
/// # Examples
///
/// ```
/// use u_crossover::random::{Randomization, RngRandomization};
///
/// let mut random = RngRandomization::seeded(42);
/// let picks = random.get_unique_ints(2, 0, 10);
/// assert_eq!(picks.len(), 2);
/// assert_ne!(picks[0], picks[1]);
/// ```
#[derive(Debug, Clone)]
pub struct RngRandomization<R> {
    rng: R,
}

impl<R: Rng> RngRandomization<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngRandomization<StdRng> {
    /// Creates a reproducible generator from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Randomization for RngRandomization<R> {
    fn get_unique_ints(&mut self, count: usize, min: usize, max: usize) -> Vec<usize> {
        assert!(
            max >= min && max - min >= count,
            "cannot draw {count} unique ints from [{min}, {max})"
        );
        rand::seq::index::sample(&mut self.rng, max - min, count)
            .into_iter()
            .map(|i| i + min)
            .collect()
    }

    fn get_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.random_range(min..max)
    }

    fn get_double(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn get_seed(&mut self) -> u64 {
        self.rng.random()
    }
}

/// [`Randomization`] that replays scripted values.
///
/// Each method pops from its own queue. When a queue is exhausted the
/// method falls back to the lowest value its contract allows (`min`,
/// `min..min + count`, `0.0`, `0`).
///
/// # Examples
///
/// ```
/// use u_crossover::random::{FixedRandomization, Randomization};
///
/// let mut random = FixedRandomization::new().with_unique_ints(vec![4, 1]);
/// assert_eq!(random.get_unique_ints(2, 0, 5), vec![4, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedRandomization {
    unique_ints: VecDeque<Vec<usize>>,
    ints: VecDeque<usize>,
    doubles: VecDeque<f64>,
    seeds: VecDeque<u64>,
}

impl FixedRandomization {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues one answer for [`Randomization::get_unique_ints`].
    pub fn with_unique_ints(mut self, values: Vec<usize>) -> Self {
        self.unique_ints.push_back(values);
        self
    }

    /// Queues answers for [`Randomization::get_int`].
    pub fn with_ints(mut self, values: impl IntoIterator<Item = usize>) -> Self {
        self.ints.extend(values);
        self
    }

    /// Queues answers for [`Randomization::get_double`].
    pub fn with_doubles(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.doubles.extend(values);
        self
    }

    /// Queues answers for [`Randomization::get_seed`].
    pub fn with_seeds(mut self, values: impl IntoIterator<Item = u64>) -> Self {
        self.seeds.extend(values);
        self
    }
}

impl Randomization for FixedRandomization {
    fn get_unique_ints(&mut self, count: usize, min: usize, max: usize) -> Vec<usize> {
        match self.unique_ints.pop_front() {
            Some(values) => {
                assert_eq!(values.len(), count, "scripted unique ints have wrong count");
                assert!(
                    values.iter().all(|v| (min..max).contains(v)),
                    "scripted unique ints {values:?} fall outside [{min}, {max})"
                );
                values
            }
            None => (min..min + count).collect(),
        }
    }

    fn get_int(&mut self, min: usize, max: usize) -> usize {
        match self.ints.pop_front() {
            Some(v) => {
                assert!((min..max).contains(&v), "scripted int {v} outside [{min}, {max})");
                v
            }
            None => min,
        }
    }

    fn get_double(&mut self) -> f64 {
        self.doubles.pop_front().unwrap_or(0.0)
    }

    fn get_seed(&mut self) -> u64 {
        self.seeds.pop_front().unwrap_or(0)
    }
}

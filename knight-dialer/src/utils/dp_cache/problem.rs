//! Trait-based DP problem definition.

/// A dynamic programming problem: a recurrence over indices whose
/// dependencies form a DAG.
///
/// # Type Parameters
///
/// - `I`: Index type for the DP cache
/// - `K`: Value type stored in the cache
///
/// # Example
///
/// ```rust
/// use std::convert::Infallible;
/// use knight_dialer::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
///
/// struct Fibonacci;
///
/// impl DpProblem<u32, u64> for Fibonacci {
///     type Error = Infallible;
///
///     fn deps(&self, n: &u32) -> Vec<u32> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, n: &u32, deps: Vec<u64>) -> Result<u64, Infallible> {
///         Ok(if *n <= 1 { u64::from(*n) } else { deps[0] + deps[1] })
///     }
/// }
///
/// let cache = DpCache::with_problem(HashMapBackend::new(), Fibonacci);
/// assert_eq!(cache.get(&10).unwrap(), 55);
/// ```
pub trait DpProblem<I, K> {
    /// Error raised by [`compute`](DpProblem::compute); propagated unchanged
    /// by the cache.
    type Error;

    /// Returns the indices that this index depends on.
    ///
    /// For base cases, return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for the given index using resolved dependency values.
    ///
    /// The `deps` vector contains the computed values for each dependency
    /// returned by `deps()`, in the same order.
    fn compute(&self, index: &I, deps: Vec<K>) -> Result<K, Self::Error>;
}

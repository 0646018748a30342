//! Dynamic Programming Cache with Lazy Evaluation
//!
//! This module provides a memoization cache for dynamic programming problems where values
//! depend on other values in a directed acyclic graph (DAG).
//!
//! # Backend Types
//!
//! - [`HashMapBackend`]: Supports arbitrary hashable index types, including composite keys
//! - [`NoCacheBackend`]: Stores nothing; every index is recomputed each time it is reached
//!
//! Swapping the backend is the only difference between plain recursion and memoized
//! recursion over the same [`DpProblem`].
//!
//! # Warning: Cycle Behavior
//!
//! **This cache does NOT support cycle detection.** If the dependency graph contains a
//! cycle, [`DpCache::get`] never returns.
//!
//! **Users MUST ensure that dependencies form a DAG (Directed Acyclic Graph).**
//!
//! # Example: Grid paths with a composite key
//!
//! ```rust
//! use std::convert::Infallible;
//! use knight_dialer::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     type Error = Infallible;
//!
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> Result<u64, Infallible> {
//!         Ok(if deps.is_empty() { 1 } else { deps.iter().sum() })
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), GridPaths);
//! assert_eq!(cache.get(&(4, 4)).unwrap(), 70); // C(8,4) = 70 paths
//! assert_eq!(cache.len(), 25);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, NoCacheBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

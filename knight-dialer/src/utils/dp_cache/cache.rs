//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;
use super::problem::DpProblem;

/// A dynamic programming cache with lazy evaluation and dependency resolution.
///
/// `DpCache` evaluates a [`DpProblem`] on demand. Dependencies are resolved
/// with an explicit stack rather than native recursion, so deep dependency
/// chains do not grow the call stack. With a caching backend each index is
/// computed at most once; with [`NoCacheBackend`](super::NoCacheBackend)
/// every occurrence of an index in the dependency tree is recomputed.
///
/// # Type Parameters
///
/// - `I`: Index type (must implement `Clone`)
/// - `K`: Value type (must implement `Clone`)
/// - `B`: Backend storage type (must implement `Backend<I, K>`)
/// - `P`: Problem type (must implement `DpProblem<I, K>`)
///
/// # Warning: No Cycle Detection
///
/// This cache does NOT detect cycles in the dependency graph. A cycle makes
/// `get` loop forever while its stack grows.
/// **Users MUST ensure dependencies form a DAG.**
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

/// One pending index on the resolution stack.
struct Frame<I, K> {
    index: I,
    pending: std::vec::IntoIter<I>,
    resolved: Vec<K>,
}

impl<I, K> Frame<I, K> {
    fn new(index: I, deps: Vec<I>) -> Self {
        Self {
            index,
            resolved: Vec::with_capacity(deps.len()),
            pending: deps.into_iter(),
        }
    }
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    /// Creates a new DpCache with the given backend and problem definition.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for the given index, computing it if necessary.
    ///
    /// Cached values are returned as clones. Otherwise every unresolved
    /// dependency is pushed onto an explicit stack, computed bottom-up,
    /// stored in the backend, and handed to its dependent.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`DpProblem::compute`]; values
    /// computed before the error stay cached.
    pub fn get(&self, index: &I) -> Result<K, P::Error> {
        if let Some(value) = self.cached(index) {
            return Ok(value);
        }

        // `frame` is the index being resolved; `parents` wait on it in order
        let mut frame = Frame::new(index.clone(), self.problem.deps(index));
        let mut parents: Vec<Frame<I, K>> = Vec::new();

        loop {
            if let Some(dep) = frame.pending.next() {
                match self.cached(&dep) {
                    Some(value) => frame.resolved.push(value),
                    None => {
                        let deps = self.problem.deps(&dep);
                        parents.push(std::mem::replace(&mut frame, Frame::new(dep, deps)));
                    }
                }
                continue;
            }

            let Frame { index, resolved, .. } = frame;
            let value = self.problem.compute(&index, resolved)?;
            self.backend.borrow_mut().insert(index, value.clone());

            match parents.pop() {
                Some(mut parent) => {
                    parent.resolved.push(value);
                    frame = parent;
                }
                None => return Ok(value),
            }
        }
    }

    /// Number of values currently held by the backend.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached(&self, index: &I) -> Option<K> {
        self.backend.borrow().get(index).cloned()
    }
}

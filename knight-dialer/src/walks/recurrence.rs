//! Top-down counting with the walk recurrence.
//!
//! `count(p, 0) = 1` and `count(p, h) = Σ count(n, h - 1)` over the neighbors
//! `n` of `p`. The recurrence is expressed once as a [`DpProblem`]; the plain
//! recursive counter evaluates it without a cache, the memoized counter with a
//! per-invocation `(node, hops)` map.

use tracing::debug;

use crate::error::WalkError;
use crate::graph::{Graph, Node};
use crate::matrix::Count;
use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend, NoCacheBackend};

/// Cache key: a node and the hops still to take from it.
pub type WalkKey = (Node, u32);

/// The walk recurrence over one graph.
#[derive(Debug, Clone, Copy)]
pub struct WalkRecurrence<'g, const N: usize> {
    graph: &'g Graph<N>,
}

impl<'g, const N: usize> WalkRecurrence<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        Self { graph }
    }
}

impl<const N: usize> DpProblem<WalkKey, Count> for WalkRecurrence<'_, N> {
    type Error = WalkError;

    fn deps(&self, &(node, hops): &WalkKey) -> Vec<WalkKey> {
        if hops == 0 {
            return vec![];
        }
        self.graph
            .adjacent(node)
            .iter()
            .map(|&neighbor| (neighbor, hops - 1))
            .collect()
    }

    fn compute(&self, &(_, hops): &WalkKey, deps: Vec<Count>) -> Result<Count, WalkError> {
        if hops == 0 {
            return Ok(1);
        }
        deps.into_iter().try_fold(0, |sum: Count, count| {
            sum.checked_add(count).ok_or(WalkError::Overflow)
        })
    }
}

/// Counts walks with the recurrence and no caching.
///
/// Every subproblem is re-evaluated each time it is reached, so the cost is
/// exponential in `hops` (at least `2^hops` evaluations from any keypad key
/// other than 5). Past roughly 30 hops on the keypad this takes impractically
/// long.
pub fn count_walks_recursive<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Count, WalkError> {
    graph.check_node(start)?;
    let cache = DpCache::with_problem(NoCacheBackend::new(), WalkRecurrence::new(graph));
    let count = cache.get(&(start, hops))?;
    debug!(start, hops, count, "recursive count");
    Ok(count)
}

/// Memoized evaluation of the recurrence.
///
/// Each `(node, hops)` pair is computed at most once and stored in a
/// write-once map, so the map never holds more than `N × (hops + 1)`
/// entries. A `WalkMemo` is meant to live for a single top-level count.
pub struct WalkMemo<'g, const N: usize> {
    graph: &'g Graph<N>,
    cache: DpCache<WalkKey, Count, HashMapBackend<WalkKey, Count>, WalkRecurrence<'g, N>>,
}

impl<'g, const N: usize> WalkMemo<'g, N> {
    pub fn new(graph: &'g Graph<N>) -> Self {
        Self {
            graph,
            cache: DpCache::with_problem(HashMapBackend::new(), WalkRecurrence::new(graph)),
        }
    }

    /// Number of `(node, hops)` results cached so far.
    pub fn cached_entries(&self) -> usize {
        self.cache.len()
    }

    pub fn count(&self, start: Node, hops: u32) -> Result<Count, WalkError> {
        self.graph.check_node(start)?;
        self.cache.get(&(start, hops))
    }
}

/// Counts walks with the memoized recurrence.
///
/// Linear in `hops` for time and space. The cache is created for this call
/// and dropped on return.
pub fn count_walks_memoized<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Count, WalkError> {
    let memo = WalkMemo::new(graph);
    let count = memo.count(start, hops)?;
    debug!(
        start,
        hops,
        count,
        cached = memo.cached_entries(),
        "memoized count"
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursive_small_counts() {
        let graph = Graph::keypad().unwrap();
        assert_eq!(count_walks_recursive(&graph, 6, 0).unwrap(), 1);
        assert_eq!(count_walks_recursive(&graph, 6, 1).unwrap(), 3);
        assert_eq!(count_walks_recursive(&graph, 6, 2).unwrap(), 6);
        assert_eq!(count_walks_recursive(&graph, 5, 3).unwrap(), 0);
    }

    #[test]
    fn test_memoized_small_counts() {
        let graph = Graph::keypad().unwrap();
        assert_eq!(count_walks_memoized(&graph, 6, 0).unwrap(), 1);
        assert_eq!(count_walks_memoized(&graph, 6, 2).unwrap(), 6);
        assert_eq!(count_walks_memoized(&graph, 0, 10).unwrap(), 4608);
    }

    #[test]
    fn test_memo_is_bounded_by_nodes_times_hops() {
        let graph = Graph::keypad().unwrap();
        for hops in [0, 1, 5, 20, 50] {
            let memo = WalkMemo::new(&graph);
            memo.count(4, hops).unwrap();
            assert!(
                memo.cached_entries() <= 10 * (hops as usize + 1),
                "{} entries for {} hops",
                memo.cached_entries(),
                hops
            );
        }
    }

    #[test]
    fn test_memo_reuses_entries_across_starts() {
        let graph = Graph::keypad().unwrap();
        let memo = WalkMemo::new(&graph);
        memo.count(4, 10).unwrap();
        let after_first = memo.cached_entries();
        // (0, 9) is a direct dependency of (4, 10)
        memo.count(0, 9).unwrap();
        assert_eq!(memo.cached_entries(), after_first);
    }

    #[test]
    fn test_memoized_overflow_depends_on_start() {
        let graph = Graph::keypad().unwrap();
        assert_eq!(
            count_walks_memoized(&graph, 0, 107).unwrap(),
            299_778_105_507_027_414_978_556_863_970_975_678_464
        );
        assert_eq!(
            count_walks_memoized(&graph, 4, 107),
            Err(WalkError::Overflow)
        );
        assert_eq!(
            count_walks_memoized(&graph, 4, 200),
            Err(WalkError::Overflow)
        );
        assert_eq!(count_walks_memoized(&graph, 5, 200), Ok(0));
    }

    #[test]
    fn test_invalid_start_is_rejected() {
        let graph = Graph::keypad().unwrap();
        assert!(matches!(
            count_walks_recursive(&graph, 10, 1),
            Err(WalkError::InvalidNode { node: 10, .. })
        ));
        assert!(matches!(
            count_walks_memoized(&graph, 10, 1),
            Err(WalkError::InvalidNode { node: 10, .. })
        ));
    }
}

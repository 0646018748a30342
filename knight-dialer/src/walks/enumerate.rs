//! Brute-force walk enumeration, the reference oracle for every counter.

use tracing::debug;

use crate::error::WalkError;
use crate::graph::{Graph, Node};
use crate::matrix::Count;

/// Lazy depth-first iterator over every walk of a fixed length.
///
/// Walks are produced in lexicographic order of adjacency-list positions.
/// The iterator keeps its own DFS stack, so no native recursion is involved,
/// and it can be replayed with [`Walks::rewind`].
#[derive(Debug, Clone)]
pub struct Walks<'g, const N: usize> {
    graph: &'g Graph<N>,
    start: Node,
    hops: u32,
    path: Vec<Node>,
    // Next adjacency-list position to try, one per node on `path`
    cursors: Vec<usize>,
}

impl<'g, const N: usize> Walks<'g, N> {
    fn new(graph: &'g Graph<N>, start: Node, hops: u32) -> Self {
        let mut walks = Self {
            graph,
            start,
            hops,
            path: Vec::new(),
            cursors: Vec::new(),
        };
        walks.rewind();
        walks
    }

    /// Restarts enumeration from the first walk.
    pub fn rewind(&mut self) {
        self.path.clear();
        self.cursors.clear();
        self.path.push(self.start);
        self.cursors.push(0);
    }

    fn is_complete(&self) -> bool {
        self.path.len() == self.hops as usize + 1
    }

    fn backtrack(&mut self) {
        self.path.pop();
        self.cursors.pop();
    }
}

impl<const N: usize> Iterator for Walks<'_, N> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Vec<Node>> {
        loop {
            if self.is_complete() {
                let walk = self.path.clone();
                self.backtrack();
                return Some(walk);
            }

            let (&node, cursor) = self.path.last().zip(self.cursors.last_mut())?;
            let next = self.graph.adjacent(node).get(*cursor).copied();
            match next {
                Some(next) => {
                    *cursor += 1;
                    self.path.push(next);
                    self.cursors.push(0);
                }
                None => self.backtrack(),
            }
        }
    }
}

/// Enumerates every walk of `hops` edges starting at `start`.
///
/// Each walk holds `hops + 1` nodes, the first being `start`.
pub fn enumerate_walks<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Walks<'_, N>, WalkError> {
    graph.check_node(start)?;
    Ok(Walks::new(graph, start, hops))
}

/// Counts walks by enumerating them one by one.
///
/// Exponential in `hops`; only meant as a cross-check for small inputs.
pub fn count_walks_naive<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Count, WalkError> {
    let walks = enumerate_walks(graph, start, hops)?;
    let count = Count::try_from(walks.count()).map_err(|_| WalkError::Overflow)?;
    debug!(start, hops, count, "enumerated walks");
    Ok(count)
}

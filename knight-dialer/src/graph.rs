//! Graph model held as an adjacency list and an adjacency matrix.
//!
//! Both representations are supplied (or derived) at construction and checked
//! against each other; a [`Graph`] that exists is always consistent.

use std::ops::Range;

use tracing::debug;

use crate::error::WalkError;
use crate::matrix::{Count, Matrix};

/// Node identifier, an index in `0..N`.
pub type Node = usize;

/// Number of keys on the phone keypad.
pub const KEYPAD_SIZE: usize = 10;

/// Knight moves between keypad keys.
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
///   0
/// ```
///
/// Key 5 has no knight move to any other key.
pub const KEYPAD_NEIGHBORS: [&[Node]; KEYPAD_SIZE] = [
    &[4, 6],    // 0
    &[6, 8],    // 1
    &[7, 9],    // 2
    &[4, 8],    // 3
    &[3, 9, 0], // 4
    &[],        // 5
    &[1, 7, 0], // 6
    &[2, 6],    // 7
    &[1, 3],    // 8
    &[2, 4],    // 9
];

/// The same knight moves as an adjacency matrix.
pub const KEYPAD_MATRIX: [[u8; KEYPAD_SIZE]; KEYPAD_SIZE] = [
    [0, 0, 0, 0, 1, 0, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 0, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    [0, 0, 0, 0, 1, 0, 0, 0, 1, 0],
    [1, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0, 0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 1, 0, 1, 0, 0, 0, 0, 0],
];

/// A small fixed graph with `N` nodes.
///
/// Neighbor order in the adjacency list is preserved; it decides the order in
/// which walks are enumerated but never affects counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<const N: usize> {
    adjacency: [Vec<Node>; N],
    matrix: Matrix<N>,
}

impl<const N: usize> Graph<N> {
    /// Builds a graph from both representations, failing if they disagree.
    ///
    /// Rejects neighbors outside `0..N`, a neighbor listed twice, weights
    /// other than 0 or 1, and any pair where `weights[i][j] == 1` does not
    /// match `j` appearing in `adjacency[i]`.
    pub fn new(adjacency: [Vec<Node>; N], weights: [[u8; N]; N]) -> Result<Self, WalkError> {
        let mut listed = [[false; N]; N];
        for (from, neighbors) in adjacency.iter().enumerate() {
            for &to in neighbors {
                if to >= N {
                    return Err(WalkError::InvalidNode {
                        node: to,
                        node_count: N,
                    });
                }
                if listed[from][to] {
                    return Err(WalkError::GraphInconsistency {
                        from,
                        to,
                        detail: "neighbor listed more than once",
                    });
                }
                listed[from][to] = true;
            }
        }

        let mut rows: [[Count; N]; N] = [[0; N]; N];
        for from in 0..N {
            for to in 0..N {
                let weight = weights[from][to];
                if weight > 1 {
                    return Err(WalkError::GraphInconsistency {
                        from,
                        to,
                        detail: "matrix weight must be 0 or 1",
                    });
                }
                match (listed[from][to], weight == 1) {
                    (true, false) => {
                        return Err(WalkError::GraphInconsistency {
                            from,
                            to,
                            detail: "edge in adjacency list is missing from matrix",
                        });
                    }
                    (false, true) => {
                        return Err(WalkError::GraphInconsistency {
                            from,
                            to,
                            detail: "edge in matrix is missing from adjacency list",
                        });
                    }
                    _ => {}
                }
                rows[from][to] = Count::from(weight);
            }
        }

        let graph = Self {
            adjacency,
            matrix: Matrix::from_rows(rows),
        };
        debug!(
            nodes = N,
            edges = graph.edge_count(),
            undirected = graph.is_undirected(),
            "graph validated"
        );
        Ok(graph)
    }

    /// Builds a graph from an adjacency list, deriving the matrix from it.
    pub fn from_adjacency(adjacency: [Vec<Node>; N]) -> Result<Self, WalkError> {
        let mut weights = [[0u8; N]; N];
        for (from, neighbors) in adjacency.iter().enumerate() {
            for &to in neighbors {
                if to >= N {
                    return Err(WalkError::InvalidNode {
                        node: to,
                        node_count: N,
                    });
                }
                weights[from][to] = 1;
            }
        }
        Self::new(adjacency, weights)
    }

    /// Number of nodes.
    pub const fn node_count(&self) -> usize {
        N
    }

    /// All node identifiers in ascending order.
    pub fn nodes(&self) -> Range<Node> {
        0..N
    }

    /// Number of directed edges (an undirected edge counts twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, node: Node) -> bool {
        node < N
    }

    /// Fails with [`WalkError::InvalidNode`] unless `node` is in the graph.
    pub fn check_node(&self, node: Node) -> Result<(), WalkError> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(WalkError::InvalidNode {
                node,
                node_count: N,
            })
        }
    }

    /// Neighbors of `node` in adjacency-list order.
    pub fn neighbors(&self, node: Node) -> Result<&[Node], WalkError> {
        self.check_node(node)?;
        Ok(&self.adjacency[node])
    }

    pub fn degree(&self, node: Node) -> Result<usize, WalkError> {
        self.neighbors(node).map(<[Node]>::len)
    }

    /// The adjacency matrix, which doubles as the one-hop transfer matrix.
    pub fn adjacency_matrix(&self) -> &Matrix<N> {
        &self.matrix
    }

    /// Returns true if every edge can be traversed in both directions.
    pub fn is_undirected(&self) -> bool {
        self.matrix.is_symmetric()
    }

    /// Neighbor lookup for nodes already known to be valid.
    pub(crate) fn adjacent(&self, node: Node) -> &[Node] {
        &self.adjacency[node]
    }
}

impl Graph<KEYPAD_SIZE> {
    /// The phone keypad with knight-move adjacency.
    pub fn keypad() -> Result<Self, WalkError> {
        Self::new(KEYPAD_NEIGHBORS.map(<[Node]>::to_vec), KEYPAD_MATRIX)
    }
}

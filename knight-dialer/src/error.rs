//! Error types for graph construction and walk counting

use thiserror::Error;

use crate::graph::Node;

/// Error type shared by the graph model and every walk counter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// A start node or listed neighbor lies outside the graph's node set
    #[error("Invalid node {node}: graph has nodes 0..{node_count}")]
    InvalidNode { node: Node, node_count: usize },

    /// Hop count was negative or too large to represent
    #[error("Invalid hop count {0}: must be a non-negative 32-bit value")]
    InvalidHopCount(i64),

    /// Adjacency list and adjacency matrix disagree about an edge
    #[error("Graph inconsistency at ({from}, {to}): {detail}")]
    GraphInconsistency {
        from: Node,
        to: Node,
        detail: &'static str,
    },

    /// A walk count does not fit in `u128`
    #[error("Walk count overflowed u128")]
    Overflow,
}

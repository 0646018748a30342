//! Counting by exponentiating the transfer matrix.

use tracing::debug;

use crate::error::WalkError;
use crate::graph::{Graph, Node};
use crate::matrix::Count;

/// Counts walks as `(M^hops · 1)[start]`, where `M` is the adjacency matrix.
///
/// One hop of the bottom-up counter is exactly `prior ↦ M · prior`, so
/// `hops` hops from the all-ones vector is `M^hops · 1`. The power is formed
/// by repeated squaring in `O(N³ log hops)` time, so even `u32::MAX` hops
/// takes at most 63 matrix products.
///
/// Overflow is tracked per entry: only an overflowed `start` entry is an
/// error.
pub fn count_walks_matrix_power<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Count, WalkError> {
    graph.check_node(start)?;
    let power = graph.adjacency_matrix().checked_pow(hops);
    let count = power.checked_mul_vector(&[Some(1); N])[start].ok_or(WalkError::Overflow)?;
    debug!(start, hops, count, "matrix power count");
    Ok(count)
}

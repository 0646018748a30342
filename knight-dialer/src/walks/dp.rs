//! Bottom-up counting with two fixed-size hop-count vectors.

use tracing::{debug, trace};

use crate::error::WalkError;
use crate::graph::{Graph, Node};
use crate::matrix::{CheckedHopCounts, Count, HopCounts};

/// Walk counts of length `hops` for every start node at once, with overflow
/// tracked per node.
///
/// Starts from the zero-hop vector (one walk per node) and applies
/// `current[p] = Σ prior[n]` over neighbors `n` of `p` once per hop. Space is
/// two `N`-element arrays whatever `hops` is. An entry is `None` exactly when
/// that node's count does not fit in [`Count`]; other entries stay exact.
pub fn checked_hop_counts<const N: usize>(graph: &Graph<N>, hops: u32) -> CheckedHopCounts<N> {
    let mut prior: CheckedHopCounts<N> = [Some(1); N];

    for hop in 1..=hops {
        let mut current: CheckedHopCounts<N> = [Some(0); N];
        for (position, slot) in current.iter_mut().enumerate() {
            *slot = graph
                .adjacent(position)
                .iter()
                .try_fold(0, |sum: Count, &neighbor| sum.checked_add(prior[neighbor]?));
        }
        trace!(hop, ?current, "hop counts");
        prior = current;
    }

    prior
}

/// Walk counts of length `hops` for every start node.
///
/// Fails with [`WalkError::Overflow`] if any node's count does not fit; use
/// [`checked_hop_counts`] to keep the nodes that do.
pub fn hop_counts<const N: usize>(graph: &Graph<N>, hops: u32) -> Result<HopCounts<N>, WalkError> {
    let checked = checked_hop_counts(graph, hops);
    let mut counts: HopCounts<N> = [0; N];
    for (slot, count) in counts.iter_mut().zip(checked) {
        *slot = count.ok_or(WalkError::Overflow)?;
    }
    Ok(counts)
}

/// Counts walks bottom-up in linear time and constant space.
pub fn count_walks_dp<const N: usize>(
    graph: &Graph<N>,
    start: Node,
    hops: u32,
) -> Result<Count, WalkError> {
    graph.check_node(start)?;
    let count = checked_hop_counts(graph, hops)[start].ok_or(WalkError::Overflow)?;
    debug!(start, hops, count, "dp count");
    Ok(count)
}

//! Walk counters.
//!
//! Five interchangeable ways to count the walks of `hops` edges from a start
//! node. They share one contract: for the same graph and valid
//! `(start, hops)` they return the same count.
//!
//! | Method | Time | Space |
//! |---|---|---|
//! | [`Method::Naive`] | O(walks) | O(hops) |
//! | [`Method::Recursive`] | exponential in hops | O(hops) |
//! | [`Method::Memoized`] | O(N × hops) | O(N × hops) |
//! | [`Method::Dp`] | O(edges × hops) | O(N) |
//! | [`Method::MatrixPower`] | O(N³ log hops) | O(N²) |

mod dp;
mod enumerate;
mod matrix_power;
mod recurrence;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

pub use dp::{checked_hop_counts, count_walks_dp, hop_counts};
pub use enumerate::{Walks, count_walks_naive, enumerate_walks};
pub use matrix_power::count_walks_matrix_power;
pub use recurrence::{
    WalkKey, WalkMemo, WalkRecurrence, count_walks_memoized, count_walks_recursive,
};

use crate::error::WalkError;
use crate::graph::{Graph, Node};
use crate::matrix::Count;

/// A walk-counting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Enumerate every walk and count them
    Naive,
    /// Evaluate the recurrence without caching
    Recursive,
    /// Evaluate the recurrence with a `(node, hops)` cache
    Memoized,
    /// Bottom-up over two hop-count vectors
    Dp,
    /// Repeated squaring of the transfer matrix
    MatrixPower,
}

impl Method {
    /// Every method, cheapest-to-explain first.
    pub const ALL: [Method; 5] = [
        Method::Naive,
        Method::Recursive,
        Method::Memoized,
        Method::Dp,
        Method::MatrixPower,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Method::Naive => "naive",
            Method::Recursive => "recursive",
            Method::Memoized => "memoized",
            Method::Dp => "dp",
            Method::MatrixPower => "matrix-power",
        }
    }

    /// True for methods whose cost grows exponentially with `hops`.
    pub const fn is_exponential(self) -> bool {
        matches!(self, Method::Naive | Method::Recursive)
    }

    /// Counts walks of `hops` edges from `start` with this method.
    pub fn count<const N: usize>(
        self,
        graph: &Graph<N>,
        start: Node,
        hops: u32,
    ) -> Result<Count, WalkError> {
        debug!(method = self.name(), start, hops, "counting walks");
        match self {
            Method::Naive => count_walks_naive(graph, start, hops),
            Method::Recursive => count_walks_recursive(graph, start, hops),
            Method::Memoized => count_walks_memoized(graph, start, hops),
            Method::Dp => count_walks_dp(graph, start, hops),
            Method::MatrixPower => count_walks_matrix_power(graph, start, hops),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown method name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown method '{0}'")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| UnknownMethod(s.to_string()))
    }
}

/// Converts a caller-supplied signed hop count, rejecting negatives before
/// any counting starts.
pub fn hops_from_signed(hops: i64) -> Result<u32, WalkError> {
    u32::try_from(hops).map_err(|_| WalkError::InvalidHopCount(hops))
}

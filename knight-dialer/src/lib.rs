//! Knight-dialer walk counting
//!
//! Counts the distinct walks a chess knight can make across a phone keypad,
//! where every landing dials a key:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//!   0
//! ```
//!
//! The graph is held both as an adjacency list and as an adjacency matrix
//! ([`Graph`]), checked for consistency at construction. Five counters share
//! one contract and trade time for space differently; see [`walks`].
//!
//! # Quick Example
//!
//! ```
//! use knight_dialer::{Graph, Method};
//!
//! let keypad = Graph::keypad()?;
//! for method in Method::ALL {
//!     assert_eq!(method.count(&keypad, 6, 2)?, 6);
//! }
//! # Ok::<(), knight_dialer::WalkError>(())
//! ```

pub mod error;
pub mod graph;
pub mod matrix;
pub mod utils;
pub mod walks;

// Re-export public API
pub use error::WalkError;
pub use graph::{Graph, KEYPAD_MATRIX, KEYPAD_NEIGHBORS, KEYPAD_SIZE, Node};
pub use matrix::{CheckedCount, CheckedHopCounts, Count, HopCounts, Matrix};
pub use walks::{
    Method, UnknownMethod, WalkMemo, Walks, checked_hop_counts, count_walks_dp,
    count_walks_matrix_power, count_walks_memoized, count_walks_naive, count_walks_recursive,
    enumerate_walks, hop_counts, hops_from_signed,
};

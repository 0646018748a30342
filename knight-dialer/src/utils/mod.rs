//! Reusable building blocks for the walk counters.

pub mod dp_cache;

//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Walk counting or graph construction error
    #[error("Walk error: {0}")]
    Walk(#[from] knight_dialer::WalkError),

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Methods returned different counts for the same input
    #[error("Methods disagree for start {start} after {hops} hops: {counts}")]
    Disagreement {
        start: usize,
        hops: u32,
        counts: String,
    },
}

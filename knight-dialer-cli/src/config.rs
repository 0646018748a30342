//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use knight_dialer::{Graph, Method, Node, hops_from_signed};
use tracing::warn;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Validated start key
    pub start: Node,
    /// Validated hop count
    pub hops: u32,
    /// Methods to run, in display order, without duplicates
    pub methods: Vec<Method>,
    /// Whether to print counts for every start key
    pub all_starts: bool,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, validating them against the graph
    pub fn from_args<const N: usize>(args: Args, graph: &Graph<N>) -> Result<Self, CliError> {
        graph.check_node(args.start)?;
        let hops = hops_from_signed(args.hops)?;
        let methods = resolve_methods(&args, hops)?;
        let thread_count = args.threads.unwrap_or_else(num_cpus).max(1);

        Ok(Config {
            start: args.start,
            hops,
            methods,
            all_starts: args.all_starts,
            thread_count,
            quiet: args.quiet,
        })
    }
}

/// Pick the requested methods, dropping exponential ones past the hop limit
fn resolve_methods(args: &Args, hops: u32) -> Result<Vec<Method>, CliError> {
    let requested: Vec<Method> = if args.method.is_empty() {
        Method::ALL.to_vec()
    } else {
        // Keep Method::ALL order so output is stable whatever the flag order
        Method::ALL
            .into_iter()
            .filter(|m| args.method.iter().any(|&arg| Method::from(arg) == *m))
            .collect()
    };

    let (runnable, skipped): (Vec<Method>, Vec<Method>) = requested
        .into_iter()
        .partition(|m| !m.is_exponential() || hops <= args.max_exponential_hops);

    for method in &skipped {
        warn!(
            method = method.name(),
            hops,
            limit = args.max_exponential_hops,
            "skipping exponential method"
        );
    }

    if runnable.is_empty() {
        return Err(CliError::Config(format!(
            "No method can run {} hops; exponential methods are limited to {} \
             (see --max-exponential-hops)",
            hops, args.max_exponential_hops
        )));
    }

    Ok(runnable)
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

//! Parallel executor for running walk counters

use crate::config::Config;
use crate::error::CliError;
use itertools::Itertools;
use knight_dialer::{Count, Graph, Method, Node, WalkError};
use rayon::prelude::*;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result from a single method run
#[derive(Debug, Clone)]
pub struct MethodResult {
    pub method: Method,
    pub start: Node,
    pub hops: u32,
    pub count: Result<Count, WalkError>,
    pub duration: Duration,
}

/// Work item representing one method run from one start key
#[derive(Debug, Clone, Copy)]
pub struct WorkItem {
    pub method: Method,
    pub start: Node,
}

/// Parallel executor for running walk counters
pub struct Executor {
    methods: Vec<Method>,
    starts: Vec<Node>,
    hops: u32,
    thread_pool: rayon::ThreadPool,
}

impl Executor {
    /// Create a new executor from config
    pub fn new<const N: usize>(config: &Config, graph: &Graph<N>) -> Result<Self, CliError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| CliError::ThreadPool(e.to_string()))?;

        let starts = if config.all_starts {
            graph.nodes().collect()
        } else {
            vec![config.start]
        };

        Ok(Self {
            methods: config.methods.clone(),
            starts,
            hops: config.hops,
            thread_pool,
        })
    }

    /// Work items ordered by start key, then method
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.starts
            .iter()
            .cartesian_product(&self.methods)
            .map(|(&start, &method)| WorkItem { method, start })
            .collect()
    }

    /// Run every work item on the pool, returning results in work-item order
    pub fn execute<const N: usize>(&self, graph: &Graph<N>) -> Vec<MethodResult> {
        let work_items = self.collect_work_items();
        info!(
            items = work_items.len(),
            threads = self.thread_pool.current_num_threads(),
            "running walk counters"
        );

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_method(graph, work, self.hops))
                .collect()
        })
    }
}

/// Time one method run
fn run_method<const N: usize>(graph: &Graph<N>, work: WorkItem, hops: u32) -> MethodResult {
    let started = Instant::now();
    let count = work.method.count(graph, work.start, hops);
    let duration = started.elapsed();
    debug!(
        method = work.method.name(),
        start = work.start,
        ?count,
        ?duration,
        "method finished"
    );

    MethodResult {
        method: work.method,
        start: work.start,
        hops,
        count,
        duration,
    }
}

/// The result every method agreed on, one per start key.
///
/// Methods must agree on failures too: an overflow reported by one method
/// while another returns a count is a disagreement.
pub fn check_agreement(
    results: &[MethodResult],
) -> Result<Vec<(Node, Result<Count, WalkError>)>, CliError> {
    let by_start = results.iter().chunk_by(|r| r.start);
    by_start
        .into_iter()
        .filter_map(|(start, group)| {
            let group: Vec<&MethodResult> = group.collect();
            let first = group.first()?;

            if !group.iter().map(|r| &r.count).all_equal() {
                return Some(Err(CliError::Disagreement {
                    start,
                    hops: first.hops,
                    counts: group
                        .iter()
                        .map(|r| format!("{}={}", r.method, format_count(&r.count)))
                        .join(", "),
                }));
            }

            Some(Ok((start, first.count.clone())))
        })
        .collect()
}

/// A count, or its error, for display
pub fn format_count(count: &Result<Count, WalkError>) -> String {
    match count {
        Ok(count) => count.to_string(),
        Err(e) => format!("error: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use clap::Parser;

    fn executor_for(argv: &[&str]) -> (Executor, Graph<10>) {
        let graph = Graph::keypad().unwrap();
        let argv = std::iter::once("dialer").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        let config = Config::from_args(args, &graph).unwrap();
        (Executor::new(&config, &graph).unwrap(), graph)
    }

    fn result(method: Method, start: Node, count: Result<Count, WalkError>) -> MethodResult {
        MethodResult {
            method,
            start,
            hops: 3,
            count,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_work_items_cover_every_start_and_method() {
        let (executor, _) = executor_for(&["--all-starts", "-m", "dp,matrix-power"]);
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 20);
        assert_eq!(items[0].start, 0);
        assert_eq!(items[0].method, Method::Dp);
        assert_eq!(items[1].method, Method::MatrixPower);
        assert_eq!(items[19].start, 9);
    }

    #[test]
    fn test_execute_preserves_order_and_agrees() {
        let (executor, graph) = executor_for(&["--threads", "4"]);
        let results = executor.execute(&graph);
        let methods: Vec<Method> = results.iter().map(|r| r.method).collect();
        assert_eq!(methods, Method::ALL.to_vec());

        let agreed = check_agreement(&results).unwrap();
        assert_eq!(agreed, vec![(6, Ok(6))]);
    }

    #[test]
    fn test_all_starts_match_hop_counts() {
        let (executor, graph) = executor_for(&["--all-starts", "-n", "5", "-m", "memoized,dp"]);
        let agreed = check_agreement(&executor.execute(&graph)).unwrap();
        let counts: Vec<Count> = agreed.into_iter().map(|(_, c)| c.unwrap()).collect();
        assert_eq!(counts, vec![64, 52, 52, 52, 84, 0, 84, 52, 52, 52]);
    }

    #[test]
    fn test_disagreement_is_reported() {
        let results = vec![
            result(Method::Naive, 4, Ok(8)),
            result(Method::Dp, 4, Ok(9)),
        ];
        match check_agreement(&results) {
            Err(CliError::Disagreement { start, hops, counts }) => {
                assert_eq!(start, 4);
                assert_eq!(hops, 3);
                assert_eq!(counts, "naive=8, dp=9");
            }
            other => panic!("expected disagreement, got {:?}", other),
        }
    }

    #[test]
    fn test_overflow_next_to_a_count_is_a_disagreement() {
        let results = vec![
            result(Method::Memoized, 5, Ok(0)),
            result(Method::Dp, 5, Err(WalkError::Overflow)),
        ];
        match check_agreement(&results) {
            Err(CliError::Disagreement { start, counts, .. }) => {
                assert_eq!(start, 5);
                assert_eq!(counts, "memoized=0, dp=error: Walk count overflowed u128");
            }
            other => panic!("expected disagreement, got {:?}", other),
        }
    }

    #[test]
    fn test_shared_overflow_is_agreement() {
        let results = vec![
            result(Method::Memoized, 6, Err(WalkError::Overflow)),
            result(Method::Dp, 6, Err(WalkError::Overflow)),
        ];
        let agreed = check_agreement(&results).unwrap();
        assert_eq!(agreed, vec![(6, Err(WalkError::Overflow))]);
    }

    #[test]
    fn test_isolated_key_agrees_past_overflow_elsewhere() {
        let (executor, graph) = executor_for(&["--all-starts", "-n", "108"]);
        let agreed = check_agreement(&executor.execute(&graph)).unwrap();
        for (start, count) in agreed {
            let expected = if start == 5 { Ok(0) } else { Err(WalkError::Overflow) };
            assert_eq!(count, expected, "key {}", start);
        }
    }
}

//! Output formatting for walk counts

use crate::executor::{MethodResult, format_count};
use knight_dialer::{Count, Node, WalkError};
use std::time::{Duration, Instant};

/// Output formatter for method results
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Format and print a single method result (nothing in quiet mode)
    pub fn print_result(&self, result: &MethodResult) {
        if self.quiet {
            return;
        }

        let prefix = format!(
            "start {} after {} hops [{}]",
            result.start, result.hops, result.method
        );
        match &result.count {
            Ok(count) => println!(
                "{}: {} ({})",
                prefix,
                count,
                format_duration(result.duration)
            ),
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Print the agreed count for each start key
    pub fn print_counts(&self, counts: &[(Node, Result<Count, WalkError>)]) {
        if !self.quiet && counts.len() > 1 {
            println!();
            println!("--- Walks per start key ---");
        }

        for (start, count) in counts {
            let shown = format_count(count);
            match (self.quiet, counts.len()) {
                (true, 1) => println!("{}", shown),
                _ => println!("{}: {}", start, shown),
            }
        }
    }

    /// Print a summary after all results
    /// Shows both total compute time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[MethodResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.count.is_ok()).count();
        let failures = total - successes;

        let total_compute_time: Duration = results.iter().map(|r| r.duration).sum();
        let elapsed_time = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Runs: {} counted, {} failed", successes, failures);
        println!("Total compute time: {}", format_duration(total_compute_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed_time));
        if !elapsed_time.is_zero() {
            let speedup = total_compute_time.as_secs_f64() / elapsed_time.as_secs_f64();
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

/// Format a duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(2250)), "2.25s");
    }
}

//! Knight dialer CLI - count knight-move walks on a phone keypad with every method

mod cli;
mod config;
mod error;
mod executor;
mod output;

use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use knight_dialer::Graph;
use output::OutputFormatter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the `-v` count
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let graph = Graph::keypad()?;
    let config = Config::from_args(args, &graph)?;
    let executor = Executor::new(&config, &graph)?;

    let formatter = OutputFormatter::new(config.quiet);
    let results = executor.execute(&graph);
    for result in &results {
        formatter.print_result(result);
    }

    let agreed = executor::check_agreement(&results)?;
    formatter.print_counts(&agreed);
    formatter.print_summary(&results);

    // Only the requested start decides the exit status
    match agreed.iter().find(|(start, _)| *start == config.start) {
        Some((_, Err(e))) => Err(e.clone().into()),
        _ => Ok(()),
    }
}

//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use knight_dialer::Method;

/// Walk-counting method selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MethodArg {
    /// Enumerate every walk (exponential)
    Naive,
    /// Recurrence without caching (exponential)
    Recursive,
    /// Recurrence with a (node, hops) cache
    Memoized,
    /// Bottom-up over two hop-count vectors
    Dp,
    /// Repeated squaring of the transfer matrix
    MatrixPower,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Naive => Method::Naive,
            MethodArg::Recursive => Method::Recursive,
            MethodArg::Memoized => Method::Memoized,
            MethodArg::Dp => Method::Dp,
            MethodArg::MatrixPower => Method::MatrixPower,
        }
    }
}

/// Count knight-move walks on a phone keypad
#[derive(Parser, Debug)]
#[command(name = "dialer", about = "Count knight-move walks on a phone keypad", version)]
pub struct Args {
    /// Key the knight starts on
    #[arg(short, long, default_value_t = 6)]
    pub start: usize,

    /// Number of hops to make
    #[arg(short = 'n', long, default_value_t = 2, allow_negative_numbers = true)]
    pub hops: i64,

    /// Methods to run (comma-separated; runs all if omitted)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub method: Vec<MethodArg>,

    /// Largest hop count for which exponential methods still run
    #[arg(long, default_value_t = 30)]
    pub max_exponential_hops: u32,

    /// Also print the walk count for every start key
    #[arg(long)]
    pub all_starts: bool,

    /// Number of threads for running methods in parallel
    #[arg(long)]
    pub threads: Option<usize>,

    /// Quiet mode - only output the agreed count
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_classic_example() {
        let args = Args::try_parse_from(["dialer"]).unwrap();
        assert_eq!(args.start, 6);
        assert_eq!(args.hops, 2);
        assert!(args.method.is_empty());
    }

    #[test]
    fn test_method_list_and_negative_hops_parse() {
        let args =
            Args::try_parse_from(["dialer", "-n", "-4", "--method", "dp,matrix-power"]).unwrap();
        assert_eq!(args.hops, -4);
        assert_eq!(args.method, vec![MethodArg::Dp, MethodArg::MatrixPower]);
    }

    #[test]
    fn test_value_enum_names_match_library_names() {
        for arg in MethodArg::value_variants() {
            let name = arg.to_possible_value().unwrap();
            assert_eq!(name.get_name(), Method::from(*arg).name());
        }
    }
}

//! Benchmark comparing the walk-counting methods on the keypad.
//!
//! Run with: cargo run --example method_benchmark --release
//!
//! Times every method over all start keys for increasing hop counts:
//! - Enumeration and plain recursion only up to `MAX_EXPONENTIAL_HOPS`
//! - Memoized, bottom-up and matrix power up to `MAX_HOPS`
//!
//! Every timing run is checked against the bottom-up hop-count vector.

use knight_dialer::{Graph, Method, WalkError, hop_counts};
use std::time::Instant;

const MAX_EXPONENTIAL_HOPS: u32 = 16;
const MAX_HOPS: u32 = 106;

fn main() -> Result<(), WalkError> {
    let graph = Graph::keypad()?;

    println!("Knight Dialer Method Benchmark");
    println!("==============================");

    for hops in [4, 8, 12, MAX_EXPONENTIAL_HOPS, 32, 64, MAX_HOPS] {
        let expected = hop_counts(&graph, hops)?;
        println!("\n=== {} hops ===", hops);

        for method in Method::ALL {
            if method.is_exponential() && hops > MAX_EXPONENTIAL_HOPS {
                println!("{:<14} skipped (exponential)", method.name());
                continue;
            }

            let start = Instant::now();
            for node in graph.nodes() {
                let count = method.count(&graph, node, hops)?;
                assert_eq!(count, expected[node], "{} disagrees at key {}", method, node);
            }
            println!("{:<14} {:?}", method.name(), start.elapsed());
        }
    }

    Ok(())
}

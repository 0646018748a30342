//! Property-based tests for the walk counters
//!
//! **Feature: walk-counting-agreement**

use knight_dialer::{
    Count, Graph, KEYPAD_SIZE, Method, Node, count_walks_naive, enumerate_walks, hop_counts,
};
use proptest::prelude::*;

fn keypad() -> Graph<KEYPAD_SIZE> {
    Graph::keypad().unwrap()
}

fn any_node() -> impl Strategy<Value = Node> {
    0..KEYPAD_SIZE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Feature: walk-counting-agreement, Property 1: All methods agree**
    /// *For any* start node and hops <= 6, every method returns the count
    /// produced by enumerating the walks.
    #[test]
    fn prop_all_methods_agree(start in any_node(), hops in 0u32..=6) {
        let graph = keypad();
        let expected = count_walks_naive(&graph, start, hops).unwrap();

        for method in Method::ALL {
            prop_assert_eq!(
                method.count(&graph, start, hops).unwrap(),
                expected,
                "{} disagrees for start={} hops={}", method, start, hops
            );
        }
    }

    /// **Feature: walk-counting-agreement, Property 2: Recurrence law**
    /// *For any* start node and 1 <= hops <= 6, each method's count equals the
    /// sum of its own counts from the neighbors with one hop fewer.
    #[test]
    fn prop_recurrence_holds(start in any_node(), hops in 1u32..=6) {
        let graph = keypad();

        for method in Method::ALL {
            let total = method.count(&graph, start, hops).unwrap();
            let from_neighbors: Count = graph
                .neighbors(start)
                .unwrap()
                .iter()
                .map(|&n| method.count(&graph, n, hops - 1).unwrap())
                .sum();
            prop_assert_eq!(total, from_neighbors, "{} breaks the recurrence", method);
        }
    }

    /// **Feature: walk-counting-agreement, Property 3: Enumerated walks are valid and distinct**
    /// *For any* start node and hops <= 5, every enumerated walk has hops + 1
    /// nodes, begins at start, follows edges, and appears once.
    #[test]
    fn prop_enumerated_walks_are_valid(start in any_node(), hops in 0u32..=5) {
        let graph = keypad();
        let walks: Vec<_> = enumerate_walks(&graph, start, hops).unwrap().collect();

        for walk in &walks {
            prop_assert_eq!(walk.len(), hops as usize + 1);
            prop_assert_eq!(walk[0], start);
            for pair in walk.windows(2) {
                prop_assert!(graph.neighbors(pair[0]).unwrap().contains(&pair[1]));
            }
        }

        let mut sorted = walks.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), walks.len());
    }

    /// **Feature: walk-counting-agreement, Property 4: Isolated key has no walks**
    /// *For any* hops >= 1, including counts past the point where other keys
    /// overflow, every method returns zero walks from key 5.
    #[test]
    fn prop_isolated_node_is_zero(hops in 1u32..=2_000) {
        let graph = keypad();
        for method in Method::ALL {
            prop_assert_eq!(method.count(&graph, 5, hops), Ok(0), "{}", method);
        }
    }

    /// **Feature: walk-counting-agreement, Property 5: Fast methods agree at scale**
    /// *For any* start node and hops <= 106, the memoized, bottom-up and matrix
    /// counters agree and match the all-starts hop-count vector.
    #[test]
    fn prop_fast_methods_agree(start in any_node(), hops in 0u32..=106) {
        let graph = keypad();
        let expected = hop_counts(&graph, hops).unwrap()[start];

        for method in [Method::Memoized, Method::Dp, Method::MatrixPower] {
            prop_assert_eq!(method.count(&graph, start, hops).unwrap(), expected);
        }
    }
}

/// Base case under every method: one zero-hop walk per node
#[test]
fn test_zero_hops_is_one_everywhere() {
    let graph = keypad();
    for start in graph.nodes() {
        for method in Method::ALL {
            assert_eq!(method.count(&graph, start, 0).unwrap(), 1, "{} at {}", method, start);
        }
    }
}

/// The isolated key contributes nothing once it has to move
#[test]
fn test_isolated_node_has_no_walks() {
    let graph = keypad();
    for hops in (1..=8).chain([53, 54, 55, 107, 108, 500, 100_000]) {
        for method in Method::ALL {
            assert_eq!(method.count(&graph, 5, hops), Ok(0), "{} at {} hops", method, hops);
        }
    }
}

/// Counters that never step through other keys stay exact at the largest hop count
#[test]
fn test_isolated_node_at_max_hops() {
    let graph = keypad();
    for method in [Method::Naive, Method::Recursive, Method::Memoized, Method::MatrixPower] {
        assert_eq!(method.count(&graph, 5, u32::MAX), Ok(0), "{}", method);
    }
}

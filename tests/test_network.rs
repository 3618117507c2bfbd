//! Integration tests for the ComparatorNetwork matching table.
//!
//! Exercises the public surface end to end:
//! - Structural invariants under construction and mutation
//! - Text description parsing and rendering
//! - Pruning to narrower widths
//! - File round trips

use proptest::prelude::*;
use sortnet::builders::{bitonic, bubble, odd_even};
use sortnet::{ComparatorNetwork, SortnetError};

/// Every level of a valid network is a symmetric matching.
fn assert_matching(net: &ComparatorNetwork) {
    for level in 0..net.depth() {
        for ch in 0..net.num_inputs() {
            let p = net.partner(level, ch);
            assert!(p < net.num_inputs());
            assert_eq!(net.partner(level, p), ch);
        }
    }
}

#[test]
fn test_builders_produce_valid_matchings() {
    for net in [bubble(7).unwrap(), odd_even(3).unwrap(), bitonic(4).unwrap()] {
        assert_matching(&net);

        let rescan: usize = (0..net.depth()).map(|l| net.comparators(l).count()).sum();
        assert_eq!(net.size(), rescan);
    }
}

#[test]
fn test_description_round_trip_for_builders() {
    for net in [bubble(6).unwrap(), odd_even(3).unwrap(), bitonic(3).unwrap()] {
        let text = net.to_description();
        let back = ComparatorNetwork::parse(&text).unwrap();

        assert_eq!(back.num_inputs(), net.num_inputs());
        assert_eq!(back.depth(), net.depth());
        assert_eq!(back.size(), net.size());

        for level in 0..net.depth() {
            for ch in 0..net.num_inputs() {
                assert_eq!(back.partner(level, ch), net.partner(level, ch));
            }
        }
    }
}

#[test]
fn test_prune_preserves_sorting() {
    // Pruning a sorting network to a narrower width yields a sorting
    // network for that width.
    for n in 5..8 {
        let mut net = odd_even(3).unwrap();
        net.prune(n).unwrap();

        assert_eq!(net.num_inputs(), n);
        assert_matching(&net);
        assert!(net.verify().sorts());
    }
}

#[test]
fn test_prune_then_prune_again() {
    let mut net = bitonic(4).unwrap();
    net.prune(11).unwrap();
    net.prune(6).unwrap();

    assert_eq!(net.num_inputs(), 6);
    assert_matching(&net);
    assert!(net.verify().sorts());
}

#[test]
fn test_prune_rejects_widening() {
    let mut net = bubble(4).unwrap();
    assert!(matches!(
        net.prune(5),
        Err(SortnetError::InvalidPruneTarget {
            requested: 5,
            inputs: 4
        })
    ));
    assert_eq!(net.num_inputs(), 4);
}

#[test]
fn test_parse_known_sorter() {
    // The optimal 5-input sorting network, depth 5, 9 comparators.
    let text = "0 3 1 4\n0 2 1 3\n0 1 2 4\n1 2 3 4\n2 3\n";
    let net = ComparatorNetwork::parse(text).unwrap();

    assert_eq!(net.num_inputs(), 5);
    assert_eq!(net.depth(), 5);
    assert_eq!(net.size(), 9);
    assert!(net.verify().sorts());
}

#[test]
fn test_parse_error_reports_line() {
    let err = ComparatorNetwork::parse("0 1\n2 3\nfoo 1\n").unwrap_err();

    match err {
        SortnetError::Parse { line, message } => {
            assert_eq!(line, 2);
            assert!(message.contains("foo"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_file_round_trip() {
    let dir = std::env::temp_dir();
    let path = dir.join("sortnet_test_network_roundtrip.txt");

    let net = odd_even(3).unwrap();
    net.write_to(&path).unwrap();

    let back = ComparatorNetwork::read_from(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(back.name(), "sortnet_test_network_roundtrip");
    assert_eq!(back.num_inputs(), net.num_inputs());
    assert_eq!(back.size(), net.size());
    assert!(back.verify().sorts());
}

#[test]
fn test_read_from_missing_file() {
    let err = ComparatorNetwork::read_from("/nonexistent/sortnet.txt").unwrap_err();
    assert!(matches!(err, SortnetError::Io(_)));
}

proptest! {
    /// Inserting arbitrary comparators never breaks the matching
    /// invariant or the cached size.
    #[test]
    fn prop_insert_keeps_matching(
        pairs in prop::collection::vec((0usize..4, 0usize..8, 0usize..8), 0..40)
    ) {
        let mut net = ComparatorNetwork::new(8, 4);

        for (level, i, j) in pairs {
            if i != j {
                net.insert_comparator(level, i, j).unwrap();
            }
        }

        assert_matching(&net);
        let rescan: usize = (0..net.depth()).map(|l| net.comparators(l).count()).sum();
        prop_assert_eq!(net.size(), rescan);
    }

    /// Parsing the rendered description reproduces the network exactly.
    #[test]
    fn prop_description_round_trip(
        pairs in prop::collection::vec((0usize..3, 0usize..6, 0usize..6), 1..20)
    ) {
        let mut net = ComparatorNetwork::new(6, 3);

        for (level, i, j) in pairs {
            if i != j {
                net.insert_comparator(level, i, j).unwrap();
            }
        }

        // Rendering drops idle trailing channels, so compare against a
        // reparse of the rendering rather than the original.
        let text = net.to_description();
        let once = ComparatorNetwork::parse(&text).unwrap();
        let twice = ComparatorNetwork::parse(&once.to_description()).unwrap();

        prop_assert_eq!(once, twice);
    }
}

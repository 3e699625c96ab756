//! Tests for the traversal search.

use super::*;
use anvilforge_core::Technique;
use anvilforge_test::oracle::shortest_path_length;
use anvilforge_test::techniques;

fn search(displacement: i32) -> Result<SearchOutcome> {
    TraversalSearch::default().search(displacement)
}

#[test]
fn test_zero_displacement_is_empty() {
    let outcome = search(0).unwrap();
    assert!(outcome.sequence.is_empty());
    assert_eq!(outcome.stats.nodes_expanded, 1);
    assert_eq!(outcome.stats.improvements, 1);
}

#[test]
fn test_single_step() {
    for technique in Technique::ALL {
        let outcome = search(technique.effect()).unwrap();
        assert_eq!(outcome.sequence, vec![Action::Concrete(technique)]);
    }
}

#[test]
fn test_first_equal_length_sequence_wins() {
    assert_eq!(
        search(4).unwrap().sequence,
        techniques(&[Technique::Punch, Technique::Punch])
    );
    assert_eq!(
        search(9).unwrap().sequence,
        techniques(&[Technique::Punch, Technique::Bend])
    );
    assert_eq!(
        search(-12).unwrap().sequence,
        techniques(&[Technique::LightHit, Technique::HeavyHit])
    );
}

#[test]
fn test_reference_displacement() {
    let outcome = search(66).unwrap();
    assert_eq!(
        outcome.sequence,
        techniques(&[
            Technique::Punch,
            Technique::Shrink,
            Technique::Shrink,
            Technique::Shrink,
            Technique::Shrink,
        ])
    );
    assert_eq!(DeltaResolver::cumulative_delta(&outcome.sequence), 66);
}

#[test]
fn test_longer_displacement() {
    let outcome = search(100).unwrap();
    assert_eq!(
        outcome.sequence,
        techniques(&[
            Technique::Bend,
            Technique::Upset,
            Technique::Shrink,
            Technique::Shrink,
            Technique::Shrink,
            Technique::Shrink,
            Technique::Shrink,
        ])
    );
}

#[test]
fn test_unreachable_displacements() {
    for displacement in [1, 3, 5] {
        let err = search(displacement).unwrap_err();
        assert_eq!(err, AnvilForgeError::Unreachable { displacement });
    }
}

#[test]
fn test_matches_brute_force_oracle() {
    for displacement in -40..=60 {
        match (search(displacement), shortest_path_length(displacement)) {
            (Ok(outcome), Some(expected)) => {
                assert_eq!(
                    outcome.sequence.len(),
                    expected,
                    "length for displacement {}",
                    displacement
                );
                assert_eq!(
                    DeltaResolver::cumulative_delta(&outcome.sequence),
                    displacement
                );
            }
            (Err(AnvilForgeError::Unreachable { .. }), None) => {}
            (result, expected) => panic!(
                "displacement {}: search gave {:?}, oracle gave {:?}",
                displacement, result, expected
            ),
        }
    }
}

#[test]
fn test_result_never_contains_placeholders() {
    for displacement in 0..=60 {
        if let Ok(outcome) = search(displacement) {
            assert!(outcome.sequence.iter().all(|a| !a.is_placeholder()));
        }
    }
}

#[test]
fn test_pruning_does_not_change_result() {
    let unpruned = TraversalSearch::new(SearchConfig {
        enable_pruning: false,
        ..SearchConfig::default()
    });
    for displacement in 0..=30 {
        let pruned = search(displacement).map(|o| o.sequence);
        let plain = unpruned.search(displacement).map(|o| o.sequence);
        assert_eq!(pruned, plain, "displacement {}", displacement);
    }
}

#[test]
fn test_pruning_expands_fewer_nodes() {
    let unpruned = TraversalSearch::new(SearchConfig {
        enable_pruning: false,
        ..SearchConfig::default()
    });
    let with = search(30).unwrap().stats.nodes_expanded;
    let without = unpruned.search(30).unwrap().stats.nodes_expanded;
    assert!(with < without);
}

#[test]
fn test_node_limit() {
    let limited = TraversalSearch::new(SearchConfig {
        node_limit: Some(10),
        ..SearchConfig::default()
    });
    let err = limited.search(66).unwrap_err();
    assert_eq!(err, AnvilForgeError::SearchLimitExceeded { nodes: 10 });

    // A search that finishes under the limit is unaffected.
    assert_eq!(limited.search(2).unwrap().sequence.len(), 1);
}

#[test]
fn test_depth_limit() {
    let shallow = TraversalSearch::new(SearchConfig {
        depth_limit: Some(1),
        ..SearchConfig::default()
    });
    assert_eq!(shallow.search(16).unwrap().sequence.len(), 1);
    assert_eq!(
        shallow.search(18).unwrap_err(),
        AnvilForgeError::DepthLimitExceeded {
            displacement: 18,
            depth_limit: 1,
        }
    );
}

#[test]
fn test_displacement_beyond_depth_limit_fails_at_root() {
    // 4000 needs at least 250 steps of 16, more than the default 128.
    let limited = TraversalSearch::new(SearchConfig {
        node_limit: Some(10),
        ..SearchConfig::default()
    });
    assert_eq!(
        limited.search(4000).unwrap_err(),
        AnvilForgeError::DepthLimitExceeded {
            displacement: 4000,
            depth_limit: 128,
        }
    );
    assert!(matches!(
        limited.search(-2049),
        Err(AnvilForgeError::DepthLimitExceeded { .. })
    ));
}

#[test]
fn test_unbounded_depth_terminates() {
    let unbounded = TraversalSearch::new(SearchConfig {
        depth_limit: None,
        ..SearchConfig::default()
    });
    assert_eq!(unbounded.search(66).unwrap().sequence.len(), 5);
    assert!(unbounded.search(5).is_err());
}

#[test]
fn test_extreme_displacement_does_not_overflow() {
    let limited = TraversalSearch::new(SearchConfig {
        node_limit: Some(1_000),
        ..SearchConfig::default()
    });
    assert!(limited.search(i32::MIN).is_err());
    assert!(limited.search(i32::MAX).is_err());
}

#[test]
fn test_repeatable() {
    let first = search(57).unwrap();
    let second = search(57).unwrap();
    assert_eq!(first.sequence, second.sequence);
    assert_eq!(first.stats.nodes_expanded, second.stats.nodes_expanded);
}

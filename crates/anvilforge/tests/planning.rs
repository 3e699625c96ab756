//! End-to-end planning through the public facade.

use anvilforge::prelude::*;
use anvilforge::{parse_sequence, DeltaResolver};
use anvilforge_test::oracle::shortest_path_length;
use anvilforge_test::{REFERENCE_END_SEQUENCE, REFERENCE_GOAL};

#[test]
fn reference_request() {
    let plan = anvilforge::plan(REFERENCE_GOAL, &REFERENCE_END_SEQUENCE).unwrap();

    assert_eq!(plan.final_position, 58);
    assert_eq!(plan.optimal_sequence.len(), shortest_path_length(66).unwrap());
    assert_eq!(DeltaResolver::cumulative_delta(&plan.optimal_sequence), 66);
    assert_eq!(plan.end_sequence, REFERENCE_END_SEQUENCE.to_vec());
}

#[test]
fn parsed_end_sequence() {
    let end = parse_sequence("Bend, AnyHit, Draw").unwrap();
    // AnyHit sees +7 and picks MediumHit: 7 - 6 - 15 = -14.
    assert_eq!(DeltaResolver::cumulative_delta(&end), -14);

    // 40 + 1 + 14 = 55, displacement 54 from the minimum.
    let plan = anvilforge::plan(40, &end).unwrap();
    assert_eq!(DeltaResolver::cumulative_delta(&plan.optimal_sequence), 54);
    assert_eq!(
        1 + DeltaResolver::cumulative_delta(&plan.full_sequence()),
        plan.final_position
    );
}

#[test]
fn out_of_bounds_goal() {
    let err = anvilforge::plan(200, &[]).unwrap_err();
    assert!(matches!(err, AnvilForgeError::InvalidGoal { .. }));
    assert!(err.to_string().starts_with("Invalid goal position or end sequence"));
}

#[test]
fn every_goal_in_range_is_planned_or_rejected() {
    let planner = CraftingPlanner::default();
    for goal in (0..100).step_by(7) {
        match planner.plan(goal, &[]) {
            Ok(plan) => {
                let displacement = goal;
                assert_eq!(
                    Some(plan.optimal_sequence.len()),
                    shortest_path_length(displacement)
                );
            }
            Err(AnvilForgeError::Unreachable { displacement }) => {
                assert_eq!(shortest_path_length(displacement), None);
            }
            Err(other) => panic!("goal {}: unexpected error {}", goal, other),
        }
    }
}

#[test]
fn configured_planner() {
    let config = PlannerConfig::from_toml_str(
        r#"
        [bounds]
        max_position = 60
        "#,
    )
    .unwrap();
    let planner = CraftingPlanner::try_new(config).unwrap();

    assert!(planner.plan(57, &REFERENCE_END_SEQUENCE).is_err());
    assert!(planner.plan(40, &REFERENCE_END_SEQUENCE).is_ok());
}

#[test]
fn sequence_with_technique_conversions() {
    let end: Sequence = vec![Technique::Upset.into(), Action::AnyHit];
    let first = anvilforge::plan(90, &end).unwrap();
    let second = anvilforge::plan(90, &end).unwrap();
    assert_eq!(first, second);
}

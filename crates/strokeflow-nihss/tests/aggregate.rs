use std::collections::HashMap;

use proptest::prelude::*;
use strokeflow_core::models::nihss::NihssItem;
use strokeflow_nihss::error::NihssError;
use strokeflow_nihss::{aggregate_named_items, aggregate_raw_exam, scores_from_named_items};

fn map(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn empty_mapping_totals_zero() {
    assert_eq!(aggregate_named_items(&HashMap::new()).unwrap(), 0);
}

#[test]
fn named_items_sum_with_missing_as_zero() {
    let items = map(&[("consciousness", 2), ("motor_arm_left", 4), ("dysarthria", 1)]);
    assert_eq!(aggregate_named_items(&items).unwrap(), 7);
}

#[test]
fn out_of_range_values_are_summed_as_is() {
    let items = map(&[("gaze", 9), ("visual", 10)]);
    assert_eq!(aggregate_named_items(&items).unwrap(), 19);
}

#[test]
fn unknown_key_is_invalid_field() {
    let items = map(&[("gaze", 1), ("limb_at", 1)]);
    match aggregate_named_items(&items) {
        Err(NihssError::InvalidField { field }) => assert_eq!(field, "limb_at"),
        other => panic!("expected InvalidField, got {other:?}"),
    }
}

#[test]
fn invalid_field_message_names_the_key() {
    let err = aggregate_named_items(&map(&[("pupils", 2)])).unwrap_err();
    assert_eq!(err.to_string(), "invalid NIHSS field: pupils");
}

#[test]
fn named_items_land_on_matching_fields() {
    let scores = scores_from_named_items(&map(&[("ataxia", 2), ("extinction", 1)])).unwrap();
    assert_eq!(scores.get(NihssItem::Ataxia), 2);
    assert_eq!(scores.get(NihssItem::Extinction), 1);
    assert_eq!(scores.get(NihssItem::Gaze), 0);
}

#[test]
fn loc_subfields_roll_into_consciousness() {
    let raw = map(&[
        ("loc", 1),
        ("loc_questions", 1),
        ("loc_commands", 0),
        ("gaze", 1),
        ("visual", 0),
        ("facial", 0),
        ("motor_arm_left", 0),
        ("motor_arm_right", 0),
        ("motor_leg_left", 0),
        ("motor_leg_right", 0),
        ("limb_ataxia", 0),
        ("sensory", 0),
        ("language", 0),
        ("dysarthria", 0),
        ("extinction", 0),
    ]);
    assert_eq!(aggregate_raw_exam(&raw), 3);
}

#[test]
fn raw_exam_ignores_unknown_fields() {
    let raw = map(&[("gaze", 2), ("patient_name", 99)]);
    assert_eq!(aggregate_raw_exam(&raw), 2);
}

#[test]
fn raw_exam_of_nothing_is_zero() {
    assert_eq!(aggregate_raw_exam(&HashMap::new()), 0);
}

proptest! {
    #[test]
    fn named_total_is_exact_sum(values in proptest::collection::vec(0u32..50, 13)) {
        let items: HashMap<String, u32> = NihssItem::ALL
            .iter()
            .zip(values.iter())
            .map(|(item, v)| (item.as_str().to_string(), *v))
            .collect();
        let expected: u32 = values.iter().sum();
        prop_assert_eq!(aggregate_named_items(&items).unwrap(), expected);
    }

    #[test]
    fn omitted_items_count_as_zero(values in proptest::collection::vec(0u32..50, 13), keep in 0usize..13) {
        let items: HashMap<String, u32> = NihssItem::ALL
            .iter()
            .zip(values.iter())
            .take(keep)
            .map(|(item, v)| (item.as_str().to_string(), *v))
            .collect();
        let expected: u32 = values.iter().take(keep).sum();
        prop_assert_eq!(aggregate_named_items(&items).unwrap(), expected);
    }

    #[test]
    fn any_unknown_key_is_rejected(key in "[a-z_]{1,20}") {
        prop_assume!(key.parse::<NihssItem>().is_err());
        let items: HashMap<String, u32> = [(key.clone(), 1)].into_iter().collect();
        let rejected = matches!(
            aggregate_named_items(&items),
            Err(NihssError::InvalidField { field }) if field == key
        );
        prop_assert!(rejected);
    }
}

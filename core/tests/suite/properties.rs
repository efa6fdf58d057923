//! Property-based tests for aggregation and list invariants using proptest.

use proptest::prelude::*;

use keel_core::{FieldStates, ListAccess, ListEdit, Outcome, WriteList};

use crate::common::Grades;

const KEYS: [&str; 12] = [
    "name", "email", "age", "pin", "grades", "street", "city", "zip", "phone", "role", "team",
    "locale",
];

fn property_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<u16>> {
    prop_oneof![
        any::<u16>().prop_map(Outcome::<u16>::ok),
        "[a-z]{1,12}".prop_map(Outcome::<u16>::fail),
    ]
}

fn outcomes_strategy() -> impl Strategy<Value = Vec<Outcome<u16>>> {
    proptest::collection::vec(outcome_strategy(), 0..=KEYS.len())
}

fn tracked(outcomes: &[Outcome<u16>]) -> FieldStates<&'static str> {
    let mut states = FieldStates::new();
    for (key, outcome) in KEYS.iter().zip(outcomes) {
        states.add_state(*key, outcome.clone());
    }
    states
}

fn edit_strategy() -> impl Strategy<Value = ListEdit<u8>> {
    let grade = 0_u8..6;
    prop_oneof![
        grade.clone().prop_map(ListEdit::Add),
        proptest::collection::vec(grade.clone(), 0..4).prop_map(ListEdit::AddMany),
        grade.clone().prop_map(ListEdit::Remove),
        proptest::collection::vec(grade.clone(), 0..4).prop_map(ListEdit::RemoveMany),
        proptest::collection::vec(grade, 0..6).prop_map(ListEdit::Replace),
    ]
}

proptest! {
    #![proptest_config(property_config())]

    #[test]
    fn passes_when_nothing_failed(values in proptest::collection::vec(any::<u16>(), 0..=KEYS.len())) {
        let outcomes: Vec<Outcome<u16>> = values.into_iter().map(Outcome::ok).collect();
        let states = tracked(&outcomes);
        prop_assert!(states.check_state().is_success());
    }

    #[test]
    fn first_failure_in_insertion_order_wins(outcomes in outcomes_strategy()) {
        let expected = outcomes.iter().find_map(|outcome| outcome.clone().failure());
        let verdict = tracked(&outcomes).check_state();
        match expected {
            Some(error) => prop_assert_eq!(verdict, Outcome::Fail(error)),
            None => prop_assert!(verdict.is_success()),
        }
    }

    #[test]
    fn re_adding_a_key_keeps_only_the_latest(first in outcome_strategy(), second in outcome_strategy()) {
        let mut states = FieldStates::new();
        states.add_state("name", first);
        states.add_state("name", second.clone());
        prop_assert_eq!(states.size(), 1);
        let stored = states.state_by_key("name").unwrap();
        prop_assert_eq!(stored.is_success(), second.is_success());
        match &second {
            Outcome::Ok(value) => prop_assert_eq!(states.value_of::<u16>("name"), Some(value)),
            Outcome::Fail(error) => prop_assert_eq!(stored.error(), error),
        }
    }

    #[test]
    fn reset_always_empties(outcomes in outcomes_strategy()) {
        let mut states = tracked(&outcomes);
        let _ = states.check_state();
        states.reset_state();
        prop_assert_eq!(states.size(), 0);
        prop_assert_eq!(states.states().count(), 0);
    }

    #[test]
    fn remove_takes_exactly_one_match(items in proptest::collection::vec(0_u8..4, 0..12), target in 0_u8..4) {
        let mut grades = WriteList::<Grades>::from_items(items.clone());
        let before = items.iter().filter(|item| **item == target).count();
        let removed = grades.remove(&target);
        let after = grades.iter().filter(|item| **item == target).count();
        prop_assert_eq!(removed, before > 0);
        prop_assert_eq!(after, before.saturating_sub(1));
        prop_assert_eq!(grades.len(), items.len() - usize::from(removed));
    }

    #[test]
    fn view_never_drifts_from_owner(seed in proptest::collection::vec(0_u8..6, 0..8), edits in proptest::collection::vec(edit_strategy(), 0..10)) {
        let mut grades = WriteList::<Grades>::from_items(seed);
        for edit in edits {
            ListAccess::Write(&mut grades).apply(edit).unwrap();
            prop_assert_eq!(grades.read_only().snapshot(), grades.snapshot());
            prop_assert_eq!(grades.read_only().len(), grades.len());
        }
    }
}

//! An entity exposes its grades only through the read-only list.

use keel_core::{ContractViolation, ListAccess, ListEdit, Mapper, PinPolicy};

use crate::common::{GradesList, UserMapper, UserRecord};

#[test]
fn entity_accessor_is_read_only() {
    let user = UserMapper::new(PinPolicy::default())
        .map(&UserRecord::valid())
        .into_value();

    let grades = user.grades();
    assert_eq!(grades.len(), 3);
    assert!(grades.exists(&8));
    assert!(!grades.exists(&9));

    let mut access = ListAccess::Read(grades);
    for edit in [
        ListEdit::Add(9),
        ListEdit::AddMany(vec![9, 10]),
        ListEdit::Remove(7),
        ListEdit::RemoveMany(vec![7, 8]),
    ] {
        let err = access.apply(edit).unwrap_err();
        assert!(matches!(err, ContractViolation::ReadOnlyViolation { .. }));
    }
    assert_eq!(user.grades().items(), &[7, 8, 6]);
}

#[test]
fn views_share_storage_with_the_owner() {
    let mut grades = GradesList::from_items([7, 8, 6]);
    let before = grades.read_only().snapshot();
    assert_eq!(before, grades.snapshot());

    grades.add_many([8, 9]);
    let view = grades.read_only();
    assert_eq!(view.snapshot(), vec![7, 8, 6, 8, 9]);
    assert_eq!(view.iter().filter(|grade| **grade == 8).count(), 2);

    // The earlier snapshot is an owned copy and does not follow later edits.
    assert_eq!(before, vec![7, 8, 6]);
}

#[test]
fn copies_of_a_view_read_the_same_items() {
    let grades = GradesList::from_items([1, 2, 3]);
    let view = grades.read_only();
    let copy = view;
    let summed: u32 = copy.into_iter().map(|grade| u32::from(*grade)).sum();
    assert_eq!(summed, 6);
    assert_eq!(view.items(), copy.items());
}

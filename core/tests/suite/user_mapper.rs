//! Mapping a persistence record into a domain entity through field states.

use keel_core::{DomainMapper, INVALID_PIN, Mapper, MapperFactory, PinPolicy};

use crate::common::{UserMapper, UserMapperFactory, UserRecord};

fn mapper() -> UserMapper {
    UserMapper::new(PinPolicy::default())
}

#[test]
fn valid_record_maps_to_user() {
    let user = mapper().map(&UserRecord::valid()).into_value();
    assert_eq!(user.name(), "John");
    assert_eq!(user.email(), "john@example.com");
    assert_eq!(user.age(), 36);
    assert!(user.pin().compare("ABC-1234"));
    assert_eq!(user.grades().items(), &[7, 8, 6]);
}

#[test]
fn first_invalid_field_decides_the_error() {
    let record = UserRecord {
        name: "   ".to_owned(),
        email: "not-an-email".to_owned(),
        ..UserRecord::valid()
    };
    let outcome = mapper().map(&record);
    assert_eq!(outcome.failure().as_deref(), Some("name must not be empty"));
}

#[test]
fn later_field_error_surfaces_when_earlier_fields_pass() {
    let record = UserRecord {
        pin: "12".to_owned(),
        grades: vec![7, 11],
        ..UserRecord::valid()
    };
    let outcome = mapper().map(&record);
    assert!(outcome.is_failure());
    assert_eq!(outcome.error(), INVALID_PIN);
}

#[test]
fn grade_errors_are_reported() {
    let record = UserRecord {
        grades: vec![7, 11],
        ..UserRecord::valid()
    };
    let outcome = mapper().map(&record);
    assert_eq!(outcome.error(), "grade 11 is above 10");
}

#[test]
fn pin_policy_flows_into_the_mapper() {
    let strict = UserMapper::new(PinPolicy::new(10, 12).unwrap());
    assert!(strict.map(&UserRecord::valid()).is_failure());
}

#[test]
fn factory_forwards_the_mapper_outcome() {
    let factory = UserMapperFactory {
        pin_policy: PinPolicy::default(),
    };
    let record = UserRecord {
        age: -4,
        ..UserRecord::valid()
    };
    let via_factory = MapperFactory::map(&factory, &record);
    let direct = mapper().map(&record);
    assert_eq!(via_factory.error(), direct.error());
    assert_eq!(via_factory.error(), "age -4 is out of range");

    assert!(MapperFactory::map(&factory, &UserRecord::valid()).is_success());
}

#[test]
fn persistence_round_trip_reads_through_the_read_only_view() {
    let mapper = mapper();
    let mut user = mapper.to_domain(&UserRecord::valid());
    assert!(user.record_grade(9).is_success());
    assert!(user.record_grade(12).is_failure());
    assert!(user.drop_grade(8));

    let record = mapper.to_persistence(&user);
    assert_eq!(record.grades, vec![7, 6, 9]);
    assert_eq!(
        record,
        UserRecord {
            grades: vec![7, 6, 9],
            ..UserRecord::valid()
        }
    );
}

#[test]
fn records_deserialize_from_json() {
    let record: UserRecord = serde_json::from_value(serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "age": 36,
        "pin": "52155",
        "grades": [9, 10]
    }))
    .unwrap();
    let user = mapper().map(&record).into_value();
    assert_eq!(user.grades().len(), 2);
}

//! Unit tests for the error collection.

use super::fixtures::{FIRST_NAME, IP, PERIOD};
use crate::record::domain::{FieldName, ValidationErrors};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn a_new_collection_is_empty() {
    let errors = ValidationErrors::new();

    assert!(errors.is_empty());
    assert_eq!(errors.count(), 0);
    assert!(!errors.is_on(&FIRST_NAME));
    assert_eq!(errors.on(&FIRST_NAME), None);
}

#[rstest]
fn messages_on_one_field_append_in_order() {
    let mut errors = ValidationErrors::new();
    errors.add(PERIOD, "cannot be nil");
    errors.add(PERIOD, "cannot be empty");

    assert_eq!(
        errors.on(&PERIOD),
        Some(
            &[
                "cannot be nil".to_owned(),
                "cannot be empty".to_owned(),
            ][..]
        ),
    );
    assert_eq!(errors.count(), 2);
}

#[rstest]
fn fields_enumerate_in_insertion_order() {
    let mut errors = ValidationErrors::new();
    errors.add(IP, "is not a valid INET address");
    errors.add(FIRST_NAME, "must be set if all of last_name are null");

    let fields: Vec<&FieldName> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![&IP, &FIRST_NAME]);
}

#[rstest]
fn full_messages_prefix_each_message_with_its_field() {
    let mut errors = ValidationErrors::new();
    errors.add(IP, "is not a valid INET address");
    errors.add(PERIOD, "cannot be empty");

    assert_eq!(
        errors.full_messages(),
        vec![
            "ip is not a valid INET address".to_owned(),
            "period cannot be empty".to_owned(),
        ],
    );
}

#[rstest]
fn clear_removes_every_failure() {
    let mut errors = ValidationErrors::new();
    errors.add(IP, "is not a valid INET address");

    errors.clear();

    assert!(errors.is_empty());
    assert!(!errors.is_on(&IP));
}

#[rstest]
fn the_collection_serialises_as_a_field_keyed_map() {
    let mut errors = ValidationErrors::new();
    errors.add(IP, "is not a valid INET address");
    errors.add(PERIOD, "cannot be nil");

    let serialised = serde_json::to_value(&errors).expect("collection should serialise");
    assert_eq!(
        serialised,
        json!({
            "ip": ["is not a valid INET address"],
            "period": ["cannot be nil"],
        }),
    );
}

//! Individual validation rule implementations.
//!
//! Each rule is a pure function over one record: it reads the named fields
//! through the [`FieldRead`] port and appends zero or more messages to the
//! record's error collection. Validation failures never surface as `Err`;
//! the fallible signatures only report unusable field lists.

use crate::record::domain::{FieldName, FieldValue, ValidationErrors};
use crate::record::error::FieldListError;
use crate::record::ports::{FieldRead, RuleResult};
use std::cmp::Ordering;
use std::net::IpAddr;

const NOT_AN_INET_ADDRESS: &str = "is not a valid INET address";

/// Ensures that at most one of `fields` is set.
///
/// When two or more fields are non-null, one error is attached to the first
/// set field (in input order), naming the remaining set fields.
///
/// # Errors
///
/// Returns [`FieldListError::Empty`] if `fields` is empty.
///
/// # Examples
///
/// ```
/// use parapet::record::adapters::memory::InMemoryRecord;
/// use parapet::record::domain::{FieldName, ValidationErrors};
/// use parapet::record::validation::rules::validate_mutually_exclusive;
///
/// const FIRST_NAME: FieldName = FieldName::from_static("first_name");
/// const LAST_NAME: FieldName = FieldName::from_static("last_name");
///
/// let record = InMemoryRecord::new()
///     .with_field(FIRST_NAME, "boom")
///     .with_field(LAST_NAME, "co");
/// let mut errors = ValidationErrors::new();
///
/// validate_mutually_exclusive(&record, &mut errors, &[FIRST_NAME, LAST_NAME])
///     .expect("field list is non-empty");
/// assert!(errors.is_on(&FieldName::from_static("first_name")));
/// ```
pub fn validate_mutually_exclusive<R>(
    record: &R,
    errors: &mut ValidationErrors,
    fields: &[FieldName],
) -> RuleResult
where
    R: FieldRead + ?Sized,
{
    if fields.is_empty() {
        return Err(FieldListError::Empty);
    }

    let set_fields: Vec<&FieldName> = fields
        .iter()
        .filter(|field| record.field(field).is_some())
        .collect();

    if let Some((first_set, others)) = set_fields.split_first()
        && !others.is_empty()
    {
        let names = join_names(others.iter().copied());
        errors.add(
            (*first_set).clone(),
            format!("is mutually exclusive with other set fields {names}"),
        );
    }

    Ok(())
}

/// Ensures that at least one of `fields` is set.
///
/// When every field is null, one error is attached to the first listed
/// field, naming the remaining listed fields.
///
/// # Errors
///
/// Returns [`FieldListError::Empty`] if `fields` is empty.
pub fn validate_at_least_one_of<R>(
    record: &R,
    errors: &mut ValidationErrors,
    fields: &[FieldName],
) -> RuleResult
where
    R: FieldRead + ?Sized,
{
    let Some((first, rest)) = fields.split_first() else {
        return Err(FieldListError::Empty);
    };

    if fields.iter().any(|field| record.field(field).is_some()) {
        return Ok(());
    }

    let names = join_names(rest.iter());
    errors.add(first.clone(), format!("must be set if all of {names} are null"));
    Ok(())
}

/// Ensures that one and only one of `fields` is set.
///
/// Composition of [`validate_at_least_one_of`] then
/// [`validate_mutually_exclusive`], both applied unconditionally. The two
/// conditions are disjoint, so at most one message is recorded per call.
///
/// # Errors
///
/// Returns [`FieldListError::Empty`] if `fields` is empty.
pub fn validate_exactly_one_of<R>(
    record: &R,
    errors: &mut ValidationErrors,
    fields: &[FieldName],
) -> RuleResult
where
    R: FieldRead + ?Sized,
{
    validate_at_least_one_of(record, errors, fields)?;
    validate_mutually_exclusive(record, errors, fields)
}

/// Ensures the value in `field` is an INET address or can be parsed as one.
///
/// An already-parsed address passes without further work. Textual values
/// are parsed against IPv4/IPv6 grammar, with a parse failure converted to
/// a validation message. A null field reaches the parse step like any other
/// unparseable value and records the same message; callers wanting to
/// permit null must validate presence separately.
pub fn validate_ip_address<R>(record: &R, errors: &mut ValidationErrors, field: &FieldName)
where
    R: FieldRead + ?Sized,
{
    match record.field(field) {
        Some(FieldValue::Inet(inet)) => {
            if inet.resolve().is_err() {
                errors.add(field.clone(), NOT_AN_INET_ADDRESS);
            }
        }
        Some(FieldValue::Text(text)) => {
            if text.parse::<IpAddr>().is_err() {
                errors.add(field.clone(), NOT_AN_INET_ADDRESS);
            }
        }
        _ => errors.add(field.clone(), NOT_AN_INET_ADDRESS),
    }
}

/// Ensures the value in `field` is a non-null, non-empty, forward range.
///
/// Exactly one message is recorded per failing call: `"cannot be nil"` for
/// a null field, `"cannot be empty"` when the bounds coincide, and
/// `"lower bound must be less than upper bound"` when they are inverted.
pub fn validate_range<R>(record: &R, errors: &mut ValidationErrors, field: &FieldName)
where
    R: FieldRead + ?Sized,
{
    let Some(range) = record.field(field).and_then(FieldValue::as_range) else {
        errors.add(field.clone(), "cannot be nil");
        return;
    };

    match range.bounds_ordering() {
        Ordering::Greater => {}
        Ordering::Equal => errors.add(field.clone(), "cannot be empty"),
        Ordering::Less => errors.add(
            field.clone(),
            "lower bound must be less than upper bound",
        ),
    }
}

fn join_names<'a>(fields: impl Iterator<Item = &'a FieldName>) -> String {
    fields.map(FieldName::as_str).collect::<Vec<_>>().join(", ")
}


// Note: The main coverage for these rules lives in
// src/record/tests/rules_tests.rs with rstest fixtures; the module above
// only pins the field-list preconditions.

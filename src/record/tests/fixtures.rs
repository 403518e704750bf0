//! Shared fixtures and helpers for record validation tests.

use crate::record::adapters::memory::InMemoryRecord;
use crate::record::domain::FieldName;
use crate::record::validation::service::DefaultRecordValidator;
use mockable::DefaultClock;
use rstest::fixture;

/// Column names of the relational row the tests validate against.
pub const FIRST_NAME: FieldName = FieldName::from_static("first_name");
pub const MIDDLE_NAME: FieldName = FieldName::from_static("middle_name");
pub const LAST_NAME: FieldName = FieldName::from_static("last_name");
pub const IP: FieldName = FieldName::from_static("ip");
pub const PERIOD: FieldName = FieldName::from_static("period");

pub const VALID_IP: &str = "192.168.16.72";
pub const INVALID_IP: &str = "284.111.0.1";

#[fixture]
pub fn clock() -> DefaultClock {
    DefaultClock
}

#[fixture]
pub fn blank_record() -> InMemoryRecord {
    InMemoryRecord::new()
}

/// Validator mirroring a typical host configuration: a name must come from
/// exactly one column, the peer address must be INET, and the billing
/// period must be a forward range.
#[fixture]
pub fn host_validator() -> DefaultRecordValidator {
    DefaultRecordValidator::new()
        .exactly_one_of([FIRST_NAME, LAST_NAME])
        .ip_address(IP)
        .range(PERIOD)
}

/// Returns the first message recorded against `field`, if any.
pub fn first_message_on<'a>(
    errors: &'a crate::record::domain::ValidationErrors,
    field: &FieldName,
) -> Option<&'a str> {
    errors
        .on(field)
        .and_then(<[String]>::first)
        .map(String::as_str)
}

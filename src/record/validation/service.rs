//! Validation service implementation.
//!
//! Provides the default implementation of the `RecordValidator` port,
//! combining individual validation rules into a declared check plan.

use crate::record::domain::{FieldName, ValidationErrors};
use crate::record::ports::{FieldRead, RecordValidator, RuleResult};
use crate::record::validation::rules;
use tracing::{debug, trace};

/// One configured application of a rule to named fields.
#[derive(Debug, Clone)]
enum Check {
    MutuallyExclusive(Vec<FieldName>),
    AtLeastOneOf(Vec<FieldName>),
    ExactlyOneOf(Vec<FieldName>),
    IpAddress(FieldName),
    Range(FieldName),
}

/// Default implementation of the record validator.
///
/// Holds an ordered plan of checks declared with the builder-style methods
/// and applies them to a record in declaration order. One check's
/// validation failures never prevent later checks from running; only a
/// misconfigured field list aborts the pass.
///
/// # Examples
///
/// ```
/// use parapet::record::adapters::memory::InMemoryRecord;
/// use parapet::record::domain::{FieldName, ValidationErrors};
/// use parapet::record::ports::RecordValidator;
/// use parapet::record::validation::service::DefaultRecordValidator;
///
/// const FIRST_NAME: FieldName = FieldName::from_static("first_name");
/// const LAST_NAME: FieldName = FieldName::from_static("last_name");
///
/// let validator = DefaultRecordValidator::new()
///     .exactly_one_of([FIRST_NAME, LAST_NAME]);
///
/// let record = InMemoryRecord::new().with_field(FIRST_NAME, "boom");
/// let mut errors = ValidationErrors::new();
/// validator.validate(&record, &mut errors).expect("plan is well-formed");
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultRecordValidator {
    checks: Vec<Check>,
}

impl DefaultRecordValidator {
    /// Creates a validator with an empty check plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mutual-exclusivity check over `fields`.
    #[must_use]
    pub fn mutually_exclusive(mut self, fields: impl IntoIterator<Item = FieldName>) -> Self {
        self.checks
            .push(Check::MutuallyExclusive(fields.into_iter().collect()));
        self
    }

    /// Adds an at-least-one-of check over `fields`.
    #[must_use]
    pub fn at_least_one_of(mut self, fields: impl IntoIterator<Item = FieldName>) -> Self {
        self.checks
            .push(Check::AtLeastOneOf(fields.into_iter().collect()));
        self
    }

    /// Adds an exactly-one-of check over `fields`.
    #[must_use]
    pub fn exactly_one_of(mut self, fields: impl IntoIterator<Item = FieldName>) -> Self {
        self.checks
            .push(Check::ExactlyOneOf(fields.into_iter().collect()));
        self
    }

    /// Adds an INET address check on `field`.
    #[must_use]
    pub fn ip_address(mut self, field: FieldName) -> Self {
        self.checks.push(Check::IpAddress(field));
        self
    }

    /// Adds a range-ordering check on `field`.
    #[must_use]
    pub fn range(mut self, field: FieldName) -> Self {
        self.checks.push(Check::Range(field));
        self
    }

    /// Returns the number of checks in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if the plan holds no checks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl RecordValidator for DefaultRecordValidator {
    fn validate(&self, record: &dyn FieldRead, errors: &mut ValidationErrors) -> RuleResult {
        for check in &self.checks {
            trace!(?check, "applying record check");
            match check {
                Check::MutuallyExclusive(fields) => {
                    rules::validate_mutually_exclusive(record, errors, fields)?;
                }
                Check::AtLeastOneOf(fields) => {
                    rules::validate_at_least_one_of(record, errors, fields)?;
                }
                Check::ExactlyOneOf(fields) => {
                    rules::validate_exactly_one_of(record, errors, fields)?;
                }
                Check::IpAddress(field) => rules::validate_ip_address(record, errors, field),
                Check::Range(field) => rules::validate_range(record, errors, field),
            }
        }

        if !errors.is_empty() {
            debug!(failures = errors.count(), "record validation recorded failures");
        }

        Ok(())
    }
}

// Note: Unit tests for DefaultRecordValidator are located in
// src/record/tests/service_tests.rs with rstest fixtures.

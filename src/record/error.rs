//! Error types for rule invocation.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants that
//! can be inspected by callers. Validation failures themselves are never
//! errors in this sense; they are recorded in
//! [`ValidationErrors`](super::domain::ValidationErrors).

use thiserror::Error;

/// Errors raised when a rule is invoked with an unusable field list.
///
/// These are precondition violations at the call site, not validation
/// failures: a rule asked to arbitrate between zero fields has no field to
/// attach a message to, so the mistake is surfaced to the caller instead of
/// being folded into the record's error collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldListError {
    /// The rule was invoked with an empty field list.
    #[error("rule requires at least one field")]
    Empty,
}

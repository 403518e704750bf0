//! Validator port for record validation.
//!
//! Defines the abstract interface for applying a configured set of checks
//! to one record.

use super::record::FieldRead;
use crate::record::domain::ValidationErrors;
use crate::record::error::FieldListError;

/// Result type for rule invocations.
///
/// `Ok(())` means the rule ran to completion; whether it recorded
/// validation failures is visible only through the error collection.
pub type RuleResult = Result<(), FieldListError>;

/// Port for record validation operations.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Apply every configured check even when earlier checks record failures
///   (not fail-fast)
/// - Report validation failures exclusively through the error collection
/// - Be stateless and thread-safe
pub trait RecordValidator: Send + Sync {
    /// Applies every configured check to `record`, appending failures to
    /// `errors`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldListError`] when a configured check carries an
    /// unusable field list. Validation failures are never returned here.
    fn validate(&self, record: &dyn FieldRead, errors: &mut ValidationErrors) -> RuleResult;
}

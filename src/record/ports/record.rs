//! Record port for field access.
//!
//! Defines the abstract interface through which rules read the record under
//! validation.

use crate::record::domain::{FieldName, FieldValue};

/// Port for reading record fields by name.
///
/// Implementations resolve a field name to its current value. A `None`
/// return means the field is null or unknown to the record; the rules do
/// not distinguish the two cases.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Be cheap to call repeatedly (rules may read the same field more than
///   once during a validation pass)
/// - Never mutate the record as a consequence of a read
pub trait FieldRead {
    /// Returns the current value of `field`, or `None` when it is null.
    fn field(&self, field: &FieldName) -> Option<&FieldValue>;
}

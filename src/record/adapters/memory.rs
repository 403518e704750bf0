//! In-memory record adapter.
//!
//! Provides the simplest conforming implementation of the
//! [`FieldRead`] port, used by the test suite and as a reference for host
//! integrations.

use crate::record::domain::{FieldName, FieldValue};
use crate::record::ports::FieldRead;
use indexmap::IndexMap;

/// A record held entirely in memory.
///
/// Fields keep insertion order. A field that has never been set, or that
/// has been [`unset`](Self::unset), reads as null.
///
/// # Examples
///
/// ```
/// use parapet::record::adapters::memory::InMemoryRecord;
/// use parapet::record::domain::FieldName;
/// use parapet::record::ports::FieldRead;
///
/// const FIRST_NAME: FieldName = FieldName::from_static("first_name");
/// const LAST_NAME: FieldName = FieldName::from_static("last_name");
///
/// let record = InMemoryRecord::new().with_field(FIRST_NAME, "boom");
/// assert!(record.field(&FIRST_NAME).is_some());
/// assert!(record.field(&LAST_NAME).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecord {
    fields: IndexMap<FieldName, FieldValue>,
}

impl InMemoryRecord {
    /// Creates a record with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record with `field` set to `value`.
    #[must_use]
    pub fn with_field(mut self, field: FieldName, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets `field` to `value`, replacing any previous value.
    pub fn set(&mut self, field: FieldName, value: impl Into<FieldValue>) {
        self.fields.insert(field, value.into());
    }

    /// Clears `field`, returning its previous value if it was set.
    pub fn unset(&mut self, field: &FieldName) -> Option<FieldValue> {
        self.fields.shift_remove(field)
    }

    /// Returns the number of fields currently set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldRead for InMemoryRecord {
    fn field(&self, field: &FieldName) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}

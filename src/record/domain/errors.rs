//! The per-record error collection.

use super::FieldName;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Accumulator mapping field names to ordered lists of validation messages.
///
/// The collection is owned by the host record being validated; rules only
/// ever append to it. Both the fields and the messages within a field keep
/// insertion order, so the sequence of reported failures mirrors the
/// sequence of rule applications.
///
/// # Examples
///
/// ```
/// use parapet::record::domain::{FieldName, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// errors.add(FieldName::from_static("ip"), "is not a valid INET address");
///
/// assert!(!errors.is_empty());
/// assert_eq!(errors.count(), 1);
/// assert_eq!(
///     errors.full_messages(),
///     vec!["ip is not a valid INET address".to_owned()],
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: IndexMap<FieldName, Vec<String>>,
}

impl ValidationErrors {
    /// Creates an empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the list of failures recorded against `field`.
    pub fn add(&mut self, field: FieldName, message: impl Into<String>) {
        self.entries.entry(field).or_default().push(message.into());
    }

    /// Returns the messages recorded against `field`, if any.
    #[must_use]
    pub fn on(&self, field: &FieldName) -> Option<&[String]> {
        self.entries.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if at least one message is recorded against `field`.
    #[must_use]
    pub fn is_on(&self, field: &FieldName) -> bool {
        self.entries.contains_key(field)
    }

    /// Returns `true` if no failures have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the total number of recorded messages across all fields.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterates over fields and their messages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &[String])> {
        self.entries
            .iter()
            .map(|(field, messages)| (field, messages.as_slice()))
    }

    /// Renders every failure as a `"field message"` string, in order.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{field} {message}"))
            })
            .collect()
    }

    /// Removes every recorded failure.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

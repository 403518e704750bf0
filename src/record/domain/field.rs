//! Field identifiers and the tagged union of field value types.
//!
//! These types give validation rules a typed view of one relational row:
//! a field is addressed by [`FieldName`] and holds a [`FieldValue`] variant,
//! with SQL NULL represented by absence rather than a sentinel variant.

use super::{InetValue, RangeValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::net::IpAddr;

/// Identifier for a single field of a record.
///
/// Field names are cheap to clone and usually name schema columns, so the
/// common case is a `'static` string. Input order of field-name slices is
/// significant to the rules: tie-breaks and message composition preserve it.
///
/// # Examples
///
/// ```
/// use parapet::record::domain::FieldName;
///
/// const FIRST_NAME: FieldName = FieldName::from_static("first_name");
/// assert_eq!(FIRST_NAME.as_str(), "first_name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(Cow<'static, str>);

impl FieldName {
    /// Creates a field name from a static string, usable in `const` contexts.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a field name from any owned or static string.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Returns the field name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for FieldName {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// The value held by one record field.
///
/// A tagged union over the variant types the rules know how to inspect.
/// Nullness is not a variant: a null field is simply absent from the record,
/// and [`FieldRead::field`](crate::record::ports::FieldRead::field) returns
/// `None` for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    /// Textual content.
    Text(String),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A point in time.
    Timestamp(DateTime<Utc>),
    /// An INET address, parsed or textual.
    Inet(InetValue),
    /// An ordered interval.
    Range(RangeValue),
}

impl FieldValue {
    /// Returns the range held by this value, if it is one.
    #[must_use]
    pub const fn as_range(&self) -> Option<&RangeValue> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    /// Returns the INET value held by this value, if it is one.
    #[must_use]
    pub const fn as_inet(&self) -> Option<&InetValue> {
        match self {
            Self::Inet(inet) => Some(inet),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self::Timestamp(timestamp)
    }
}

impl From<IpAddr> for FieldValue {
    fn from(address: IpAddr) -> Self {
        Self::Inet(InetValue::Address(address))
    }
}

impl From<InetValue> for FieldValue {
    fn from(inet: InetValue) -> Self {
        Self::Inet(inet)
    }
}

impl From<RangeValue> for FieldValue {
    fn from(range: RangeValue) -> Self {
        Self::Range(range)
    }
}

//! Record field values, the error collection, and the validation rules.
//!
//! This module implements field-level validation for relational records:
//! a host model layer hands each rule a record-like object and one or more
//! field names, and the rule's only observable effect is appending messages
//! to the record's error collection.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types ([`domain::FieldValue`],
//!   [`domain::InetValue`], [`domain::RangeValue`],
//!   [`domain::ValidationErrors`])
//! - **Ports**: Abstract trait interfaces ([`ports::FieldRead`],
//!   [`ports::RecordValidator`])
//! - **Adapters**: Concrete implementations
//!   ([`adapters::memory::InMemoryRecord`])
//! - **Validation**: The rule functions and the composite check plan
//!
//! # Example
//!
//! ```
//! use parapet::record::adapters::memory::InMemoryRecord;
//! use parapet::record::domain::{FieldName, ValidationErrors};
//! use parapet::record::validation::rules::validate_ip_address;
//!
//! const IP: FieldName = FieldName::from_static("ip");
//!
//! let record = InMemoryRecord::new().with_field(IP, "284.111.0.1");
//! let mut errors = ValidationErrors::new();
//!
//! validate_ip_address(&record, &mut errors, &IP);
//! assert_eq!(
//!     errors.on(&IP).and_then(<[String]>::first).map(String::as_str),
//!     Some("is not a valid INET address"),
//! );
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

#[cfg(test)]
mod tests;

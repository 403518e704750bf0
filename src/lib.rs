//! Parapet: field-level validation rules for relational records.
//!
//! This crate provides a small set of declarative validation rules applied
//! to record-like objects during a host model layer's validation phase:
//! mutual exclusivity, "at least one of", "exactly one of", INET address
//! format, and range ordering.
//!
//! # Architecture
//!
//! Parapet follows hexagonal architecture principles:
//!
//! - **Domain**: Pure value types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the host collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory record)
//!
//! # Modules
//!
//! - [`record`]: Record field values, the error collection, and the
//!   validation rules

pub mod record;

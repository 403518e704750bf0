//! Record validation implementation.
//!
//! This module provides the validation rules applied to record fields and
//! the composite validator service that runs a declared check plan.

pub mod rules;
pub mod service;

pub use rules::{
    validate_at_least_one_of, validate_exactly_one_of, validate_ip_address,
    validate_mutually_exclusive, validate_range,
};
pub use service::DefaultRecordValidator;

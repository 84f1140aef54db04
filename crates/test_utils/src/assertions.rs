//! Custom Test Assertions
//!
//! Assertion helpers for registry results that print the operation and the
//! underlying cause on failure.

use std::error::Error as _;

use domain_customer::{ErrorKind, RegistryError};

/// Asserts that a registry call failed with the given kind and returns the error
///
/// # Panics
///
/// Panics if the result is `Ok` or the error is of another kind
pub fn assert_registry_error<T: std::fmt::Debug>(
    result: Result<T, RegistryError>,
    expected: ErrorKind,
) -> RegistryError {
    match result {
        Ok(value) => panic!("Expected {} error, got Ok({:?})", expected, value),
        Err(err) => {
            assert_eq!(
                err.kind(),
                expected,
                "Error kind mismatch for {}: {} (cause: {:?})",
                err.operation(),
                err,
                err.source().map(|s| s.to_string())
            );
            err
        }
    }
}

/// Asserts that a validation failure names the field with the given rule
///
/// # Panics
///
/// Panics if the error is not a validation failure or the field is absent
pub fn assert_field_violation(err: &RegistryError, field: &str, rule: &str) {
    let errors = err
        .validation_errors()
        .unwrap_or_else(|| panic!("Expected validation failure, got {}", err));
    let violation = errors
        .field(field)
        .unwrap_or_else(|| panic!("No violation for {}; got {}", field, errors));
    assert_eq!(
        violation.rule, rule,
        "Field {} broke {} instead of {}",
        field, violation.rule, rule
    );
}

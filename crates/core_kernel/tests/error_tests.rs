//! Tests for core_kernel error types

use core_kernel::error::CoreError;
use core_kernel::{CountryCode, CustomerId, PortError};

#[test]
fn test_core_error_invalid_identifier() {
    let error = "twelve".parse::<CustomerId>().unwrap_err();

    match error {
        CoreError::InvalidIdentifier(msg) => assert!(msg.contains("twelve")),
        _ => panic!("Expected InvalidIdentifier error"),
    }
}

#[test]
fn test_core_error_unknown_country() {
    let error = CountryCode::parse("ZZZ").unwrap_err();

    match error {
        CoreError::UnknownCountry(code) => assert_eq!(code, "ZZZ"),
        _ => panic!("Expected UnknownCountry error"),
    }
}

#[test]
fn test_core_error_display() {
    let error = CoreError::unknown_country("EUR");
    assert_eq!(format!("{}", error), "Unknown country code: EUR");
}

#[test]
fn test_port_error_source_is_preserved() {
    use std::error::Error;

    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let error = PortError::Internal {
        message: "write failed".to_string(),
        source: Some(Box::new(io)),
    };

    assert!(error.source().is_some());
    assert!(!error.is_transient());
}

//! Core Kernel - Foundational types for the customer registry
//!
//! This crate provides the building blocks shared by every other crate:
//! - Strongly-typed identifiers
//! - Port contracts (errors, health checks, operation metadata)
//! - The ISO 3166-1 country-code table

pub mod country;
pub mod error;
pub mod identifiers;
pub mod ports;

pub use country::CountryCode;
pub use error::CoreError;
pub use identifiers::CustomerId;
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, OperationMetadata, PortError,
};

//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! customer registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built customers and sub-records
//! - `builders`: Builder for customers with selected fields overridden
//! - `assertions`: Assertion helpers for registry results
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;

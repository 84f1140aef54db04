//! Customer domain errors
//!
//! Two layers live here. [`CustomerError`] covers failures of the aggregate
//! itself. [`RegistryError`] is what the registry service returns: every
//! failure is classified into exactly one [`ErrorKind`] and carries the name
//! of the operation that produced it, with the underlying cause available
//! through [`std::error::Error::source`].

use std::fmt;

use thiserror::Error;

use core_kernel::PortError;

use crate::customer::CustomerType;
use crate::validation::ValidationErrors;

/// Errors raised by the customer aggregate
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// An update supplied info of the other kind
    #[error("customer type mismatch: customer is {current}, update is {requested}")]
    TypeMismatch {
        current: CustomerType,
        requested: CustomerType,
    },

    /// The input could not form a customer
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown lifecycle state code
    #[error("invalid customer state: {0}")]
    InvalidState(i32),
}

impl CustomerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CustomerError::InvalidInput(message.into())
    }
}

/// Caller-facing classification of a registry failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No customer with the id
    NotFound,
    /// The input broke one or more field rules
    ValidationFailed,
    /// A known business-rule conflict
    ExpectedConflict,
    /// Anything else; should be logged, not shown
    Unexpected,
}

impl ErrorKind {
    /// Stable machine-readable code
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::ValidationFailed => "VALIDATION_FAILED",
            ErrorKind::ExpectedConflict => "EXPECTED_CONFLICT",
            ErrorKind::Unexpected => "UNEXPECTED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every registry service operation
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{op}: customer not found")]
    NotFound {
        op: &'static str,
        #[source]
        source: PortError,
    },

    #[error("{op}: validation failed")]
    ValidationFailed {
        op: &'static str,
        #[source]
        source: ValidationErrors,
    },

    #[error("{op}: {source}")]
    ExpectedConflict {
        op: &'static str,
        #[source]
        source: CustomerError,
    },

    #[error("{op}: unexpected failure")]
    Unexpected {
        op: &'static str,
        #[source]
        source: PortError,
    },
}

impl RegistryError {
    pub fn not_found(op: &'static str, source: PortError) -> Self {
        RegistryError::NotFound { op, source }
    }

    pub fn validation_failed(op: &'static str, source: ValidationErrors) -> Self {
        RegistryError::ValidationFailed { op, source }
    }

    pub fn expected(op: &'static str, source: CustomerError) -> Self {
        RegistryError::ExpectedConflict { op, source }
    }

    pub fn unexpected(op: &'static str, source: PortError) -> Self {
        RegistryError::Unexpected { op, source }
    }

    /// The category of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::NotFound { .. } => ErrorKind::NotFound,
            RegistryError::ValidationFailed { .. } => ErrorKind::ValidationFailed,
            RegistryError::ExpectedConflict { .. } => ErrorKind::ExpectedConflict,
            RegistryError::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Name of the operation that failed, e.g. `registry.Service.Get`
    pub fn operation(&self) -> &'static str {
        match self {
            RegistryError::NotFound { op, .. }
            | RegistryError::ValidationFailed { op, .. }
            | RegistryError::ExpectedConflict { op, .. }
            | RegistryError::Unexpected { op, .. } => op,
        }
    }

    /// Field violations, when the failure is a validation one
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RegistryError::ValidationFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_validation_failed(&self) -> bool {
        self.kind() == ErrorKind::ValidationFailed
    }

    pub fn is_expected(&self) -> bool {
        self.kind() == ErrorKind::ExpectedConflict
    }

    pub fn is_unexpected(&self) -> bool {
        self.kind() == ErrorKind::Unexpected
    }
}

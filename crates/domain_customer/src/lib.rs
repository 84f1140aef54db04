//! Customer Master-Data Domain
//!
//! This crate holds the customer registry: who the customers are, what makes
//! their data valid, and the service that changes them.
//!
//! # Customer Model
//!
//! - **Private**: a natural person, described by [`PersonInfo`]
//! - **Organization**: a legal entity, described by [`OrganizationInfo`]
//!
//! A customer keeps its kind for life. Each record also owns zero or more
//! addresses, contacts, and tax records, and moves through the
//! Prospect, Active, and Passive lifecycle states.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::CustomerId;
//! use domain_customer::{Customer, CustomerError, OrganizationInfo, PersonInfo, Validator};
//!
//! let person = PersonInfo {
//!     given_name: "Jane".to_string(),
//!     family_name: "Smith".to_string(),
//!     ssn: "123-45-6789".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(1982, 8, 20).unwrap(),
//!     citizenship: "US".to_string(),
//! };
//! assert!(Validator::new().validate(&person).is_ok());
//!
//! let mut customer = Customer::new(CustomerId::new(7), person.into());
//!
//! // An organization cannot replace a person
//! let company = OrganizationInfo {
//!     name: "Smith & Sons".to_string(),
//!     form: "LLC".to_string(),
//!     legal_id: "12-3456789".to_string(),
//!     registration_date: NaiveDate::from_ymd_opt(2001, 3, 1).unwrap(),
//!     registration_country: "US".to_string(),
//! };
//! assert!(matches!(
//!     customer.update_info(company.into()),
//!     Err(CustomerError::TypeMismatch { .. })
//! ));
//! ```

pub mod address;
pub mod contact;
pub mod customer;
pub mod error;
pub mod ports;
mod rules;
pub mod services;
pub mod tax;
pub mod validation;

pub use address::{Address, AddressType};
pub use contact::{ContactChannel, ContactInfo};
pub use customer::{
    Customer, CustomerDetails, CustomerInfo, CustomerState, CustomerType, OrganizationInfo,
    PersonInfo,
};
pub use error::{CustomerError, ErrorKind, RegistryError};
pub use ports::{CustomerRepository, CustomerRepositoryExt, CUSTOMER_ENTITY};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::{MockCustomerRepository, MockOperation};
pub use services::RegistryService;
pub use tax::TaxInfo;
pub use validation::{
    FieldBinding, FieldError, FieldValue, Predicate, Rule, RuleContext, Validate, ValidationErrors,
    Validator,
};

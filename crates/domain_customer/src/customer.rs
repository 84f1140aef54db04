//! Customer aggregate and its information variants
//!
//! A [`Customer`] is the aggregate root of the registry. It owns exactly one
//! [`CustomerInfo`], which is either a [`PersonInfo`] (a private customer) or
//! an [`OrganizationInfo`], plus optional address, contact, and tax
//! sub-records.
//!
//! # Invariants
//!
//! - The kind of `info` never changes for a given customer id. An update that
//!   supplies the other kind is rejected and leaves the customer untouched.
//! - A new customer always starts in [`CustomerState::Prospect`].
//! - At most one contact per channel is flagged as primary.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::CustomerId;
//! use domain_customer::customer::{Customer, CustomerState, PersonInfo};
//!
//! let person = PersonInfo {
//!     given_name: "Aino".to_string(),
//!     family_name: "Virtanen".to_string(),
//!     ssn: "010170-123A".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
//!     citizenship: "FI".to_string(),
//! };
//!
//! let customer = Customer::new(CustomerId::new(1), person.into());
//! assert_eq!(customer.state(), CustomerState::Prospect);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::CustomerId;

use crate::address::Address;
use crate::contact::{ContactChannel, ContactInfo};
use crate::error::CustomerError;
use crate::tax::TaxInfo;

/// Discriminant of [`CustomerInfo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    /// A natural person
    Private = 1,
    /// A legal entity
    Organization = 2,
}

impl CustomerType {
    /// Wire code of the type
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerType::Private => write!(f, "private"),
            CustomerType::Organization => write!(f, "organization"),
        }
    }
}

/// Lifecycle state of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerState {
    /// Registered but not yet doing business
    #[default]
    Prospect = 1,
    /// Currently doing business
    Active = 2,
    /// No longer doing business, kept for reference
    Passive = 3,
}

impl CustomerState {
    /// Lowest valid wire code
    pub const MIN_CODE: i32 = 1;
    /// Highest valid wire code
    pub const MAX_CODE: i32 = 3;

    /// Wire code of the state
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CustomerState {
    type Error = CustomerError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CustomerState::Prospect),
            2 => Ok(CustomerState::Active),
            3 => Ok(CustomerState::Passive),
            other => Err(CustomerError::InvalidState(other)),
        }
    }
}

impl fmt::Display for CustomerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerState::Prospect => write!(f, "prospect"),
            CustomerState::Active => write!(f, "active"),
            CustomerState::Passive => write!(f, "passive"),
        }
    }
}

/// Personal details of a private customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    /// Given name (unicode letters, optional inner hyphen)
    pub given_name: String,
    /// Family name (unicode letters, optional inner hyphen)
    pub family_name: String,
    /// Social security number
    pub ssn: String,
    /// Date of birth, must lie in the past
    pub date_of_birth: NaiveDate,
    /// Citizenship (ISO 3166-1 alpha-2)
    pub citizenship: String,
}

impl PersonInfo {
    /// Returns "Given Family"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

/// Registration details of an organization customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    /// Registered name (unicode letters, digits, space, `-`, `&`)
    pub name: String,
    /// Legal form, e.g. "Ltd" or "Oy"
    pub form: String,
    /// Registry identifier of the organization
    pub legal_id: String,
    /// Date of registration, must lie in the past
    pub registration_date: NaiveDate,
    /// Country of registration (ISO 3166-1 alpha-2)
    pub registration_country: String,
}

/// Information about a customer: exactly one of the two kinds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomerInfo {
    Person(PersonInfo),
    Organization(OrganizationInfo),
}

impl CustomerInfo {
    /// Builds the info from optional parts, as decoded from a request
    ///
    /// # Errors
    ///
    /// `CustomerError::InvalidInput` unless exactly one part is present.
    pub fn from_parts(
        person: Option<PersonInfo>,
        organization: Option<OrganizationInfo>,
    ) -> Result<Self, CustomerError> {
        match (person, organization) {
            (Some(person), None) => Ok(CustomerInfo::Person(person)),
            (None, Some(organization)) => Ok(CustomerInfo::Organization(organization)),
            (None, None) => Err(CustomerError::invalid_input("customer info is missing")),
            (Some(_), Some(_)) => Err(CustomerError::invalid_input(
                "customer info must be either a person or an organization, not both",
            )),
        }
    }

    /// The discriminant of this info
    pub fn customer_type(&self) -> CustomerType {
        match self {
            CustomerInfo::Person(_) => CustomerType::Private,
            CustomerInfo::Organization(_) => CustomerType::Organization,
        }
    }

    pub fn as_person(&self) -> Option<&PersonInfo> {
        match self {
            CustomerInfo::Person(person) => Some(person),
            CustomerInfo::Organization(_) => None,
        }
    }

    pub fn as_organization(&self) -> Option<&OrganizationInfo> {
        match self {
            CustomerInfo::Organization(organization) => Some(organization),
            CustomerInfo::Person(_) => None,
        }
    }

    /// Human-readable name for listings
    pub fn display_name(&self) -> String {
        match self {
            CustomerInfo::Person(person) => person.full_name(),
            CustomerInfo::Organization(organization) => {
                format!("{} {}", organization.name, organization.form)
            }
        }
    }
}

impl From<PersonInfo> for CustomerInfo {
    fn from(person: PersonInfo) -> Self {
        CustomerInfo::Person(person)
    }
}

impl From<OrganizationInfo> for CustomerInfo {
    fn from(organization: OrganizationInfo) -> Self {
        CustomerInfo::Organization(organization)
    }
}

/// The sub-record collections owned by a customer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    #[serde(default)]
    pub tax_info: Vec<TaxInfo>,
}

/// The customer aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    state: CustomerState,
    info: CustomerInfo,
    #[serde(default)]
    addresses: Vec<Address>,
    #[serde(default)]
    contacts: Vec<ContactInfo>,
    #[serde(default)]
    tax_info: Vec<TaxInfo>,
}

impl Customer {
    /// Creates a prospect customer with the given id
    pub fn new(id: CustomerId, info: CustomerInfo) -> Self {
        Self {
            id,
            state: CustomerState::Prospect,
            info,
            addresses: Vec::new(),
            contacts: Vec::new(),
            tax_info: Vec::new(),
        }
    }

    /// Creates a prospect customer with a pseudo-random id
    ///
    /// Ids are not guaranteed unique; the repository rejects duplicates.
    pub fn with_random_id(info: CustomerInfo) -> Self {
        Self::new(CustomerId::random(), info)
    }

    /// Sets the initial state, for seeding and rehydration
    pub fn with_state(mut self, state: CustomerState) -> Self {
        self.state = state;
        self
    }

    /// Sets the initial sub-records, for seeding and rehydration
    pub fn with_details(mut self, details: CustomerDetails) -> Self {
        self.replace_details(details);
        self
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn state(&self) -> CustomerState {
        self.state
    }

    pub fn info(&self) -> &CustomerInfo {
        &self.info
    }

    pub fn customer_type(&self) -> CustomerType {
        self.info.customer_type()
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn contacts(&self) -> &[ContactInfo] {
        &self.contacts
    }

    pub fn tax_info(&self) -> &[TaxInfo] {
        &self.tax_info
    }

    /// A copy of the owned sub-records
    pub fn details(&self) -> CustomerDetails {
        CustomerDetails {
            addresses: self.addresses.clone(),
            contacts: self.contacts.clone(),
            tax_info: self.tax_info.clone(),
        }
    }

    pub fn display_name(&self) -> String {
        self.info.display_name()
    }

    /// Replaces the info if it is of the same kind
    ///
    /// # Errors
    ///
    /// `CustomerError::TypeMismatch` if `info` is of the other kind. The
    /// customer is left unmodified in that case.
    pub fn update_info(&mut self, info: CustomerInfo) -> Result<(), CustomerError> {
        let current = self.customer_type();
        let requested = info.customer_type();
        if current != requested {
            return Err(CustomerError::TypeMismatch { current, requested });
        }

        self.info = info;
        Ok(())
    }

    pub fn set_state(&mut self, state: CustomerState) {
        self.state = state;
    }

    pub fn add_address(&mut self, address: Address) {
        self.addresses.push(address);
    }

    /// Adds a contact; a primary contact demotes earlier primaries of its channel
    pub fn add_contact(&mut self, contact: ContactInfo) {
        if contact.is_primary {
            for existing in self
                .contacts
                .iter_mut()
                .filter(|c| c.channel == contact.channel)
            {
                existing.is_primary = false;
            }
        }
        self.contacts.push(contact);
    }

    pub fn add_tax_info(&mut self, tax_info: TaxInfo) {
        self.tax_info.push(tax_info);
    }

    /// Replaces every sub-record collection
    ///
    /// Contacts are re-added in order, so when several contacts of one
    /// channel are flagged primary the last one keeps the flag.
    pub fn replace_details(&mut self, details: CustomerDetails) {
        self.addresses = details.addresses;
        self.tax_info = details.tax_info;
        self.contacts = Vec::with_capacity(details.contacts.len());
        for contact in details.contacts {
            self.add_contact(contact);
        }
    }

    /// The primary contact of a channel, if any
    pub fn primary_contact(&self, channel: ContactChannel) -> Option<&ContactInfo> {
        self.contacts
            .iter()
            .find(|c| c.channel == channel && c.is_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::AddressType;

    fn person() -> PersonInfo {
        PersonInfo {
            given_name: "given-name".to_string(),
            family_name: "family-name".to_string(),
            ssn: "SSN".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            citizenship: "US".to_string(),
        }
    }

    fn organization() -> OrganizationInfo {
        OrganizationInfo {
            name: "org-name".to_string(),
            form: "Ltd".to_string(),
            legal_id: "legal-id".to_string(),
            registration_date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            registration_country: "US".to_string(),
        }
    }

    #[test]
    fn test_new_customer_is_prospect() {
        let customer = Customer::new(CustomerId::new(5), person().into());
        assert_eq!(customer.id(), CustomerId::new(5));
        assert_eq!(customer.state(), CustomerState::Prospect);
        assert_eq!(customer.customer_type(), CustomerType::Private);
        assert!(customer.addresses().is_empty());
    }

    #[test]
    fn test_with_random_id() {
        let customer = Customer::with_random_id(organization().into());
        assert!(!customer.id().is_zero());
        assert_eq!(customer.state(), CustomerState::Prospect);
        assert_eq!(customer.info(), &CustomerInfo::Organization(organization()));
    }

    #[test]
    fn test_update_info_same_kind() {
        let mut customer = Customer::new(CustomerId::new(1), person().into());
        let mut renamed = person();
        renamed.given_name = "new-name".to_string();

        customer.update_info(renamed.clone().into()).unwrap();
        assert_eq!(customer.info().as_person(), Some(&renamed));
    }

    #[test]
    fn test_update_info_other_kind_is_rejected_without_change() {
        let mut customer = Customer::new(CustomerId::new(1), person().into());
        let before = customer.clone();

        let err = customer.update_info(organization().into()).unwrap_err();
        assert_eq!(
            err,
            CustomerError::TypeMismatch {
                current: CustomerType::Private,
                requested: CustomerType::Organization,
            }
        );
        assert_eq!(customer, before);
    }

    #[test]
    fn test_from_parts() {
        assert!(CustomerInfo::from_parts(Some(person()), None).is_ok());
        assert!(CustomerInfo::from_parts(None, Some(organization())).is_ok());
        assert!(matches!(
            CustomerInfo::from_parts(None, None),
            Err(CustomerError::InvalidInput(_))
        ));
        assert!(matches!(
            CustomerInfo::from_parts(Some(person()), Some(organization())),
            Err(CustomerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_state_codes() {
        assert_eq!(CustomerState::try_from(2).unwrap(), CustomerState::Active);
        assert_eq!(CustomerState::Passive.code(), 3);
        assert_eq!(
            CustomerState::try_from(0).unwrap_err(),
            CustomerError::InvalidState(0)
        );
        assert!(CustomerState::try_from(4).is_err());
    }

    #[test]
    fn test_primary_contact_is_unique_per_channel() {
        let mut customer = Customer::new(CustomerId::new(1), person().into());
        customer.add_contact(ContactInfo::email("first@example.com").primary());
        customer.add_contact(ContactInfo::phone("+358401234567").primary());
        customer.add_contact(ContactInfo::email("second@example.com").primary());

        let primary = customer.primary_contact(ContactChannel::Email).unwrap();
        assert_eq!(primary.value, "second@example.com");
        assert_eq!(
            customer.contacts().iter().filter(|c| c.is_primary).count(),
            2
        );
    }

    #[test]
    fn test_replace_details() {
        let mut customer = Customer::new(CustomerId::new(1), person().into());
        customer.add_tax_info(TaxInfo::new("FI", "123"));

        customer.replace_details(CustomerDetails {
            addresses: vec![Address::new(
                AddressType::Home,
                "Street 1",
                "00100",
                "Helsinki",
                "FI",
            )],
            contacts: vec![],
            tax_info: vec![],
        });

        assert_eq!(customer.addresses().len(), 1);
        assert!(customer.tax_info().is_empty());
        assert_eq!(customer.details().addresses[0].city, "Helsinki");
    }

    #[test]
    fn test_display_name() {
        let customer = Customer::new(CustomerId::new(2), organization().into());
        assert_eq!(customer.display_name(), "org-name Ltd");
    }

    #[test]
    fn test_info_serializes_with_type_tag() {
        let json = serde_json::to_value(CustomerInfo::from(person())).unwrap();
        assert_eq!(json["type"], "person");
        assert_eq!(json["given_name"], "given-name");
    }
}

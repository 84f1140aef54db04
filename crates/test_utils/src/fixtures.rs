//! Pre-built Test Fixtures
//!
//! Provides ready-to-use customer data. The values are fixed so tests can
//! assert on them directly.

use chrono::NaiveDate;
use core_kernel::CustomerId;
use domain_customer::{
    Address, AddressType, ContactInfo, Customer, CustomerDetails, CustomerState,
    OrganizationInfo, PersonInfo, TaxInfo,
};

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// Id of the seeded private customer
    pub const PERSON_ID: CustomerId = CustomerId::new(1);
    /// Id of the seeded organization customer
    pub const ORGANIZATION_ID: CustomerId = CustomerId::new(2);

    pub fn epoch() -> NaiveDate {
        NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid date")
    }

    /// A valid person info
    pub fn person() -> PersonInfo {
        PersonInfo {
            given_name: "given-name".to_string(),
            family_name: "family-name".to_string(),
            ssn: "SSN".to_string(),
            date_of_birth: Self::epoch(),
            citizenship: "US".to_string(),
        }
    }

    /// A valid organization info
    pub fn organization() -> OrganizationInfo {
        OrganizationInfo {
            name: "org-name".to_string(),
            form: "Ltd".to_string(),
            legal_id: "legal-id".to_string(),
            registration_date: Self::epoch(),
            registration_country: "US".to_string(),
        }
    }

    /// Person 1 as a prospect and organization 2 as an active customer
    pub fn seed() -> Vec<Customer> {
        vec![
            Customer::new(Self::PERSON_ID, Self::person().into()),
            Customer::new(Self::ORGANIZATION_ID, Self::organization().into())
                .with_state(CustomerState::Active),
        ]
    }

    pub fn home_address() -> Address {
        Address::new(AddressType::Home, "1 Main Street", "10001", "New York", "US")
    }

    pub fn registered_address() -> Address {
        Address::new(AddressType::Registered, "Aleksanterinkatu 1", "00100", "Helsinki", "FI")
    }

    /// A valid set of sub-records with one primary contact per channel
    pub fn details() -> CustomerDetails {
        CustomerDetails {
            addresses: vec![Self::home_address()],
            contacts: vec![
                ContactInfo::email("someone@example.com").primary(),
                ContactInfo::mobile("+12025550123").primary(),
            ],
            tax_info: vec![TaxInfo::new("US", "123-45-6789")],
        }
    }
}

//! Test Data Builders
//!
//! Builders construct test customers with sensible defaults so a test only
//! names the fields it cares about.

use core_kernel::CustomerId;
use domain_customer::{Address, ContactInfo, Customer, CustomerInfo, CustomerState, TaxInfo};

use crate::fixtures::CustomerFixtures;

/// Builder for constructing test customers
pub struct TestCustomerBuilder {
    id: CustomerId,
    state: CustomerState,
    info: CustomerInfo,
    addresses: Vec<Address>,
    contacts: Vec<ContactInfo>,
    tax_info: Vec<TaxInfo>,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::person()
    }
}

impl TestCustomerBuilder {
    /// A prospect private customer with the fixture person info
    pub fn person() -> Self {
        Self::with_info(CustomerFixtures::person().into())
    }

    /// A prospect organization customer with the fixture organization info
    pub fn organization() -> Self {
        Self::with_info(CustomerFixtures::organization().into())
    }

    pub fn with_info(info: CustomerInfo) -> Self {
        Self {
            id: CustomerFixtures::PERSON_ID,
            state: CustomerState::Prospect,
            info,
            addresses: Vec::new(),
            contacts: Vec::new(),
            tax_info: Vec::new(),
        }
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = CustomerId::new(id);
        self
    }

    pub fn state(mut self, state: CustomerState) -> Self {
        self.state = state;
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.addresses.push(address);
        self
    }

    pub fn contact(mut self, contact: ContactInfo) -> Self {
        self.contacts.push(contact);
        self
    }

    pub fn tax_info(mut self, tax_info: TaxInfo) -> Self {
        self.tax_info.push(tax_info);
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.id, self.info).with_state(self.state);
        for address in self.addresses {
            customer.add_address(address);
        }
        for contact in self.contacts {
            customer.add_contact(contact);
        }
        for tax_info in self.tax_info {
            customer.add_tax_info(tax_info);
        }
        customer
    }
}

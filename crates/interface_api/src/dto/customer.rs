//! Customer DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use domain_customer::{
    Address, ContactInfo, Customer, CustomerDetails, CustomerError, CustomerInfo,
    OrganizationInfo, PersonInfo, TaxInfo,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    pub given_name: String,
    pub family_name: String,
    pub ssn: String,
    pub date_of_birth: NaiveDate,
    pub citizenship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDto {
    pub name: String,
    pub form: String,
    pub legal_id: String,
    pub registration_date: NaiveDate,
    pub registration_country: String,
}

impl From<PersonDto> for PersonInfo {
    fn from(dto: PersonDto) -> Self {
        PersonInfo {
            given_name: dto.given_name,
            family_name: dto.family_name,
            ssn: dto.ssn,
            date_of_birth: dto.date_of_birth,
            citizenship: dto.citizenship,
        }
    }
}

impl From<&PersonInfo> for PersonDto {
    fn from(info: &PersonInfo) -> Self {
        PersonDto {
            given_name: info.given_name.clone(),
            family_name: info.family_name.clone(),
            ssn: info.ssn.clone(),
            date_of_birth: info.date_of_birth,
            citizenship: info.citizenship.clone(),
        }
    }
}

impl From<OrganizationDto> for OrganizationInfo {
    fn from(dto: OrganizationDto) -> Self {
        OrganizationInfo {
            name: dto.name,
            form: dto.form,
            legal_id: dto.legal_id,
            registration_date: dto.registration_date,
            registration_country: dto.registration_country,
        }
    }
}

impl From<&OrganizationInfo> for OrganizationDto {
    fn from(info: &OrganizationInfo) -> Self {
        OrganizationDto {
            name: info.name.clone(),
            form: info.form.clone(),
            legal_id: info.legal_id.clone(),
            registration_date: info.registration_date,
            registration_country: info.registration_country.clone(),
        }
    }
}

/// Info body: exactly one of `person` or `organization`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerInfoRequest {
    pub person: Option<PersonDto>,
    pub organization: Option<OrganizationDto>,
}

impl CustomerInfoRequest {
    pub fn into_info(self) -> Result<CustomerInfo, CustomerError> {
        CustomerInfo::from_parts(
            self.person.map(PersonInfo::from),
            self.organization.map(OrganizationInfo::from),
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    /// Requested id; a random one is generated when absent
    pub id: Option<u32>,
    #[serde(flatten)]
    pub info: CustomerInfoRequest,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStateRequest {
    /// Wire code: 1 prospect, 2 active, 3 passive
    pub state: i32,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateDetailsRequest {
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    #[serde(default)]
    pub tax_info: Vec<TaxInfo>,
}

impl From<UpdateDetailsRequest> for CustomerDetails {
    fn from(request: UpdateDetailsRequest) -> Self {
        CustomerDetails {
            addresses: request.addresses,
            contacts: request.contacts,
            tax_info: request.tax_info,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub id: u32,
    pub customer_type: String,
    pub state: String,
    pub state_code: i32,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationDto>,
    pub addresses: Vec<Address>,
    pub contacts: Vec<ContactInfo>,
    pub tax_info: Vec<TaxInfo>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        let info = customer.info();
        CustomerResponse {
            id: customer.id().value(),
            customer_type: customer.customer_type().to_string(),
            state: customer.state().to_string(),
            state_code: customer.state().code(),
            display_name: customer.display_name(),
            person: info.as_person().map(PersonDto::from),
            organization: info.as_organization().map(OrganizationDto::from),
            addresses: customer.addresses().to_vec(),
            contacts: customer.contacts().to_vec(),
            tax_info: customer.tax_info().to_vec(),
        }
    }
}

//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating customer data that passes
//! the registry's validation rules.

use chrono::NaiveDate;
use core_kernel::{CountryCode, CustomerId};
use domain_customer::{
    ContactInfo, CustomerInfo, CustomerState, OrganizationInfo, PersonInfo,
};
use proptest::prelude::*;

/// Strategy for generating non-zero customer ids
pub fn customer_id_strategy() -> impl Strategy<Value = CustomerId> {
    (1u32..=u32::MAX).prop_map(CustomerId::new)
}

/// Strategy for generating any lifecycle state
pub fn customer_state_strategy() -> impl Strategy<Value = CustomerState> {
    prop_oneof![
        Just(CustomerState::Prospect),
        Just(CustomerState::Active),
        Just(CustomerState::Passive),
    ]
}

/// Strategy for generating known alpha-2 country codes
pub fn country_code_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(CountryCode::all()).prop_map(|c| c.alpha2().to_string())
}

/// Strategy for generating dates well in the past
pub fn past_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2020, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day 1-28 exists in every month")
    })
}

/// Strategy for generating person names, hyphenated and non-ASCII included
pub fn person_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,8}-[A-Z][a-z]{1,8}",
        "[ÅÄÖÉ][a-zäöåé]{2,8}",
    ]
}

/// Strategy for generating organization names
pub fn org_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,10}",
        "[A-Z][a-z]{2,8} & [A-Z][a-z]{2,8}",
        "[A-Z][a-z]{2,8}-[A-Z][a-z]{2,8} [0-9]{1,4}",
    ]
}

/// Strategy for generating valid PersonInfo values
pub fn person_info_strategy() -> impl Strategy<Value = PersonInfo> {
    (
        person_name_strategy(),
        person_name_strategy(),
        "[A-Z0-9]{6,11}",
        past_date_strategy(),
        country_code_strategy(),
    )
        .prop_map(|(given_name, family_name, ssn, date_of_birth, citizenship)| PersonInfo {
            given_name,
            family_name,
            ssn,
            date_of_birth,
            citizenship,
        })
}

/// Strategy for generating valid OrganizationInfo values
pub fn organization_info_strategy() -> impl Strategy<Value = OrganizationInfo> {
    (
        org_name_strategy(),
        prop_oneof![Just("Ltd"), Just("Oy"), Just("GmbH"), Just("LLC"), Just("AB")],
        "[0-9]{7}-[0-9]",
        past_date_strategy(),
        country_code_strategy(),
    )
        .prop_map(
            |(name, form, legal_id, registration_date, registration_country)| OrganizationInfo {
                name,
                form: form.to_string(),
                legal_id,
                registration_date,
                registration_country,
            },
        )
}

/// Strategy for generating either kind of info
pub fn customer_info_strategy() -> impl Strategy<Value = CustomerInfo> {
    prop_oneof![
        person_info_strategy().prop_map(CustomerInfo::from),
        organization_info_strategy().prop_map(CustomerInfo::from),
    ]
}

/// Strategy for generating well-formed contacts
pub fn contact_strategy() -> impl Strategy<Value = ContactInfo> {
    prop_oneof![
        "\\+?[0-9]{4,15}".prop_map(ContactInfo::phone),
        "\\+?[0-9]{4,15}".prop_map(ContactInfo::mobile),
        "[a-z]{1,10}@[a-z]{2,10}\\.(com|fi|org)".prop_map(ContactInfo::email),
    ]
}

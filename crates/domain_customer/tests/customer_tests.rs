//! Property and scenario tests for domain_customer

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use core_kernel::{CountryCode, CustomerId};

use domain_customer::{
    Address, AddressType, ContactChannel, ContactInfo, Customer, CustomerDetails, CustomerError,
    CustomerInfo, CustomerState, OrganizationInfo, PersonInfo, TaxInfo, Validator,
};

// ============================================================================
// Strategies
// ============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,8}-[A-Z][a-z]{1,8}",
        "[ÅÄÖ][a-zäöå]{2,8}",
    ]
}

fn org_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{2,10}",
        "[A-Z][a-z]{2,8} & [A-Z][a-z]{2,8}",
        "[A-Z][a-z]{2,8} [0-9]{1,4}",
    ]
}

fn country_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(CountryCode::all()).prop_map(|c| c.alpha2().to_string())
}

fn past_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2020, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn person_strategy() -> impl Strategy<Value = PersonInfo> {
    (
        name_strategy(),
        name_strategy(),
        "[A-Z0-9]{6,11}",
        past_date_strategy(),
        country_strategy(),
    )
        .prop_map(|(given_name, family_name, ssn, date_of_birth, citizenship)| PersonInfo {
            given_name,
            family_name,
            ssn,
            date_of_birth,
            citizenship,
        })
}

fn organization_strategy() -> impl Strategy<Value = OrganizationInfo> {
    (
        org_name_strategy(),
        prop_oneof![Just("Ltd"), Just("Oy"), Just("GmbH"), Just("LLC")],
        "[0-9]{7}-[0-9]",
        past_date_strategy(),
        country_strategy(),
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

fn info_strategy() -> impl Strategy<Value = CustomerInfo> {
    prop_oneof![
        person_strategy().prop_map(CustomerInfo::from),
        organization_strategy().prop_map(CustomerInfo::from),
    ]
}

fn state_strategy() -> impl Strategy<Value = CustomerState> {
    prop_oneof![
        Just(CustomerState::Prospect),
        Just(CustomerState::Active),
        Just(CustomerState::Passive),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_valid_info_validates(info in info_strategy()) {
        prop_assert!(Validator::new().validate(&info).is_ok());
    }

    #[test]
    fn prop_new_customer_is_valid_prospect(id in 1u32.., info in info_strategy()) {
        let customer = Customer::new(CustomerId::new(id), info.clone());
        prop_assert_eq!(customer.state(), CustomerState::Prospect);
        prop_assert_eq!(customer.info(), &info);
        prop_assert!(Validator::new().validate(&customer).is_ok());
    }

    #[test]
    fn prop_kind_mismatch_never_mutates(
        person in person_strategy(),
        organization in organization_strategy(),
        state in state_strategy(),
        start_as_person in any::<bool>(),
    ) {
        let (initial, other): (CustomerInfo, CustomerInfo) = if start_as_person {
            (person.into(), organization.into())
        } else {
            (organization.into(), person.into())
        };
        let mut customer = Customer::new(CustomerId::new(1), initial).with_state(state);
        let before = customer.clone();

        let result = customer.update_info(other);
        let is_type_mismatch = matches!(result, Err(CustomerError::TypeMismatch { .. }));
        prop_assert!(is_type_mismatch);
        prop_assert_eq!(customer, before);
    }

    #[test]
    fn prop_state_codes_round_trip(code in -10i32..10) {
        match CustomerState::try_from(code) {
            Ok(state) => prop_assert_eq!(state.code(), code),
            Err(err) => {
                prop_assert!(!(1..=3).contains(&code));
                prop_assert_eq!(err, CustomerError::InvalidState(code));
            }
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

fn test_person() -> PersonInfo {
    PersonInfo {
        given_name: "given-name".to_string(),
        family_name: "family-name".to_string(),
        ssn: "SSN".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
        citizenship: "US".to_string(),
    }
}

#[test]
fn test_invalid_country_is_reported() {
    let mut info = test_person();
    info.citizenship = "EUR".to_string();

    let errors = Validator::new().validate(&info).unwrap_err();
    let violation = errors.field("citizenship").unwrap();
    assert_eq!(violation.rule, "iso3166_1_alpha2");
}

#[test]
fn test_future_birth_date_fails_at_fixed_time() {
    let info = test_person();
    let now = Utc.with_ymd_and_hms(1969, 6, 1, 0, 0, 0).unwrap();

    assert!(Validator::new().validate_at(&info, now).is_err());
    assert!(Validator::new().validate_at(&info, Utc::now()).is_ok());
}

#[test]
fn test_details_validation_covers_every_record() {
    let details = CustomerDetails {
        addresses: vec![Address::new(AddressType::Billing, "", "00100", "Helsinki", "FI")],
        contacts: vec![ContactInfo::mobile("12")],
        tax_info: vec![TaxInfo::new("XX", "FI123")],
    };

    let errors = Validator::new().validate(&details).unwrap_err();
    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["addresses[0].street", "contacts[0].value", "tax_info[0].country"]);
}

#[test]
fn test_replace_details_keeps_last_primary_per_channel() {
    let mut customer = Customer::new(CustomerId::new(3), test_person().into());
    customer.replace_details(CustomerDetails {
        contacts: vec![
            ContactInfo::email("a@example.com").primary(),
            ContactInfo::email("b@example.com").primary(),
            ContactInfo::mobile("+358401234567").primary(),
        ],
        ..Default::default()
    });

    assert_eq!(
        customer.primary_contact(ContactChannel::Email).map(|c| c.value.as_str()),
        Some("b@example.com")
    );
    assert!(customer.primary_contact(ContactChannel::Phone).is_none());
    assert!(customer.primary_contact(ContactChannel::Mobile).is_some());
}

//! Declarative field validation
//!
//! Each validatable type publishes an explicit table of field bindings
//! ([`Validate::bindings`]): a field path, the value found there, and the
//! rules it must satisfy. The [`Validator`] evaluates those bindings by
//! looking every rule up by name in its predicate table.
//!
//! # Built-in rules
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | `required` | text is non-empty, number is non-zero |
//! | `min` / `max` | number (or text length) is within the bound |
//! | `person-name` | unicode letters with optional inner `-` |
//! | `org-name` | unicode letters, digits, inner space, `-`, `&` |
//! | `iso3166_1_alpha2` | a known upper-case alpha-2 code |
//! | `before` | the date is strictly earlier than the evaluation time |
//! | `phone` | optional `+` and 4 to 15 digits |
//! | `email` | a well-formed address |
//!
//! Validation never mutates and never stops at the first bad field: the
//! result lists one violation for every field that fails, naming the first
//! rule it broke.
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::validation::{FieldValue, Rule, Validator};
//!
//! let validator = Validator::new();
//! let rules = [Rule::Min(1), Rule::Max(3)];
//! assert!(validator.validate_value("state", FieldValue::Number(2), &rules).is_ok());
//! assert!(validator.validate_value("state", FieldValue::Number(0), &rules).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::address::Address;
use crate::contact::ContactInfo;
use crate::customer::{Customer, CustomerDetails, CustomerInfo, OrganizationInfo, PersonInfo};
use crate::rules;
use crate::tax::TaxInfo;

/// A value found at a field path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Date(NaiveDate),
}

/// A named constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Required,
    Min(i64),
    Max(i64),
    PersonName,
    OrgName,
    Iso3166Alpha2,
    Before,
    Phone,
    Email,
    /// A rule provided through [`Validator::register`]
    Named(&'static str),
}

impl Rule {
    /// Name under which the rule's predicate is registered
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
            Rule::PersonName => "person-name",
            Rule::OrgName => "org-name",
            Rule::Iso3166Alpha2 => "iso3166_1_alpha2",
            Rule::Before => "before",
            Rule::Phone => "phone",
            Rule::Email => "email",
            Rule::Named(name) => *name,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Min(bound) | Rule::Max(bound) => write!(f, "{}={}", self.name(), bound),
            _ => f.write_str(self.name()),
        }
    }
}

/// One row of a type's binding table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding<'a> {
    pub field: String,
    pub value: FieldValue<'a>,
    pub rules: &'static [Rule],
}

impl<'a> FieldBinding<'a> {
    pub fn new(field: impl Into<String>, value: FieldValue<'a>, rules: &'static [Rule]) -> Self {
        Self {
            field: field.into(),
            value,
            rules,
        }
    }

    fn prefixed(mut self, prefix: &str) -> Self {
        self.field = format!("{}.{}", prefix, self.field);
        self
    }
}

/// Types that expose a field binding table
pub trait Validate {
    fn bindings(&self) -> Vec<FieldBinding<'_>>;
}

fn nested<'a, T: Validate + ?Sized>(prefix: &str, value: &'a T) -> Vec<FieldBinding<'a>> {
    value
        .bindings()
        .into_iter()
        .map(|binding| binding.prefixed(prefix))
        .collect()
}

fn nested_all<'a, T: Validate>(name: &str, values: &'a [T]) -> Vec<FieldBinding<'a>> {
    values
        .iter()
        .enumerate()
        .flat_map(|(i, value)| nested(&format!("{name}[{i}]"), value))
        .collect()
}

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::PersonName];
const ORG_NAME_RULES: &[Rule] = &[Rule::Required, Rule::OrgName];
const REQUIRED: &[Rule] = &[Rule::Required];
const PAST_DATE: &[Rule] = &[Rule::Required, Rule::Before];
const COUNTRY: &[Rule] = &[Rule::Required, Rule::Iso3166Alpha2];
const PHONE_RULES: &[Rule] = &[Rule::Required, Rule::Phone];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];

/// Bounds of a state wire code
pub const STATE_RULES: &[Rule] = &[Rule::Min(1), Rule::Max(3)];

impl Validate for PersonInfo {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("given_name", FieldValue::Text(&self.given_name), NAME_RULES),
            FieldBinding::new("family_name", FieldValue::Text(&self.family_name), NAME_RULES),
            FieldBinding::new("ssn", FieldValue::Text(&self.ssn), REQUIRED),
            FieldBinding::new("date_of_birth", FieldValue::Date(self.date_of_birth), PAST_DATE),
            FieldBinding::new("citizenship", FieldValue::Text(&self.citizenship), COUNTRY),
        ]
    }
}

impl Validate for OrganizationInfo {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("name", FieldValue::Text(&self.name), ORG_NAME_RULES),
            FieldBinding::new("form", FieldValue::Text(&self.form), REQUIRED),
            FieldBinding::new("legal_id", FieldValue::Text(&self.legal_id), REQUIRED),
            FieldBinding::new(
                "registration_date",
                FieldValue::Date(self.registration_date),
                PAST_DATE,
            ),
            FieldBinding::new(
                "registration_country",
                FieldValue::Text(&self.registration_country),
                COUNTRY,
            ),
        ]
    }
}

impl Validate for CustomerInfo {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        match self {
            CustomerInfo::Person(person) => person.bindings(),
            CustomerInfo::Organization(organization) => organization.bindings(),
        }
    }
}

impl Validate for Address {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("street", FieldValue::Text(&self.street), REQUIRED),
            FieldBinding::new("postal_code", FieldValue::Text(&self.postal_code), REQUIRED),
            FieldBinding::new("city", FieldValue::Text(&self.city), REQUIRED),
            FieldBinding::new("country", FieldValue::Text(&self.country), COUNTRY),
        ]
    }
}

impl Validate for ContactInfo {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        let rules = if self.channel.is_phone() {
            PHONE_RULES
        } else {
            EMAIL_RULES
        };
        vec![FieldBinding::new("value", FieldValue::Text(&self.value), rules)]
    }
}

impl Validate for TaxInfo {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        vec![
            FieldBinding::new("country", FieldValue::Text(&self.country), COUNTRY),
            FieldBinding::new("tax_id", FieldValue::Text(&self.tax_id), REQUIRED),
        ]
    }
}

impl Validate for CustomerDetails {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        let mut bindings = nested_all("addresses", &self.addresses);
        bindings.extend(nested_all("contacts", &self.contacts));
        bindings.extend(nested_all("tax_info", &self.tax_info));
        bindings
    }
}

impl Validate for Customer {
    fn bindings(&self) -> Vec<FieldBinding<'_>> {
        let mut bindings = vec![
            FieldBinding::new("id", FieldValue::Number(self.id().value() as i64), REQUIRED),
            FieldBinding::new("state", FieldValue::Number(self.state().code() as i64), STATE_RULES),
        ];
        bindings.extend(nested("info", self.info()));
        bindings.extend(nested_all("addresses", self.addresses()));
        bindings.extend(nested_all("contacts", self.contacts()));
        bindings.extend(nested_all("tax_info", self.tax_info()));
        bindings
    }
}

/// Inputs a predicate may depend on besides the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// Evaluation time used by `before`
    pub now: DateTime<Utc>,
}

impl RuleContext {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

/// Signature shared by every rule predicate
pub type Predicate = fn(&FieldValue<'_>, &Rule, &RuleContext) -> bool;

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub rule: String,
    pub message: String,
}

/// Every field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation: {}", .errors.len(), summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.field, e.rule))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// The violation recorded for a field path, if any
    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Rule engine mapping rule names to predicates
#[derive(Debug, Clone)]
pub struct Validator {
    predicates: HashMap<&'static str, Predicate>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Creates a validator with the built-in rules registered
    pub fn new() -> Self {
        let mut validator = Self {
            predicates: HashMap::new(),
        };
        validator.register("required", rules::required);
        validator.register("min", rules::min);
        validator.register("max", rules::max);
        validator.register("person-name", rules::person_name);
        validator.register("org-name", rules::org_name);
        validator.register("iso3166_1_alpha2", rules::iso3166_1_alpha2);
        validator.register("before", rules::before);
        validator.register("phone", rules::phone);
        validator.register("email", rules::email);
        validator
    }

    /// Registers or replaces the predicate for a rule name
    pub fn register(&mut self, name: &'static str, predicate: Predicate) -> &mut Self {
        self.predicates.insert(name, predicate);
        self
    }

    pub fn has_rule(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Validates against the current time
    pub fn validate<T: Validate + ?Sized>(&self, value: &T) -> Result<(), ValidationErrors> {
        self.validate_at(value, Utc::now())
    }

    /// Validates with `now` as the evaluation time
    pub fn validate_at<T: Validate + ?Sized>(
        &self,
        value: &T,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationErrors> {
        let ctx = RuleContext::at(now);
        let errors: Vec<FieldError> = value
            .bindings()
            .iter()
            .filter_map(|binding| self.check(&binding.field, &binding.value, binding.rules, &ctx))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { errors })
        }
    }

    /// Validates one value without a surrounding struct
    pub fn validate_value(
        &self,
        field: &str,
        value: FieldValue<'_>,
        rules: &[Rule],
    ) -> Result<(), ValidationErrors> {
        let ctx = RuleContext::at(Utc::now());
        match self.check(field, &value, rules, &ctx) {
            None => Ok(()),
            Some(error) => Err(ValidationErrors {
                errors: vec![error],
            }),
        }
    }

    fn check(
        &self,
        field: &str,
        value: &FieldValue<'_>,
        rules: &[Rule],
        ctx: &RuleContext,
    ) -> Option<FieldError> {
        rules.iter().find_map(|rule| {
            let message = match self.predicates.get(rule.name()) {
                Some(predicate) if predicate(value, rule, ctx) => return None,
                Some(_) => violation_message(rule),
                None => format!("no predicate registered for rule '{}'", rule.name()),
            };
            Some(FieldError {
                field: field.to_string(),
                rule: rule.to_string(),
                message,
            })
        })
    }
}

fn violation_message(rule: &Rule) -> String {
    match rule {
        Rule::Required => "value is required".to_string(),
        Rule::Min(bound) => format!("value must be at least {bound}"),
        Rule::Max(bound) => format!("value must be at most {bound}"),
        Rule::PersonName => "not a valid person name".to_string(),
        Rule::OrgName => "not a valid organization name".to_string(),
        Rule::Iso3166Alpha2 => "not an ISO 3166-1 alpha-2 country code".to_string(),
        Rule::Before => "date must be in the past".to_string(),
        Rule::Phone => "not a valid phone number".to_string(),
        Rule::Email => "not a valid email address".to_string(),
        Rule::Named(name) => format!("value does not satisfy '{name}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::CustomerId;

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
    fn test_valid_infos_pass() {
        let validator = Validator::new();
        assert!(validator.validate(&person()).is_ok());
        assert!(validator.validate(&organization()).is_ok());
        assert!(validator.validate(&CustomerInfo::from(person())).is_ok());
    }

    #[test]
    fn test_every_failing_field_is_reported() {
        let mut info = person();
        info.given_name = String::new();
        info.ssn = String::new();
        info.citizenship = "EUR".to_string();

        let errors = Validator::new().validate(&info).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.field("given_name").unwrap().rule, "required");
        assert_eq!(errors.field("ssn").unwrap().rule, "required");
        assert_eq!(errors.field("citizenship").unwrap().rule, "iso3166_1_alpha2");
        assert!(errors.field("family_name").is_none());
    }

    #[test]
    fn test_empty_legal_id_fails() {
        let mut info = organization();
        info.legal_id = String::new();

        let errors = Validator::new().validate(&info).unwrap_err();
        assert_eq!(errors.errors()[0].field, "legal_id");
    }

    #[test]
    fn test_before_uses_injected_time() {
        let info = person();
        let validator = Validator::new();
        let before_birth = Utc.with_ymd_and_hms(1969, 12, 31, 0, 0, 0).unwrap();

        let errors = validator.validate_at(&info, before_birth).unwrap_err();
        assert_eq!(errors.field("date_of_birth").unwrap().rule, "before");
    }

    #[test]
    fn test_customer_paths_are_prefixed() {
        let mut customer = Customer::new(CustomerId::new(0), person().into());
        customer.add_contact(ContactInfo::email("ok@example.com"));
        customer.add_contact(ContactInfo::email("broken"));
        customer.add_tax_info(TaxInfo::new("FI", ""));

        let errors = Validator::new().validate(&customer).unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "contacts[1].value", "tax_info[0].tax_id"]);
        assert_eq!(errors.field("contacts[1].value").unwrap().rule, "email");
    }

    #[test]
    fn test_nested_info_prefix() {
        let mut info = person();
        info.family_name = "Smith2".to_string();
        let customer = Customer::new(CustomerId::new(1), info.into());

        let errors = Validator::new().validate(&customer).unwrap_err();
        assert_eq!(errors.errors()[0].field, "info.family_name");
        assert_eq!(errors.errors()[0].rule, "person-name");
    }

    #[test]
    fn test_validate_value_state_bounds() {
        let validator = Validator::new();
        for code in 1..=3 {
            assert!(validator
                .validate_value("state", FieldValue::Number(code), STATE_RULES)
                .is_ok());
        }
        let errors = validator
            .validate_value("state", FieldValue::Number(0), STATE_RULES)
            .unwrap_err();
        assert_eq!(errors.errors()[0].rule, "min=1");

        let errors = validator
            .validate_value("state", FieldValue::Number(4), STATE_RULES)
            .unwrap_err();
        assert_eq!(errors.errors()[0].rule, "max=3");
    }

    #[test]
    fn test_unregistered_rule_is_a_violation() {
        let errors = Validator::new()
            .validate_value("ssn", FieldValue::Text("SSN"), &[Rule::Named("luhn")])
            .unwrap_err();
        assert_eq!(errors.errors()[0].rule, "luhn");
        assert!(errors.errors()[0].message.contains("no predicate"));
    }

    #[test]
    fn test_registered_rule_is_used() {
        fn upper(value: &FieldValue<'_>, _: &Rule, _: &RuleContext) -> bool {
            matches!(value, FieldValue::Text(t) if t.chars().all(|c| c.is_ascii_uppercase()))
        }

        let mut validator = Validator::new();
        validator.register("upper", upper);
        assert!(validator.has_rule("upper"));
        assert!(validator
            .validate_value("ssn", FieldValue::Text("SSN"), &[Rule::Named("upper")])
            .is_ok());
        assert!(validator
            .validate_value("ssn", FieldValue::Text("ssn"), &[Rule::Named("upper")])
            .is_err());
    }

    #[test]
    fn test_error_display_lists_fields() {
        let mut info = organization();
        info.name = String::new();
        let errors = Validator::new().validate(&info).unwrap_err();
        assert_eq!(errors.to_string(), "1 field(s) failed validation: name (required)");
    }
}

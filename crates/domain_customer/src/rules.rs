//! Built-in rule predicates
//!
//! Every predicate has the same shape so the [`Validator`](crate::validation::Validator)
//! can keep them in one name-keyed table. A predicate that receives a value
//! of a kind it does not understand reports a violation.

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use core_kernel::CountryCode;

use crate::validation::{FieldValue, Rule, RuleContext};

static PERSON_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{L}$|^\p{L}[\p{L}\-]*\p{L}$").expect("person name pattern is valid")
});

static ORG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}0-9]$|^[\p{L}0-9][\p{L}0-9\-\& ]*[\p{L}0-9]$")
        .expect("organization name pattern is valid")
});

static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{4,15}$").expect("phone pattern is valid"));

pub(crate) fn required(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    match value {
        FieldValue::Text(text) => !text.is_empty(),
        FieldValue::Number(n) => *n != 0,
        FieldValue::Date(_) => true,
    }
}

pub(crate) fn min(value: &FieldValue<'_>, rule: &Rule, _ctx: &RuleContext) -> bool {
    let Rule::Min(bound) = rule else {
        return false;
    };
    match value {
        FieldValue::Number(n) => n >= bound,
        FieldValue::Text(text) => text.chars().count() as i64 >= *bound,
        FieldValue::Date(_) => false,
    }
}

pub(crate) fn max(value: &FieldValue<'_>, rule: &Rule, _ctx: &RuleContext) -> bool {
    let Rule::Max(bound) = rule else {
        return false;
    };
    match value {
        FieldValue::Number(n) => n <= bound,
        FieldValue::Text(text) => text.chars().count() as i64 <= *bound,
        FieldValue::Date(_) => false,
    }
}

pub(crate) fn person_name(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    matches!(value, FieldValue::Text(text) if PERSON_NAME.is_match(text))
}

pub(crate) fn org_name(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    matches!(value, FieldValue::Text(text) if ORG_NAME.is_match(text))
}

pub(crate) fn iso3166_1_alpha2(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    matches!(value, FieldValue::Text(text) if CountryCode::is_alpha2(text))
}

/// Midnight UTC of the date must be strictly earlier than the evaluation time
pub(crate) fn before(value: &FieldValue<'_>, _rule: &Rule, ctx: &RuleContext) -> bool {
    match value {
        FieldValue::Date(date) => match date.and_hms_opt(0, 0, 0) {
            Some(midnight) => Utc.from_utc_datetime(&midnight) < ctx.now,
            None => false,
        },
        _ => false,
    }
}

pub(crate) fn phone(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    matches!(value, FieldValue::Text(text) if PHONE.is_match(text))
}

pub(crate) fn email(value: &FieldValue<'_>, _rule: &Rule, _ctx: &RuleContext) -> bool {
    match value {
        FieldValue::Text(text) => text.to_string().validate_email(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ctx() -> RuleContext {
        RuleContext::at(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    fn text(value: &str) -> FieldValue<'_> {
        FieldValue::Text(value)
    }

    #[test]
    fn test_person_name_shapes() {
        let rule = Rule::PersonName;
        for ok in ["A", "Anna", "given-name", "Jean-Luc", "Åsa", "Łukasz", "Мария"] {
            assert!(person_name(&text(ok), &rule, &ctx()), "{ok} should pass");
        }
        for bad in ["", "-Anna", "Anna-", "Anna Maria", "R2D2", "O'Brien"] {
            assert!(!person_name(&text(bad), &rule, &ctx()), "{bad} should fail");
        }
    }

    #[test]
    fn test_org_name_shapes() {
        let rule = Rule::OrgName;
        for ok in ["X", "7", "org-name", "Smith & Sons", "Acme 2000", "Oy Yhtiö Ab"] {
            assert!(org_name(&text(ok), &rule, &ctx()), "{ok} should pass");
        }
        for bad in ["", " Acme", "Acme ", "Acme!", "&Co", "Acme-"] {
            assert!(!org_name(&text(bad), &rule, &ctx()), "{bad} should fail");
        }
    }

    #[test]
    fn test_org_name_digits_are_ascii_only() {
        let rule = Rule::OrgName;
        for bad in ["Acme \u{0661}\u{0662}", "\u{0663}", "\u{0966}Co"] {
            assert!(!org_name(&text(bad), &rule, &ctx()), "{bad} should fail");
        }
    }

    #[test]
    fn test_phone() {
        let rule = Rule::Phone;
        assert!(phone(&text("+358401234567"), &rule, &ctx()));
        assert!(phone(&text("1234"), &rule, &ctx()));
        assert!(!phone(&text("123"), &rule, &ctx()));
        assert!(!phone(&text("+1234567890123456"), &rule, &ctx()));
        assert!(!phone(&text("040 123 4567"), &rule, &ctx()));
        assert!(!phone(&text("++1234"), &rule, &ctx()));
    }

    #[test]
    fn test_email() {
        let rule = Rule::Email;
        assert!(email(&text("someone@example.com"), &rule, &ctx()));
        assert!(!email(&text("someone@"), &rule, &ctx()));
        assert!(!email(&text("not an email"), &rule, &ctx()));
    }

    #[test]
    fn test_before_is_strict() {
        let rule = Rule::Before;
        let past = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let midnight = RuleContext::at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert!(before(&FieldValue::Date(past), &rule, &ctx()));
        assert!(!before(&FieldValue::Date(future), &rule, &ctx()));
        assert!(before(&FieldValue::Date(today), &rule, &ctx()));
        assert!(!before(&FieldValue::Date(today), &rule, &midnight));
        assert!(!before(&text("1970-01-01"), &rule, &ctx()));
    }

    #[test]
    fn test_required_and_bounds() {
        assert!(!required(&FieldValue::Number(0), &Rule::Required, &ctx()));
        assert!(required(&FieldValue::Number(3), &Rule::Required, &ctx()));
        assert!(!required(&text(""), &Rule::Required, &ctx()));

        assert!(min(&FieldValue::Number(1), &Rule::Min(1), &ctx()));
        assert!(!min(&FieldValue::Number(0), &Rule::Min(1), &ctx()));
        assert!(max(&FieldValue::Number(3), &Rule::Max(3), &ctx()));
        assert!(!max(&FieldValue::Number(4), &Rule::Max(3), &ctx()));
        assert!(max(&text("abc"), &Rule::Max(3), &ctx()));
    }

    #[test]
    fn test_iso_alpha2() {
        let rule = Rule::Iso3166Alpha2;
        assert!(iso3166_1_alpha2(&text("US"), &rule, &ctx()));
        assert!(!iso3166_1_alpha2(&text("EUR"), &rule, &ctx()));
        assert!(!iso3166_1_alpha2(&text("us"), &rule, &ctx()));
    }
}

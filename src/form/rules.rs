//! Field validation rules

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::Field;
use super::FormValues;

/// Minimum number of characters in a first name
pub const FIRST_NAME_MIN_CHARS: usize = 5;

/// Field-keyed error messages, iterated in field order
pub type ValidationErrors = BTreeMap<Field, &'static str>;

/// A predicate over one field's value and the message shown when it fails
pub struct Rule {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

pub static RULES: [Rule; 3] = [
    Rule {
        field: Field::FirstName,
        check: has_min_chars,
        message: "firstName must have at least 5 characters.",
    },
    Rule {
        field: Field::LastName,
        check: is_present,
        message: "lastName is a required field.",
    },
    Rule {
        field: Field::Email,
        check: is_email,
        message: "email must be a valid email address.",
    },
];

fn has_min_chars(value: &str) -> bool {
    value.chars().count() >= FIRST_NAME_MIN_CHARS
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

/// Whether `value` has the `local@domain.tld` shape
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Rule bound to `field`, if the field has one
pub fn rule_for(field: Field) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.field == field)
}

/// Check a single field, returning its error message when the rule fails
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    rule_for(field)
        .filter(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

/// Check every rule against the current values
pub fn validate(values: &FormValues) -> ValidationErrors {
    RULES
        .iter()
        .filter(|rule| !(rule.check)(values.get(rule.field)))
        .map(|rule| (rule.field, rule.message))
        .collect()
}

/// Render an error message the way the form shows it
pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

//! Contact form state and validation
//!
//! [`FormValidator`] owns the field values, the derived error map and the
//! submission state. Rendering layers read it after every event and never
//! keep validation state of their own.

pub mod errors;
pub mod field;
pub mod rules;
pub mod validator;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use errors::FormError;
pub use field::Field;
pub use rules::{validate, validate_field, ValidationErrors};
pub use validator::{FormPhase, FormValidator};

/// Marker shared by every rendered error element
pub const ERROR_MARKER: &str = "error";

/// Raw values of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Read-only copy of the values accepted by a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

/// One element of the post-submit summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub field: Field,
    pub marker: &'static str,
    pub value: String,
}

impl DisplayItem {
    pub fn text(&self) -> String {
        format!("{}: {}", self.field.summary_label(), self.value)
    }
}

/// One rendered error element, tied to the field it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorItem {
    pub field: Field,
    pub marker: &'static str,
    pub text: String,
}

impl ErrorItem {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            marker: ERROR_MARKER,
            text: rules::error_text(message),
        }
    }
}

impl Submission {
    pub(crate) fn from_values(values: &FormValues) -> Self {
        Self {
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            message: if values.message.is_empty() {
                None
            } else {
                Some(values.message.clone())
            },
        }
    }

    /// Summary elements; the message element only exists when a message was given
    pub fn display_items(&self) -> Vec<DisplayItem> {
        let mut items: Vec<DisplayItem> = [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Email, &self.email),
        ]
        .into_iter()
        .map(|(field, value)| DisplayItem {
            field,
            marker: field.display_marker(),
            value: value.clone(),
        })
        .collect();

        if let Some(ref message) = self.message {
            items.push(DisplayItem {
                field: Field::Message,
                marker: Field::Message.display_marker(),
                value: message.clone(),
            });
        }
        items
    }
}

impl FromStr for Field {
    type Err = FormError;

    /// Accepts the camelCase field name or a case-insensitive label form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Field::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == normalized)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

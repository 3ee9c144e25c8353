//! Form error types

use thiserror::Error;

use super::field::Field;
use super::rules::{error_text, ValidationErrors};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{} field(s) failed validation: {}", .0.len(), summarize(.0))]
    Invalid(ValidationErrors),

    #[error("Unknown field '{0}'")]
    UnknownField(String),
}

impl FormError {
    /// Display lines for every failing field, in field order
    pub fn error_lines(&self) -> Vec<String> {
        match self {
            FormError::Invalid(errors) => errors.values().map(|message| error_text(message)).collect(),
            FormError::UnknownField(name) => vec![format!("Error: unknown field '{}'", name)],
        }
    }

    pub fn fields(&self) -> Vec<Field> {
        match self {
            FormError::Invalid(errors) => errors.keys().copied().collect(),
            FormError::UnknownField(_) => Vec::new(),
        }
    }
}

fn summarize(errors: &ValidationErrors) -> String {
    errors
        .keys()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Email, "email must be a valid email address.");
        errors.insert(Field::FirstName, "firstName must have at least 5 characters.");
        let err = FormError::Invalid(errors);

        assert_eq!(err.to_string(), "2 field(s) failed validation: firstName, email");
        assert_eq!(err.fields(), vec![Field::FirstName, Field::Email]);
        assert_eq!(
            err.error_lines(),
            vec![
                "Error: firstName must have at least 5 characters.".to_string(),
                "Error: email must be a valid email address.".to_string(),
            ]
        );
    }
}

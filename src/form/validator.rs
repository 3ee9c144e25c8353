//! Validation state machine for the contact form

use tracing::{debug, info, warn};

use super::errors::FormError;
use super::field::Field;
use super::rules::{self, ValidationErrors};
use super::{ErrorItem, FormValues, Submission};

/// Where the form is in its edit/submit cycle
#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    Editing,
    Submitted(Submission),
}

/// Field values, live errors and submission state of one mounted form
#[derive(Debug, Clone)]
pub struct FormValidator {
    values: FormValues,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            values: FormValues::default(),
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
        }
    }

    /// Start from pre-filled values without validating them yet
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::new()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    pub fn submission(&self) -> Option<&Submission> {
        match self.phase {
            FormPhase::Submitted(ref submission) => Some(submission),
            FormPhase::Editing => None,
        }
    }

    /// Store a new value and re-check that field only.
    ///
    /// Any edit leaves the submitted state; the summary belongs to the values
    /// that were accepted, not to the ones being typed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        debug!("set {} ({} chars)", field, value.chars().count());

        match rules::validate_field(field, &value) {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
        self.values.set(field, value);

        if self.is_submitted() {
            debug!("edit after submit, back to editing");
            self.phase = FormPhase::Editing;
        }
    }

    /// Like [`set_field`](Self::set_field) but addressed by name
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Re-check every field and accept the values when nothing fails
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        self.errors = rules::validate(&self.values);

        if !self.errors.is_empty() {
            warn!(
                "submit rejected, failing fields: {:?}",
                self.errors.keys().map(Field::as_str).collect::<Vec<_>>()
            );
            self.phase = FormPhase::Editing;
            return Err(FormError::Invalid(self.errors.clone()));
        }

        info!(
            "submit accepted (message {})",
            if self.values.message.is_empty() { "empty" } else { "present" }
        );
        let submission = Submission::from_values(&self.values);
        self.phase = FormPhase::Submitted(submission.clone());
        Ok(submission)
    }

    /// Every active error element, in field order
    pub fn error_items(&self) -> Vec<ErrorItem> {
        self.errors
            .iter()
            .map(|(&field, message)| ErrorItem::new(field, message))
            .collect()
    }

    /// Text of every active error element, in field order
    pub fn error_lines(&self) -> Vec<String> {
        self.error_items().into_iter().map(|item| item.text).collect()
    }

    /// Drop all values, errors and any submission
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ERROR_MARKER;

    fn filled(first: &str, last: &str, email: &str, message: &str) -> FormValidator {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, first);
        form.set_field(Field::LastName, last);
        form.set_field(Field::Email, email);
        form.set_field(Field::Message, message);
        form
    }

    #[test]
    fn test_new_form_is_empty_and_editing() {
        let form = FormValidator::new();
        assert_eq!(form.values(), &FormValues::default());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert!(form.submission().is_none());
    }

    #[test]
    fn test_typing_short_first_name_yields_one_error() {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, "Bill");
        assert_eq!(
            form.error_lines(),
            vec!["Error: firstName must have at least 5 characters.".to_string()]
        );
    }

    #[test]
    fn test_live_error_clears_when_rule_passes() {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, "Bill");
        form.set_field(Field::FirstName, "Billy");
        assert!(form.error(Field::FirstName).is_none());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_invalid_email_while_typing() {
        let mut form = FormValidator::new();
        form.set_field(Field::Email, "jimmy");
        assert_eq!(form.error(Field::Email), Some("email must be a valid email address."));
        assert_eq!(form.errors().len(), 1);
    }

    #[test]
    fn test_empty_submit_yields_three_ordered_errors() {
        let mut form = FormValidator::new();
        let err = form.submit().unwrap_err();
        let expected = vec![
            "Error: firstName must have at least 5 characters.".to_string(),
            "Error: lastName is a required field.".to_string(),
            "Error: email must be a valid email address.".to_string(),
        ];
        assert_eq!(err.error_lines(), expected);
        assert_eq!(form.error_lines(), expected);
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_error_items_carry_field_and_marker() {
        let mut form = FormValidator::new();
        form.set_field(Field::Email, "jimmy");
        form.set_field(Field::FirstName, "Bill");
        let items = form.error_items();
        assert_eq!(
            items.iter().map(|item| item.field).collect::<Vec<_>>(),
            vec![Field::FirstName, Field::Email]
        );
        assert!(items.iter().all(|item| item.marker == ERROR_MARKER));
        assert_eq!(items[1].text, "Error: email must be a valid email address.");
    }

    #[test]
    fn test_submit_missing_email_yields_one_error() {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, "Jimmy");
        form.set_field(Field::LastName, "Carr");
        let err = form.submit().unwrap_err();
        assert_eq!(err.fields(), vec![Field::Email]);
        assert_eq!(form.error_lines(), vec!["Error: email must be a valid email address.".to_string()]);
    }

    #[test]
    fn test_submit_missing_last_name_yields_one_error() {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, "Jimmy");
        form.set_field(Field::Email, "jimmy@carr.com");
        assert!(form.submit().is_err());
        assert_eq!(form.error_lines(), vec!["Error: lastName is a required field.".to_string()]);
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let mut form = FormValidator::new();
        form.set_field(Field::FirstName, "Bill");
        form.set_field(Field::Message, "hello");
        assert!(form.submit().is_err());
        assert_eq!(form.value(Field::FirstName), "Bill");
        assert_eq!(form.value(Field::Message), "hello");
    }

    #[test]
    fn test_valid_submit_without_message() {
        let mut form = filled("Jimmy", "Carr", "jimmy@carr.com", "");
        let submission = form.submit().unwrap();
        assert_eq!(submission.message, None);
        assert_eq!(submission.display_items().len(), 3);
        assert!(form.is_submitted());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_valid_submit_with_message() {
        let mut form = filled("Jimmy", "Carr", "jimmy@carr.com", "Jimmy Carr is a comedian.");
        let submission = form.submit().unwrap();
        assert_eq!(submission.message.as_deref(), Some("Jimmy Carr is a comedian."));
        assert_eq!(submission.display_items().len(), 4);
    }

    #[test]
    fn test_edit_after_submit_returns_to_editing() {
        let mut form = filled("Jimmy", "Carr", "jimmy@carr.com", "");
        form.submit().unwrap();
        form.set_field(Field::Message, "P.S.");
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert!(form.submission().is_none());

        let submission = form.submit().unwrap();
        assert_eq!(submission.message.as_deref(), Some("P.S."));
    }

    #[test]
    fn test_errors_never_cover_passing_fields() {
        let mut form = FormValidator::new();
        assert!(form.submit().is_err());
        form.set_field(Field::LastName, "Carr");
        for field in form.errors().keys() {
            assert!(rules::validate_field(*field, form.value(*field)).is_some());
        }
        assert_eq!(form.errors().len(), 2);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut form = FormValidator::new();
        form.set_field_by_name("lastName", "Carr").unwrap();
        assert_eq!(form.value(Field::LastName), "Carr");
        assert!(form.set_field_by_name("phone", "555").is_err());
    }

    #[test]
    fn test_with_values_defers_validation() {
        let form = FormValidator::with_values(FormValues {
            first_name: "Bo".to_string(),
            ..Default::default()
        });
        assert!(form.errors().is_empty());
        assert_eq!(form.value(Field::FirstName), "Bo");
    }

    #[test]
    fn test_reset() {
        let mut form = filled("Jimmy", "Carr", "jimmy@carr.com", "");
        form.submit().unwrap();
        form.reset();
        assert!(!form.is_submitted());
        assert_eq!(form.values(), &FormValues::default());
    }
}

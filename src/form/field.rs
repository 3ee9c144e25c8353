//! Contact form fields

use serde::{Deserialize, Serialize};

/// One named piece of user input.
///
/// Declaration order is the display order, and `Ord` follows it, so error
/// maps keyed by `Field` iterate firstName → lastName → email → message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Message];

    /// Field name as it appears in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label used in the post-submit summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    /// Marker of the read-only element showing this field after submit
    pub fn display_marker(&self) -> &'static str {
        match self {
            Field::FirstName => "firstnameDisplay",
            Field::LastName => "lastnameDisplay",
            Field::Email => "emailDisplay",
            Field::Message => "messageDisplay",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Message)
    }

    /// Input label; required fields carry a trailing `*`
    pub fn label(&self) -> String {
        if self.is_required() {
            format!("{}*", self.summary_label())
        } else {
            self.summary_label().to_string()
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Field::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order_matches_display_order() {
        let mut shuffled = vec![Field::Email, Field::Message, Field::FirstName, Field::LastName];
        shuffled.sort();
        assert_eq!(shuffled, Field::ALL.to_vec());
    }

    #[test]
    fn test_labels_mark_required_fields() {
        let labels: Vec<String> = Field::ALL.iter().map(Field::label).collect();
        assert_eq!(labels, vec!["First Name*", "Last Name*", "Email*", "Message"]);
    }

    #[test]
    fn test_index_round_trip() {
        assert_eq!(Field::from_index(Field::Email.index()), Some(Field::Email));
        assert_eq!(Field::from_index(4), None);
    }

    #[test]
    fn test_serde_uses_camel_case_names() {
        let json = serde_json::to_string(&Field::FirstName).unwrap();
        assert_eq!(json, "\"firstName\"");
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field name to message map reported with validation failures.
///
/// Keys are the JSON names of the offending fields, as the client sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl FieldErrors {
    /// Collects validator failures, keyed by the JSON name each Rust field
    /// has on the wire. `json_names` pairs Rust field names with JSON names;
    /// fields missing from it keep their Rust name.
    pub fn from_validation(
        errors: &validator::ValidationErrors,
        json_names: &[(&str, &str)],
    ) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errors) in errors.field_errors().iter() {
            let message = errors
                .first()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .unwrap_or_else(|| "Validation failed".to_owned());
            let field: &str = field.as_ref();
            let name = json_names
                .iter()
                .find(|(rust, _)| *rust == field)
                .map_or(field, |(_, json)| *json);
            fields.insert(name, message);
        }
        fields
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::from_validation(&errors, &[])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validate(FieldErrors),

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    /// Single-field validation failure.
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field, message);
        Self::Validate(fields)
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validate(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validate(value.into())
    }
}

impl From<FieldErrors> for Error {
    fn from(value: FieldErrors) -> Self {
        Self::Validate(value)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! invalid {
    ($field:literal, $msg:literal $(,)?) => {
        return Err($crate::Error::invalid($field, format!($msg)))
    };
    ($field:literal, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::invalid($field, format!($fmt, $($arg)*)))
    };
}

#[macro_export]
macro_rules! not_found {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::NotFound(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::NotFound(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_fields_use_json_names() {
        let mut errors = validator::ValidationErrors::new();
        errors.add(
            "allergy_notes",
            validator::ValidationError::new("length").with_message("too many".into()),
        );
        errors.add("email", validator::ValidationError::new("email"));

        let fields = FieldErrors::from_validation(&errors, &[("allergy_notes", "allergyNotes")]);

        assert_eq!(fields.get("allergyNotes"), Some("too many"));
        assert_eq!(fields.get("email"), Some("email"));
        assert!(!fields.contains("allergy_notes"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut fields = FieldErrors::new();
        fields.insert("date", "first");
        fields.insert("date", "second");

        assert_eq!(fields.get("date"), Some("first"));
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut fields = FieldErrors::new();
        fields.insert("b", "two");
        fields.insert("a", "one");

        assert_eq!(fields.to_string(), "a: one, b: two");
        assert_eq!(
            Error::Validate(fields).to_string(),
            "validation failed: a: one, b: two"
        );
    }

    #[test]
    fn invalid_macro_returns_validation_error() {
        fn check(days: u32) -> Result<u32> {
            if days > 14 {
                crate::invalid!("days", "must be at most 14, got {}", days);
            }
            Ok(days)
        }

        let err = check(20).unwrap_err();
        assert_eq!(
            err.field_errors().and_then(|f| f.get("days")),
            Some("must be at most 14, got 20")
        );
        assert_eq!(check(3).unwrap(), 3);
    }
}

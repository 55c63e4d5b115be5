//! Per-field form validation results.
//!
//! # Responsibility
//! - Collect field-level messages produced by `RecordData::validate`.
//! - Provide shared format checks (mobile number, email shape).
//!
//! # Invariants
//! - A `FieldErrors` returned as `Err` is never empty.
//! - At most one message is kept per field; the first one wins.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static MOBILE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(09|\+639)\d{9}$").expect("valid mobile number regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"));

/// Field name → user-facing message, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field` unless one is already present.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Records `message` when `value` is blank after trimming.
    pub fn require(&mut self, field: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Converts the collected messages into a validation result.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl Error for FieldErrors {}

/// Local mobile number: `09XXXXXXXXX` or `+639XXXXXXXXX`.
pub fn is_valid_mobile_number(value: &str) -> bool {
    MOBILE_NUMBER_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, is_valid_mobile_number, FieldErrors};

    #[test]
    fn mobile_number_accepts_local_and_international_forms() {
        assert!(is_valid_mobile_number("09171234567"));
        assert!(is_valid_mobile_number("+639171234567"));
        assert!(!is_valid_mobile_number("0917123456"));
        assert!(!is_valid_mobile_number("08171234567"));
        assert!(!is_valid_mobile_number("0917 123 4567"));
    }

    #[test]
    fn email_requires_at_and_dot() {
        assert!(is_valid_email("juan.delacruz@example.com"));
        assert!(!is_valid_email("juan@example"));
        assert!(!is_valid_email("juan example.com"));
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.require("first_name", "  ", "First name is required.");
        errors.add("first_name", "other");
        assert_eq!(errors.get("first_name"), Some("First name is required."));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}

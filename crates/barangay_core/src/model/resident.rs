//! Resident (person demographics) record kind.
//!
//! # Invariants
//! - `birth_date` is a calendar date without time zone.
//! - `contact_number` follows the local mobile format when validated.

use crate::model::record::{Record, RecordData, RecordKind};
use crate::model::validation::{is_valid_email, is_valid_mobile_number, FieldErrors};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub type ResidentRecord = Record<Resident>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CivilStatus {
    Single,
    Married,
    Widowed,
    Separated,
    Annulled,
}

/// Resident domain fields. Registration date is the record's `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    /// e.g. `Jr.`, `III`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub civil_status: CivilStatus,
    pub address: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub household_id: String,
    pub is_voter: bool,
}

impl Resident {
    /// `First Middle Last Suffix`, skipping absent parts.
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
            self.suffix.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Table form: `Last, First M.`
    pub fn display_name(&self) -> String {
        let initial = self
            .middle_name
            .as_deref()
            .and_then(|middle| middle.trim().chars().next())
            .map(|c| format!(" {c}."))
            .unwrap_or_default();
        format!("{}, {}{initial}", self.last_name, self.first_name)
    }

    /// Completed years of age on `today`. Returns 0 for future birth dates.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_on(self.birth_date, today)
    }
}

/// Completed years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    if today < birth_date {
        return 0;
    }
    let mut years = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

impl RecordData for Resident {
    const KIND: RecordKind = RecordKind::Residents;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.address.as_str(),
        ];
        fields.extend(self.email.as_deref());
        fields
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("first_name", &self.first_name, "First name is required.");
        errors.require("last_name", &self.last_name, "Last name is required.");
        errors.require("address", &self.address, "Address is required.");

        let contact = self.contact_number.trim();
        if contact.is_empty() {
            errors.add("contact_number", "Contact number is required.");
        } else if !is_valid_mobile_number(contact) {
            errors.add("contact_number", "Invalid Philippine mobile number.");
        }

        if let Some(email) = self.email.as_deref().map(str::trim) {
            if !email.is_empty() && !is_valid_email(email) {
                errors.add("email", "Invalid email format.");
            }
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::{age_on, CivilStatus, Gender, Resident};
    use crate::model::record::RecordData;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn sample() -> Resident {
        Resident {
            first_name: "Maria".to_string(),
            middle_name: Some("Clara".to_string()),
            last_name: "Santos".to_string(),
            suffix: None,
            birth_date: date(1992, 8, 22),
            gender: Gender::Female,
            civil_status: CivilStatus::Single,
            address: "456 Bonifacio Ave.".to_string(),
            contact_number: "09187654321".to_string(),
            email: None,
            household_id: "hh-002".to_string(),
            is_voter: true,
        }
    }

    #[test]
    fn age_counts_completed_years_only() {
        let birth = date(1990, 5, 15);
        assert_eq!(age_on(birth, date(2024, 5, 14)), 33);
        assert_eq!(age_on(birth, date(2024, 5, 15)), 34);
        assert_eq!(age_on(birth, date(1989, 1, 1)), 0);
    }

    #[test]
    fn display_name_uses_middle_initial() {
        assert_eq!(sample().display_name(), "Santos, Maria C.");
        assert_eq!(sample().full_name(), "Maria Clara Santos");
    }

    #[test]
    fn missing_email_is_not_a_search_field() {
        let resident = sample();
        let fields = resident.search_fields();
        assert_eq!(fields, vec!["Maria", "Santos", "456 Bonifacio Ave."]);
    }

    #[test]
    fn validate_reports_contact_format_and_email_shape() {
        let mut resident = sample();
        resident.contact_number = "12345".to_string();
        resident.email = Some("not-an-email".to_string());
        resident.first_name = " ".to_string();

        let errors = resident.validate().unwrap_err();
        assert_eq!(
            errors.get("contact_number"),
            Some("Invalid Philippine mobile number.")
        );
        assert_eq!(errors.get("email"), Some("Invalid email format."));
        assert_eq!(errors.get("first_name"), Some("First name is required."));
    }

    #[test]
    fn gender_serializes_with_display_value() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["birthDate"], "1992-08-22");
        assert!(json.get("email").is_none());
    }
}

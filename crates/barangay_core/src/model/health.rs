//! Health encounter record kind.

use crate::model::record::{Record, RecordData, RecordKind};
use crate::model::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type HealthRecordEntry = Record<HealthRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    pub resident_id: String,
    /// Patient name.
    pub resident_name: String,
    pub checkup_date: DateTime<Utc>,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl HealthRecord {
    pub fn is_vaccination(&self) -> bool {
        self.diagnosis.trim().eq_ignore_ascii_case("vaccination")
    }
}

impl RecordData for HealthRecord {
    const KIND: RecordKind = RecordKind::Health;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.resident_name.as_str(),
            self.diagnosis.as_str(),
            self.treatment.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(
            "resident_name",
            &self.resident_name,
            "Patient name is required.",
        );
        errors.require("diagnosis", &self.diagnosis, "Diagnosis is required.");
        errors.require("treatment", &self.treatment, "Treatment is required.");
        errors.into_result()
    }
}

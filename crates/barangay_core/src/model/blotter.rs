//! Blotter (Katarungang Pambarangay dispute case) record kind.
//!
//! # Invariants
//! - Status changes are unrestricted: any status may follow any other.
//! - Settled cases carry settlement details once validated.

use crate::model::record::{Record, RecordData, RecordKind};
use crate::model::validation::FieldErrors;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type CaseRecord = Record<LuponCase>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseStatus {
    Filed,
    Mediation,
    Conciliation,
    #[serde(rename = "Amicably Settled")]
    Settled,
    Dismissed,
    #[serde(rename = "Certified for Court Action")]
    CertifiedForCourt,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 6] = [
        CaseStatus::Filed,
        CaseStatus::Mediation,
        CaseStatus::Conciliation,
        CaseStatus::Settled,
        CaseStatus::Dismissed,
        CaseStatus::CertifiedForCourt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Filed => "Filed",
            Self::Mediation => "Mediation",
            Self::Conciliation => "Conciliation",
            Self::Settled => "Amicably Settled",
            Self::Dismissed => "Dismissed",
            Self::CertifiedForCourt => "Certified for Court Action",
        }
    }

    /// Filed, in mediation, or in conciliation.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Filed | Self::Mediation | Self::Conciliation)
    }
}

impl Display for CaseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuponCase {
    /// Human-facing case number, e.g. `BMS-2023-001`.
    pub case_number: String,
    pub complainant: String,
    pub respondent: String,
    pub nature_of_complaint: String,
    pub date_filed: DateTime<Utc>,
    pub narrative: String,
    pub status: CaseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_taken: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settlement_details: Option<String>,
}

/// Suggested case number for a new complaint: `BMS-{year}-{last 4 ms digits}`.
///
/// Not guaranteed unique; callers may edit it before filing.
pub fn suggest_case_number(now: DateTime<Utc>) -> String {
    let millis = now.timestamp_millis().rem_euclid(10_000);
    format!("BMS-{}-{millis:04}", now.year())
}

impl RecordData for LuponCase {
    const KIND: RecordKind = RecordKind::Blotter;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.case_number.as_str(),
            self.complainant.as_str(),
            self.respondent.as_str(),
            self.nature_of_complaint.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("case_number", &self.case_number, "Case number is required.");
        errors.require(
            "complainant",
            &self.complainant,
            "Complainant name is required.",
        );
        errors.require(
            "respondent",
            &self.respondent,
            "Respondent name is required.",
        );
        errors.require(
            "nature_of_complaint",
            &self.nature_of_complaint,
            "Nature of complaint is required.",
        );
        errors.require("narrative", &self.narrative, "Narrative is required.");

        if self.status == CaseStatus::Settled {
            errors.require(
                "settlement_details",
                self.settlement_details.as_deref().unwrap_or_default(),
                "Settlement details are required for settled cases.",
            );
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::{suggest_case_number, CaseStatus, LuponCase};
    use crate::model::record::RecordData;
    use chrono::{TimeZone, Utc};

    fn settled_without_details() -> LuponCase {
        LuponCase {
            case_number: "BMS-2023-009".to_string(),
            complainant: "Maria Santos".to_string(),
            respondent: "John Doe".to_string(),
            nature_of_complaint: "Unpaid Debt".to_string(),
            date_filed: Utc.with_ymd_and_hms(2023, 11, 1, 15, 30, 0).unwrap(),
            narrative: "Debt of PHP 5,000.00 unpaid.".to_string(),
            status: CaseStatus::Settled,
            action_taken: None,
            settlement_details: None,
        }
    }

    #[test]
    fn settled_case_requires_settlement_details() {
        let errors = settled_without_details().validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("settlement_details"));

        let mut mediated = settled_without_details();
        mediated.status = CaseStatus::Mediation;
        assert!(mediated.validate().is_ok());
    }

    #[test]
    fn any_status_can_follow_any_other() {
        let mut case = settled_without_details();
        case.settlement_details = Some("Pay monthly".to_string());
        for next in CaseStatus::ALL {
            case.status = next;
            assert!(case.validate().is_ok(), "status {next} should be accepted");
        }
    }

    #[test]
    fn suggested_case_number_uses_year_and_millis_suffix() {
        let now = Utc.timestamp_millis_opt(1_700_000_001_234).unwrap();
        assert_eq!(suggest_case_number(now), "BMS-2023-1234");
    }

    #[test]
    fn status_wire_values_match_display_labels() {
        let json = serde_json::to_value(CaseStatus::CertifiedForCourt).unwrap();
        assert_eq!(json, "Certified for Court Action");
        assert_eq!(CaseStatus::Settled.to_string(), "Amicably Settled");
    }
}

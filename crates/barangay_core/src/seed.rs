//! Fixed starting lists for every record kind.
//!
//! Lists are returned in their display order. Ids use the readable
//! `{prefix}-00n` form, so stores allocating with `SequentialIds` should
//! start past the seeded range.

use crate::model::blotter::{CaseRecord, CaseStatus, LuponCase};
use crate::model::document::{Document, DocumentRecord, DocumentStatus, DocumentType};
use crate::model::finance::{Transaction, TransactionRecord, TransactionType};
use crate::model::health::{HealthRecord, HealthRecordEntry};
use crate::model::record::Record;
use crate::model::resident::{CivilStatus, Gender, Resident, ResidentRecord};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("seed timestamps are valid calendar dates")
}

fn born(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed birth dates are valid calendar dates")
}

#[allow(clippy::too_many_arguments)]
fn resident(
    first_name: &str,
    middle_name: Option<&str>,
    last_name: &str,
    suffix: Option<&str>,
    birth_date: NaiveDate,
    gender: Gender,
    civil_status: CivilStatus,
    address: &str,
    contact_number: &str,
    email: Option<&str>,
    household_id: &str,
    is_voter: bool,
) -> Resident {
    Resident {
        first_name: first_name.to_string(),
        middle_name: middle_name.map(str::to_string),
        last_name: last_name.to_string(),
        suffix: suffix.map(str::to_string),
        birth_date,
        gender,
        civil_status,
        address: address.to_string(),
        contact_number: contact_number.to_string(),
        email: email.map(str::to_string),
        household_id: household_id.to_string(),
        is_voter,
    }
}

pub fn residents() -> Vec<ResidentRecord> {
    vec![
        Record::new(
            "res-001",
            at(2022, 1, 10, 10, 0),
            resident(
                "Juan",
                None,
                "Dela Cruz",
                None,
                born(1990, 5, 15),
                Gender::Male,
                CivilStatus::Married,
                "123 Rizal St.",
                "09171234567",
                Some("juan.delacruz@example.com"),
                "hh-001",
                true,
            ),
        ),
        Record::new(
            "res-002",
            at(2022, 2, 20, 11, 30),
            resident(
                "Maria",
                Some("Clara"),
                "Santos",
                None,
                born(1992, 8, 22),
                Gender::Female,
                CivilStatus::Single,
                "456 Bonifacio Ave.",
                "09187654321",
                None,
                "hh-002",
                true,
            ),
        ),
        Record::new(
            "res-003",
            at(2023, 3, 5, 14, 0),
            resident(
                "Andres",
                None,
                "Garcia",
                None,
                born(1985, 11, 30),
                Gender::Male,
                CivilStatus::Widowed,
                "789 Mabini Blvd.",
                "09201112233",
                Some("andres.garcia@example.com"),
                "hh-003",
                false,
            ),
        ),
        Record::new(
            "res-004",
            at(2023, 4, 12, 9, 0),
            resident(
                "Elena",
                None,
                "Reyes",
                None,
                born(2001, 2, 14),
                Gender::Female,
                CivilStatus::Single,
                "101 Aguinaldo Highway",
                "09215556677",
                None,
                "hh-004",
                true,
            ),
        ),
        Record::new(
            "res-005",
            at(2023, 5, 18, 16, 20),
            resident(
                "Pedro",
                Some("San"),
                "Gonzales",
                Some("Jr."),
                born(1978, 7, 1),
                Gender::Male,
                CivilStatus::Married,
                "222 Luna St.",
                "09228889900",
                None,
                "hh-001",
                true,
            ),
        ),
    ]
}

/// The pending business permit is issued at `now`.
pub fn documents(now: DateTime<Utc>) -> Vec<DocumentRecord> {
    let document = |resident_id: &str, name: &str, document_type, purpose: &str, status| Document {
        resident_id: resident_id.to_string(),
        resident_name: name.to_string(),
        document_type,
        purpose: purpose.to_string(),
        status,
    };

    vec![
        Record::new(
            "doc-001",
            at(2023, 10, 15, 9, 0),
            document(
                "res-001",
                "Juan Dela Cruz",
                DocumentType::BarangayClearance,
                "For local employment",
                DocumentStatus::Approved,
            ),
        ),
        Record::new(
            "doc-002",
            at(2023, 10, 16, 11, 20),
            document(
                "res-002",
                "Maria Santos",
                DocumentType::CertificateOfResidency,
                "Bank requirement",
                DocumentStatus::Approved,
            ),
        ),
        Record::new(
            "doc-003",
            now,
            document(
                "res-005",
                "Pedro Gonzales Jr.",
                DocumentType::BusinessPermit,
                "Sari-sari store",
                DocumentStatus::Pending,
            ),
        ),
    ]
}

pub fn cases() -> Vec<CaseRecord> {
    let filed = |case_number: &str,
                 complainant: &str,
                 respondent: &str,
                 nature: &str,
                 date_filed: DateTime<Utc>,
                 narrative: &str,
                 status: CaseStatus| LuponCase {
        case_number: case_number.to_string(),
        complainant: complainant.to_string(),
        respondent: respondent.to_string(),
        nature_of_complaint: nature.to_string(),
        date_filed,
        narrative: narrative.to_string(),
        status,
        action_taken: None,
        settlement_details: None,
    };

    let debt_filed = at(2023, 11, 1, 15, 30);
    let disturbance_filed = at(2023, 11, 5, 22, 0);
    let injuries_filed = at(2023, 11, 10, 8, 0);

    vec![
        Record::new(
            "kp-case-001",
            debt_filed,
            LuponCase {
                action_taken: Some(
                    "First mediation session held. Parties agreed to a payment plan.".to_string(),
                ),
                settlement_details: Some(
                    "Respondent to pay PHP 1,000.00 monthly for 5 months starting December 2023."
                        .to_string(),
                ),
                ..filed(
                    "BMS-2023-001",
                    "Maria Santos",
                    "John Doe",
                    "Unpaid Debt",
                    debt_filed,
                    "Respondent failed to pay a debt of PHP 5,000.00 which was due last month.",
                    CaseStatus::Settled,
                )
            },
        ),
        Record::new(
            "kp-case-002",
            disturbance_filed,
            LuponCase {
                action_taken: Some(
                    "Summons issued to both parties for a mediation hearing next week."
                        .to_string(),
                ),
                ..filed(
                    "BMS-2023-002",
                    "Andres Garcia",
                    "Jane Smith",
                    "Public Disturbance",
                    disturbance_filed,
                    "Respondent was playing loud music late at night, disturbing the neighbors.",
                    CaseStatus::Mediation,
                )
            },
        ),
        Record::new(
            "kp-case-003",
            injuries_filed,
            LuponCase {
                action_taken: Some(
                    "Mediation and Conciliation failed. Certificate to File Action was issued to the complainant."
                        .to_string(),
                ),
                ..filed(
                    "BMS-2023-003",
                    "Juan Dela Cruz",
                    "Peter Jones",
                    "Slight Physical Injuries",
                    injuries_filed,
                    "A heated argument led to a physical altercation where the complainant sustained minor bruises.",
                    CaseStatus::CertifiedForCourt,
                )
            },
        ),
    ]
}

pub fn health_records() -> Vec<HealthRecordEntry> {
    let entry = |id: &str,
                 resident_id: &str,
                 name: &str,
                 checkup_date: DateTime<Utc>,
                 diagnosis: &str,
                 treatment: &str,
                 notes: Option<&str>| {
        Record::new(
            id,
            checkup_date,
            HealthRecord {
                resident_id: resident_id.to_string(),
                resident_name: name.to_string(),
                checkup_date,
                diagnosis: diagnosis.to_string(),
                treatment: treatment.to_string(),
                notes: notes.map(str::to_string),
            },
        )
    };

    vec![
        entry(
            "health-001",
            "res-002",
            "Maria Santos",
            at(2023, 11, 2, 10, 0),
            "Common Cold",
            "Prescribed Paracetamol and rest.",
            Some("Patient advised to drink plenty of fluids."),
        ),
        entry(
            "health-002",
            "res-003",
            "Andres Garcia",
            at(2023, 11, 8, 14, 30),
            "Hypertension",
            "Prescribed Amlodipine. Follow-up checkup in 2 weeks.",
            Some("Blood pressure was 140/90."),
        ),
        entry(
            "health-003",
            "res-004",
            "Elena Reyes",
            at(2023, 11, 12, 9, 15),
            "Vaccination",
            "Administered second dose of flu vaccine.",
            None,
        ),
    ]
}

pub fn transactions() -> Vec<TransactionRecord> {
    let txn = |id: &str, date: DateTime<Utc>, description: &str, kind, amount, category: &str| {
        Record::new(
            id,
            date,
            Transaction {
                date,
                description: description.to_string(),
                kind,
                amount,
                category: category.to_string(),
            },
        )
    };

    vec![
        txn(
            "txn-001",
            at(2023, 11, 1, 10, 0),
            "Payment for Barangay Clearance",
            TransactionType::Income,
            150.00,
            "Document Fees",
        ),
        txn(
            "txn-002",
            at(2023, 11, 3, 14, 20),
            "Office Supplies Purchase",
            TransactionType::Expense,
            550.75,
            "Office Supplies",
        ),
        txn(
            "txn-003",
            at(2023, 11, 5, 11, 0),
            "Community Hall Rental",
            TransactionType::Income,
            1500.00,
            "Rental Fees",
        ),
        txn(
            "txn-004",
            at(2023, 11, 10, 16, 0),
            "Electricity Bill Payment",
            TransactionType::Expense,
            2500.00,
            "Utilities",
        ),
    ]
}

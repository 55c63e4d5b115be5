//! Issued-document record kind. Issuance date is the record's `created_at`.

use crate::model::record::{Record, RecordData, RecordKind};
use crate::model::validation::FieldErrors;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type DocumentRecord = Record<Document>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Barangay Clearance")]
    BarangayClearance,
    #[serde(rename = "Certificate of Residency")]
    CertificateOfResidency,
    #[serde(rename = "Business Permit")]
    BusinessPermit,
}

impl DocumentType {
    pub const ALL: [DocumentType; 3] = [
        DocumentType::BarangayClearance,
        DocumentType::CertificateOfResidency,
        DocumentType::BusinessPermit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BarangayClearance => "Barangay Clearance",
            Self::CertificateOfResidency => "Certificate of Residency",
            Self::BusinessPermit => "Business Permit",
        }
    }
}

impl Display for DocumentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub resident_id: String,
    /// Recipient name as printed on the document.
    pub resident_name: String,
    pub document_type: DocumentType,
    pub purpose: String,
    pub status: DocumentStatus,
}

impl RecordData for Document {
    const KIND: RecordKind = RecordKind::Documents;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.resident_name.as_str(),
            self.document_type.label(),
            self.purpose.as_str(),
        ]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(
            "resident_name",
            &self.resident_name,
            "Recipient name is required.",
        );
        errors.require("purpose", &self.purpose, "Purpose is required.");
        errors.into_result()
    }
}

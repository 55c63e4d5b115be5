use crate::model::document::{DocumentRecord, DocumentStatus, DocumentType};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Approved documents issued in `now`'s calendar month.
    pub approved_this_month: usize,
    /// Counts indexed in `DocumentType::ALL` order.
    pub by_type: [usize; 3],
}

impl DocumentStats {
    pub fn compute(records: &[DocumentRecord], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            match record.data.status {
                DocumentStatus::Pending => stats.pending += 1,
                DocumentStatus::Approved => {
                    stats.approved += 1;
                    if same_month(record.created_at, now) {
                        stats.approved_this_month += 1;
                    }
                }
                DocumentStatus::Rejected => stats.rejected += 1,
            }
            stats.by_type[type_index(record.data.document_type)] += 1;
        }
        stats
    }

    pub fn count_of(&self, document_type: DocumentType) -> usize {
        self.by_type[type_index(document_type)]
    }
}

fn type_index(document_type: DocumentType) -> usize {
    match document_type {
        DocumentType::BarangayClearance => 0,
        DocumentType::CertificateOfResidency => 1,
        DocumentType::BusinessPermit => 2,
    }
}

fn same_month(at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    at.year() == now.year() && at.month() == now.month()
}

//! Finance ledger transaction record kind.
//!
//! # Invariants
//! - `amount` is a positive, finite peso value; direction comes from `kind`.

use crate::model::record::{Record, RecordData, RecordKind};
use crate::model::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type TransactionRecord = Record<Transaction>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: DateTime<Utc>,
    pub description: String,
    /// Serialized as `type` to match the ledger's external naming.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: f64,
    pub category: String,
}

impl RecordData for Transaction {
    const KIND: RecordKind = RecordKind::Finance;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.category.as_str()]
    }

    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require(
            "description",
            &self.description,
            "Description is required.",
        );
        errors.require("category", &self.category, "Category is required.");
        if !self.amount.is_finite() || self.amount <= 0.0 {
            errors.add("amount", "Amount must be greater than zero.");
        }
        errors.into_result()
    }
}

/// Ledger view ordered by transaction date, newest first.
///
/// Ties keep their store order.
pub fn by_date_desc(records: &[TransactionRecord]) -> Vec<TransactionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.data.date.cmp(&a.data.date));
    sorted
}

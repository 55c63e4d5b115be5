//! Generic record envelope shared by every record kind.
//!
//! # Responsibility
//! - Define the store-assigned identity (`RecordId`, `created_at`) wrapped
//!   around each kind's domain fields.
//! - Declare the per-kind contract (`RecordData`) used by store, search,
//!   validation and logging.
//!
//! # Invariants
//! - `id` is unique within one store and never reused or changed.
//! - `created_at` is assigned once by the store and never changes.
//! - Domain fields are replaced wholesale on update; there is no patching.

use crate::model::validation::FieldErrors;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Store-assigned record identifier, e.g. `res-7f3a...` or `kp-case-001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed set of record kinds held by the barangay stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Residents,
    Documents,
    Blotter,
    Health,
    Finance,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Residents,
        RecordKind::Documents,
        RecordKind::Blotter,
        RecordKind::Health,
        RecordKind::Finance,
    ];

    /// Stable identifier prefix used by id allocation.
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Residents => "res",
            Self::Documents => "doc",
            Self::Blotter => "kp-case",
            Self::Health => "health",
            Self::Finance => "txn",
        }
    }

    /// Short lowercase label used in log events and CLI arguments.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residents => "residents",
            Self::Documents => "documents",
            Self::Blotter => "blotter",
            Self::Health => "health",
            Self::Finance => "finance",
        }
    }

    /// Prompt shown before a destructive delete is confirmed.
    pub fn delete_prompt(self) -> &'static str {
        match self {
            Self::Residents => {
                "Are you sure you want to delete this resident record? This action cannot be undone."
            }
            Self::Documents => "Are you sure you want to delete this document record?",
            Self::Blotter => "Are you sure you want to delete this case file?",
            Self::Health => "Are you sure you want to delete this health record?",
            Self::Finance => "Are you sure you want to delete this transaction?",
        }
    }

    /// Parses a CLI/user label. Accepts singular and plural forms.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "residents" | "resident" => Some(Self::Residents),
            "documents" | "document" | "docs" => Some(Self::Documents),
            "blotter" | "cases" | "case" => Some(Self::Blotter),
            "health" => Some(Self::Health),
            "finance" | "transactions" | "transaction" => Some(Self::Finance),
            _ => None,
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain payload contract implemented by each record kind.
pub trait RecordData:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Kind tag for id prefixes, prompts and log events.
    const KIND: RecordKind;

    /// Fields matched by the free-text filter, in haystack order.
    fn search_fields(&self) -> Vec<&str>;

    /// Form-level checks run before any store call.
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// One stored record: store-assigned identity plus domain fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: DeserializeOwned"))]
pub struct Record<T> {
    pub id: RecordId,
    /// Assigned by the store at creation (registration/issuance time).
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: RecordData> Record<T> {
    /// Assembles a record. Only stores and seed fixtures should call this.
    pub fn new(id: impl Into<RecordId>, created_at: DateTime<Utc>, data: T) -> Self {
        Self {
            id: id.into(),
            created_at,
            data,
        }
    }

    pub fn kind(&self) -> RecordKind {
        T::KIND
    }
}

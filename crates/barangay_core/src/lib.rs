//! Core domain logic for barangay record keeping.
//! This crate is the single source of truth for record invariants.

pub mod briefing;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod stats;

pub use briefing::{
    BriefingError, BriefingProvider, DailyBriefing, GeminiProvider, UnconfiguredProvider,
    FALLBACK_BRIEFING,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_dotenv, AppConfig, ConfigError};
pub use dashboard::{Barangay, DashboardSummary};
pub use logging::{default_log_level, init_logging, logging_status, LogSink, LoggingError};
pub use model::blotter::{CaseRecord, CaseStatus, LuponCase};
pub use model::document::{Document, DocumentRecord, DocumentStatus, DocumentType};
pub use model::finance::{Transaction, TransactionRecord, TransactionType};
pub use model::health::{HealthRecord, HealthRecordEntry};
pub use model::record::{Record, RecordData, RecordId, RecordKind};
pub use model::resident::{CivilStatus, Gender, Resident, ResidentRecord};
pub use model::validation::FieldErrors;
pub use render::{
    print_job, render_case_file, render_document, HtmlFileTarget, Letterhead, PrintError,
    PrintJob, PrintTarget,
};
pub use repo::{MockStore, RecordRepository, StoreError, StoreOptions, StoreResult};
pub use search::filter_records;
pub use service::{AlwaysConfirm, Confirm, DeleteOutcome, RecordService, ServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

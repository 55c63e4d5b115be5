//! Barangay-wide context and the command center summary.
//!
//! # Responsibility
//! - Own one service (and store) per record kind, constructed explicitly.
//! - Aggregate per-kind statistics into the dashboard's headline figures.
//!
//! # Invariants
//! - There is no global state; callers pass a `&Barangay` wherever records
//!   are needed.
//! - `DashboardSummary::collect` reads each list once and is otherwise pure.

use crate::model::blotter::LuponCase;
use crate::model::document::{Document, DocumentType};
use crate::model::finance::Transaction;
use crate::model::health::HealthRecord;
use crate::model::resident::Resident;
use crate::repo::{MockStore, StoreOptions};
use crate::seed;
use crate::service::RecordService;
use crate::stats::{
    monthly_cashflow, CaseStats, DocumentStats, FinanceSummary, HealthStats, MonthlyCashflow,
    ResidentStats,
};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

/// Months shown on the dashboard cashflow chart.
pub const CASHFLOW_MONTHS: u32 = 6;

pub struct Barangay {
    pub residents: RecordService<Resident>,
    pub documents: RecordService<Document>,
    pub cases: RecordService<LuponCase>,
    pub health: RecordService<HealthRecord>,
    pub finance: RecordService<Transaction>,
}

impl Barangay {
    /// Empty stores sharing `options`.
    pub fn empty(options: StoreOptions) -> Self {
        Self {
            residents: RecordService::new(MockStore::new(options.clone())),
            documents: RecordService::new(MockStore::new(options.clone())),
            cases: RecordService::new(MockStore::new(options.clone())),
            health: RecordService::new(MockStore::new(options.clone())),
            finance: RecordService::new(MockStore::new(options)),
        }
    }

    /// Stores holding the seed lists immediately.
    pub fn seeded(options: StoreOptions) -> Self {
        let now = options.clock.now();
        Self {
            residents: RecordService::new(MockStore::with_records(
                seed::residents(),
                options.clone(),
            )),
            documents: RecordService::new(MockStore::with_records(
                seed::documents(now),
                options.clone(),
            )),
            cases: RecordService::new(MockStore::with_records(seed::cases(), options.clone())),
            health: RecordService::new(MockStore::with_records(
                seed::health_records(),
                options.clone(),
            )),
            finance: RecordService::new(MockStore::with_records(seed::transactions(), options)),
        }
    }

    /// Starts each store's simulated initial fetch and returns at once.
    ///
    /// The five fetches run concurrently; `ready` resolves after one latency
    /// period. Must be called within a Tokio runtime.
    pub fn open(options: StoreOptions) -> Self {
        let now = options.clock.now();
        info!(
            "event=barangay_open module=dashboard status=loading latency_ms={}",
            options.latency.as_millis()
        );
        Self {
            residents: RecordService::new(MockStore::open(seed::residents(), options.clone())),
            documents: RecordService::new(MockStore::open(seed::documents(now), options.clone())),
            cases: RecordService::new(MockStore::open(seed::cases(), options.clone())),
            health: RecordService::new(MockStore::open(seed::health_records(), options.clone())),
            finance: RecordService::new(MockStore::open(seed::transactions(), options)),
        }
    }

    /// Waits until every store's initial fetch has landed.
    pub async fn ready(&self) {
        tokio::join!(
            self.residents.repository().ready(),
            self.documents.repository().ready(),
            self.cases.repository().ready(),
            self.health.repository().ready(),
            self.finance.repository().ready(),
        );
    }

    /// True while any store has an operation pending.
    pub fn is_loading(&self) -> bool {
        self.residents.is_loading()
            || self.documents.is_loading()
            || self.cases.is_loading()
            || self.health.is_loading()
            || self.finance.is_loading()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub generated_at: DateTime<Utc>,
    pub total_residents: usize,
    /// Cases filed on `generated_at`'s date.
    pub incidents_today: usize,
    /// Business-permit documents on record.
    pub permits_issued: usize,
    pub active_cases: usize,
    pub balance: f64,
    /// `(label, count)` in chart order.
    pub age_groups: Vec<(&'static str, usize)>,
    /// Oldest month first.
    pub cashflow: Vec<MonthlyCashflow>,
    pub residents: ResidentStats,
    pub documents: DocumentStats,
    pub cases: CaseStats,
    pub health: HealthStats,
    pub finance: FinanceSummary,
}

impl DashboardSummary {
    pub async fn collect(barangay: &Barangay, now: DateTime<Utc>) -> Self {
        let residents = barangay.residents.list().await;
        let documents = barangay.documents.list().await;
        let cases = barangay.cases.list().await;
        let health = barangay.health.list().await;
        let transactions = barangay.finance.list().await;

        let resident_stats = ResidentStats::compute(&residents, now);
        let document_stats = DocumentStats::compute(&documents, now);
        let case_stats = CaseStats::compute(&cases, now);
        let finance = FinanceSummary::compute(&transactions);

        Self {
            generated_at: now,
            total_residents: resident_stats.total,
            incidents_today: case_stats.filed_today,
            permits_issued: document_stats.count_of(DocumentType::BusinessPermit),
            active_cases: case_stats.active,
            balance: finance.balance,
            age_groups: resident_stats.age_groups().collect(),
            cashflow: monthly_cashflow(&transactions, now, CASHFLOW_MONTHS),
            residents: resident_stats,
            documents: document_stats,
            cases: case_stats,
            health: HealthStats::compute(&health, now),
            finance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Barangay, DashboardSummary};
    use crate::clock::FixedClock;
    use crate::repo::StoreOptions;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn summary_over_seed_data() {
        let now = Utc.with_ymd_and_hms(2023, 11, 10, 18, 0, 0).unwrap();
        let options = StoreOptions::immediate().with_clock(FixedClock::shared(now));
        let barangay = Barangay::seeded(options);

        let summary = DashboardSummary::collect(&barangay, now).await;
        assert_eq!(summary.total_residents, 5);
        assert_eq!(summary.incidents_today, 1);
        assert_eq!(summary.permits_issued, 1);
        assert_eq!(summary.active_cases, 1);
        assert!((summary.balance + 1400.75).abs() < 1e-9);
        assert_eq!(summary.age_groups.len(), 7);
        assert_eq!(summary.cashflow.len(), 6);
        assert_eq!(summary.cashflow[5].label(), "Nov 2023");
        assert_eq!(summary.health.total, 3);
    }

    #[tokio::test]
    async fn empty_barangay_summarizes_to_zeroes() {
        let barangay = Barangay::empty(StoreOptions::immediate());
        let summary = DashboardSummary::collect(&barangay, Utc::now()).await;
        assert_eq!(summary.total_residents, 0);
        assert_eq!(summary.balance, 0.0);
        assert!(!barangay.is_loading());
    }
}

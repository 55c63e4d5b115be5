use crate::model::blotter::{CaseRecord, CaseStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStats {
    pub total: usize,
    /// Filed, under mediation, or under conciliation.
    pub active: usize,
    pub settled: usize,
    pub dismissed: usize,
    pub certified_for_court: usize,
    /// Cases filed on `now`'s UTC date.
    pub filed_today: usize,
}

impl CaseStats {
    pub fn compute(records: &[CaseRecord], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };

        for record in records {
            let case = &record.data;
            match case.status {
                status if status.is_active() => stats.active += 1,
                CaseStatus::Settled => stats.settled += 1,
                CaseStatus::Dismissed => stats.dismissed += 1,
                CaseStatus::CertifiedForCourt => stats.certified_for_court += 1,
                _ => {}
            }
            if case.date_filed.date_naive() == today {
                stats.filed_today += 1;
            }
        }
        stats
    }
}

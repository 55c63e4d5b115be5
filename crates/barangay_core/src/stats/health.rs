use crate::model::health::HealthRecordEntry;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Width of the "recent checkups" window.
pub const RECENT_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStats {
    pub total: usize,
    /// Checkups strictly after `now - 30 days`.
    pub recent_checkups: usize,
    pub vaccinations: usize,
}

impl HealthStats {
    pub fn compute(records: &[HealthRecordEntry], now: DateTime<Utc>) -> Self {
        let window_start = now - Duration::days(RECENT_WINDOW_DAYS);
        Self {
            total: records.len(),
            recent_checkups: records
                .iter()
                .filter(|record| record.data.checkup_date > window_start)
                .count(),
            vaccinations: records
                .iter()
                .filter(|record| record.data.is_vaccination())
                .count(),
        }
    }
}

use crate::model::resident::{Gender, ResidentRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

/// Population age groups shown on the dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeBucket {
    #[serde(rename = "0-10")]
    UpTo10,
    #[serde(rename = "11-20")]
    From11To20,
    #[serde(rename = "21-30")]
    From21To30,
    #[serde(rename = "31-40")]
    From31To40,
    #[serde(rename = "41-50")]
    From41To50,
    #[serde(rename = "51-60")]
    From51To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeBucket {
    pub const ALL: [AgeBucket; 7] = [
        AgeBucket::UpTo10,
        AgeBucket::From11To20,
        AgeBucket::From21To30,
        AgeBucket::From31To40,
        AgeBucket::From41To50,
        AgeBucket::From51To60,
        AgeBucket::Over60,
    ];

    pub fn for_age(age: u32) -> Self {
        match age {
            0..=10 => Self::UpTo10,
            11..=20 => Self::From11To20,
            21..=30 => Self::From21To30,
            31..=40 => Self::From31To40,
            41..=50 => Self::From41To50,
            51..=60 => Self::From51To60,
            _ => Self::Over60,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UpTo10 => "0-10",
            Self::From11To20 => "11-20",
            Self::From21To30 => "21-30",
            Self::From31To40 => "31-40",
            Self::From41To50 => "41-50",
            Self::From51To60 => "51-60",
            Self::Over60 => "60+",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentStats {
    pub total: usize,
    pub males: usize,
    pub females: usize,
    pub others: usize,
    pub voters: usize,
    /// Distinct household ids.
    pub households: usize,
    /// Counts indexed in `AgeBucket::ALL` order.
    pub age_buckets: [usize; 7],
}

impl ResidentStats {
    pub fn compute(records: &[ResidentRecord], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        let mut households = HashSet::new();

        for record in records {
            let resident = &record.data;
            match resident.gender {
                Gender::Male => stats.males += 1,
                Gender::Female => stats.females += 1,
                Gender::Other => stats.others += 1,
            }
            if resident.is_voter {
                stats.voters += 1;
            }
            households.insert(resident.household_id.as_str());
            stats.age_buckets[AgeBucket::for_age(resident.age_on(today)).index()] += 1;
        }

        stats.households = households.len();
        stats
    }

    pub fn age_count(&self, bucket: AgeBucket) -> usize {
        self.age_buckets[bucket.index()]
    }

    /// `(label, count)` pairs in chart order.
    pub fn age_groups(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        AgeBucket::ALL
            .into_iter()
            .map(|bucket| (bucket.label(), self.age_count(bucket)))
    }
}

#[cfg(test)]
mod tests {
    use super::{AgeBucket, ResidentStats};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    #[test]
    fn bucket_edges_are_inclusive() {
        assert_eq!(AgeBucket::for_age(0), AgeBucket::UpTo10);
        assert_eq!(AgeBucket::for_age(10), AgeBucket::UpTo10);
        assert_eq!(AgeBucket::for_age(11), AgeBucket::From11To20);
        assert_eq!(AgeBucket::for_age(60), AgeBucket::From51To60);
        assert_eq!(AgeBucket::for_age(61), AgeBucket::Over60);
    }

    #[test]
    fn seed_population_splits() {
        let now = Utc.with_ymd_and_hms(2023, 11, 15, 8, 0, 0).unwrap();
        let stats = ResidentStats::compute(&seed::residents(), now);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.males, 3);
        assert_eq!(stats.females, 2);
        assert_eq!(stats.others, 0);
        assert_eq!(stats.voters, 4);
        assert_eq!(stats.households, 4);
        // Ages on 2023-11-15: 33, 31, 37, 22, 45.
        assert_eq!(stats.age_count(AgeBucket::From21To30), 1);
        assert_eq!(stats.age_count(AgeBucket::From31To40), 3);
        assert_eq!(stats.age_count(AgeBucket::From41To50), 1);
        assert_eq!(stats.age_groups().map(|(_, n)| n).sum::<usize>(), 5);
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(ResidentStats::compute(&[], Utc::now()), ResidentStats::default());
    }
}

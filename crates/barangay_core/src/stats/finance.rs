use crate::model::finance::{TransactionRecord, TransactionType};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: String,
    pub income: f64,
    pub expense: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceSummary {
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: f64,
    pub total_expense: f64,
    /// `total_income - total_expense`; may be negative.
    pub balance: f64,
    /// Sorted by category name.
    pub by_category: Vec<CategoryTotal>,
}

impl FinanceSummary {
    pub fn compute(records: &[TransactionRecord]) -> Self {
        let mut summary = Self::default();
        let mut categories: BTreeMap<&str, CategoryTotal> = BTreeMap::new();

        for record in records {
            let txn = &record.data;
            let entry = categories
                .entry(txn.category.as_str())
                .or_insert_with(|| CategoryTotal {
                    category: txn.category.clone(),
                    ..CategoryTotal::default()
                });
            match txn.kind {
                TransactionType::Income => {
                    summary.income_count += 1;
                    summary.total_income += txn.amount;
                    entry.income += txn.amount;
                }
                TransactionType::Expense => {
                    summary.expense_count += 1;
                    summary.total_expense += txn.amount;
                    entry.expense += txn.amount;
                }
            }
        }

        summary.balance = summary.total_income - summary.total_expense;
        summary.by_category = categories.into_values().collect();
        summary
    }
}

/// Income and expense booked in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyCashflow {
    /// Chart label such as `Nov 2023`.
    pub fn label(&self) -> String {
        let name = MONTH_ABBREVIATIONS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("???");
        format!("{name} {}", self.year)
    }
}

/// Cashflow for the `months` calendar months ending with `now`'s month, oldest first.
///
/// Transactions are bucketed by their own `date`, not by `created_at`.
pub fn monthly_cashflow(
    records: &[TransactionRecord],
    now: DateTime<Utc>,
    months: u32,
) -> Vec<MonthlyCashflow> {
    let mut buckets: Vec<MonthlyCashflow> = (0..months)
        .rev()
        .map(|back| {
            let (year, month) = months_before(now.year(), now.month(), back);
            MonthlyCashflow {
                year,
                month,
                income: 0.0,
                expense: 0.0,
            }
        })
        .collect();

    for record in records {
        let txn = &record.data;
        let Some(bucket) = buckets
            .iter_mut()
            .find(|bucket| bucket.year == txn.date.year() && bucket.month == txn.date.month())
        else {
            continue;
        };
        match txn.kind {
            TransactionType::Income => bucket.income += txn.amount,
            TransactionType::Expense => bucket.expense += txn.amount,
        }
    }
    buckets
}

fn months_before(year: i32, month: u32, back: u32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 - back as i32;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::{monthly_cashflow, months_before, FinanceSummary};
    use crate::seed;
    use chrono::{TimeZone, Utc};

    #[test]
    fn seed_ledger_totals() {
        let summary = FinanceSummary::compute(&seed::transactions());

        assert_eq!(summary.income_count, 2);
        assert_eq!(summary.expense_count, 2);
        assert!((summary.total_income - 1650.0).abs() < 1e-9);
        assert!((summary.total_expense - 3050.75).abs() < 1e-9);
        assert!((summary.balance + 1400.75).abs() < 1e-9);

        let categories: Vec<_> = summary
            .by_category
            .iter()
            .map(|total| total.category.as_str())
            .collect();
        assert_eq!(
            categories,
            vec!["Document Fees", "Office Supplies", "Rental Fees", "Utilities"]
        );
    }

    #[test]
    fn month_arithmetic_crosses_year_boundaries() {
        assert_eq!(months_before(2024, 2, 0), (2024, 2));
        assert_eq!(months_before(2024, 2, 2), (2023, 12));
        assert_eq!(months_before(2024, 1, 13), (2022, 12));
    }

    #[test]
    fn cashflow_covers_trailing_months_oldest_first() {
        let now = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
        let flow = monthly_cashflow(&seed::transactions(), now, 6);

        assert_eq!(flow.len(), 6);
        assert_eq!(flow[0].label(), "Aug 2023");
        assert_eq!(flow[5].label(), "Jan 2024");

        let november = &flow[3];
        assert_eq!(november.label(), "Nov 2023");
        assert!((november.income - 1650.0).abs() < 1e-9);
        assert!((november.expense - 3050.75).abs() < 1e-9);
        assert_eq!(flow[4].income, 0.0);
    }
}

//! Plain-text rendering of records and summaries for the terminal.

use barangay_core::model::finance::by_date_desc;
use barangay_core::render::long_date;
use barangay_core::{
    CaseRecord, DashboardSummary, DocumentRecord, HealthRecordEntry, Record, RecordData,
    ResidentRecord, TransactionRecord, TransactionType,
};
use chrono::{DateTime, Utc};

pub fn resident_row(record: &ResidentRecord, now: DateTime<Utc>) -> String {
    let resident = &record.data;
    format!(
        "{:<16} {:<28} {:>3}  {:<7} {:<10} {:<24} {}",
        record.id,
        resident.display_name(),
        resident.age_on(now.date_naive()),
        format!("{:?}", resident.gender),
        format!("{:?}", resident.civil_status),
        resident.address,
        resident.contact_number
    )
}

pub fn document_row(record: &DocumentRecord) -> String {
    let document = &record.data;
    format!(
        "{:<16} {:<26} {:<22} {:<9} {:<20} {}",
        record.id,
        document.document_type.label(),
        document.resident_name,
        format!("{:?}", document.status),
        long_date(record.created_at),
        document.purpose
    )
}

pub fn case_row(record: &CaseRecord) -> String {
    let case = &record.data;
    format!(
        "{:<16} {:<14} {:<36} {:<26} {}",
        record.id,
        case.case_number,
        format!("{} vs {}", case.complainant, case.respondent),
        case.nature_of_complaint,
        case.status.label()
    )
}

pub fn health_row(record: &HealthRecordEntry) -> String {
    let entry = &record.data;
    format!(
        "{:<16} {:<20} {:<18} {}",
        record.id,
        long_date(entry.checkup_date),
        entry.resident_name,
        entry.diagnosis
    )
}

pub fn transaction_row(record: &TransactionRecord) -> String {
    let txn = &record.data;
    let sign = match txn.kind {
        TransactionType::Income => '+',
        TransactionType::Expense => '-',
    };
    format!(
        "{:<16} {:<20} {sign}{:>11.2}  {:<16} {}",
        record.id,
        long_date(txn.date),
        txn.amount,
        txn.category,
        txn.description
    )
}

/// Finance lists read newest transaction date first.
pub fn ledger_view(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    by_date_desc(&records)
}

pub fn print_rows<T: RecordData>(records: &[Record<T>], row: impl Fn(&Record<T>) -> String) {
    if records.is_empty() {
        println!("No records match your search criteria.");
        return;
    }
    for record in records {
        println!("{}", row(record));
    }
    println!("{} record(s)", records.len());
}

pub fn print_summary(summary: &DashboardSummary) {
    println!("Command center overview for {}", long_date(summary.generated_at));
    println!();
    println!("  Total residents   {:>10}", summary.total_residents);
    println!("  Incidents today   {:>10}", summary.incidents_today);
    println!("  Permits issued    {:>10}", summary.permits_issued);
    println!("  Active cases      {:>10}", summary.active_cases);
    println!("  Balance (PHP)     {:>10.2}", summary.balance);
    println!();
    println!(
        "  Residents: {} voters, {} households",
        summary.residents.voters, summary.residents.households
    );
    println!(
        "  Documents: {} pending, {} approved this month",
        summary.documents.pending, summary.documents.approved_this_month
    );
    println!(
        "  Health: {} checkups in the last 30 days, {} vaccinations",
        summary.health.recent_checkups, summary.health.vaccinations
    );
    println!();
    println!("  Population by age");
    for (label, count) in &summary.age_groups {
        println!("    {label:<6} {count:>5}");
    }
    println!();
    println!("  Cashflow");
    for month in &summary.cashflow {
        println!(
            "    {:<9} +{:>10.2}  -{:>10.2}",
            month.label(),
            month.income,
            month.expense
        );
    }
}

use barangay_core::search::matches_term;
use barangay_core::stats::{CaseStats, FinanceSummary, ResidentStats};
use barangay_core::{filter_records, seed, CaseStatus, Gender, TransactionType};
use chrono::{TimeZone, Utc};

#[test]
fn empty_term_is_identity_for_every_kind() {
    let now = Utc::now();
    assert_eq!(filter_records(&seed::residents(), ""), seed::residents());
    assert_eq!(filter_records(&seed::documents(now), ""), seed::documents(now));
    assert_eq!(filter_records(&seed::cases(), ""), seed::cases());
    assert_eq!(filter_records(&seed::health_records(), ""), seed::health_records());
    assert_eq!(filter_records(&seed::transactions(), ""), seed::transactions());
}

#[test]
fn resident_filter_matches_name_address_and_email() {
    let residents = seed::residents();

    let by_email = filter_records(&residents, "EXAMPLE.COM");
    let ids: Vec<_> = by_email.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["res-001", "res-003"]);

    let by_address = filter_records(&residents, "luna st");
    assert_eq!(by_address.len(), 1);
    assert_eq!(by_address[0].data.first_name, "Pedro");

    // Middle names are not searchable.
    assert!(filter_records(&residents, "Clara").is_empty());
}

#[test]
fn filtered_records_all_match_and_filtering_is_idempotent() {
    let cases = seed::cases();
    for term in ["bms-2023", "doe", "injur", "zzz"] {
        let once = filter_records(&cases, term);
        assert!(once.iter().all(|record| matches_term(record, term)));
        assert_eq!(filter_records(&once, term), once);
    }
}

#[test]
fn exclusive_counts_sum_to_list_size() {
    let now = Utc.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap();

    let residents = seed::residents();
    let stats = ResidentStats::compute(&residents, now);
    assert_eq!(stats.males + stats.females + stats.others, residents.len());
    let males = residents
        .iter()
        .filter(|r| r.data.gender == Gender::Male)
        .count();
    assert_eq!(stats.males, males);

    let txns = seed::transactions();
    let finance = FinanceSummary::compute(&txns);
    assert_eq!(finance.income_count + finance.expense_count, txns.len());
    let incomes = txns
        .iter()
        .filter(|t| t.data.kind == TransactionType::Income)
        .count();
    assert_eq!(finance.income_count, incomes);

    let cases = seed::cases();
    let stats = CaseStats::compute(&cases, now);
    assert_eq!(
        stats.active + stats.settled + stats.dismissed + stats.certified_for_court,
        cases.len()
    );
    let settled = cases
        .iter()
        .filter(|c| c.data.status == CaseStatus::Settled)
        .count();
    assert_eq!(stats.settled, settled);
}

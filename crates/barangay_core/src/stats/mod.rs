//! Derived statistics over record lists.
//!
//! # Responsibility
//! - Compute per-kind aggregate counts for list headers and the dashboard.
//!
//! # Invariants
//! - Every function is a pure function of `(records, now)`; nothing is
//!   cached, so callers recompute whenever the list or the clock moves.
//! - Calendar windows (today, this month) use `now`'s UTC date.

pub mod cases;
pub mod documents;
pub mod finance;
pub mod health;
pub mod residents;

pub use cases::CaseStats;
pub use documents::DocumentStats;
pub use finance::{monthly_cashflow, FinanceSummary, MonthlyCashflow};
pub use health::HealthStats;
pub use residents::{AgeBucket, ResidentStats};

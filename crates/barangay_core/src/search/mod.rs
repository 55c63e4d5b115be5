//! Free-text filtering over record lists.
//!
//! # Responsibility
//! - Narrow a kind's list by a user-typed term for list views.
//!
//! # Invariants
//! - Filtering is pure and order-preserving.

pub mod filter;

pub use filter::{filter_records, matches_term};

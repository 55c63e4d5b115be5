//! Domain model for barangay record keeping.
//!
//! # Responsibility
//! - Define the generic record envelope and the five record kinds.
//! - Keep per-kind search fields and form validation next to the data.
//!
//! # Invariants
//! - Every record is identified by a store-assigned `RecordId`.
//! - Deletion is physical; there are no tombstones or versions.

pub mod blotter;
pub mod document;
pub mod finance;
pub mod health;
pub mod record;
pub mod resident;
pub mod validation;

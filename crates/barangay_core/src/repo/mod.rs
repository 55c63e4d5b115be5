//! In-memory record stores standing in for a remote API.
//!
//! # Responsibility
//! - Hold one list per record kind and simulate request latency.
//! - Own identifier and creation-timestamp assignment.
//!
//! # Invariants
//! - Stores never validate domain fields; that is the service layer's job.
//! - `update`/`delete` on an absent id return `StoreError::NotFound` and
//!   leave the list untouched.

pub mod ids;
pub mod mock_store;
pub mod record_repo;

pub use ids::{IdAllocator, SequentialIds, UuidIds};
pub use mock_store::{MockStore, StoreError, StoreOptions, StoreResult, DEFAULT_LATENCY};
pub use record_repo::RecordRepository;

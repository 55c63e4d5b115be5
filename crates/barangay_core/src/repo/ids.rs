//! Identifier allocation policies for mock stores.
//!
//! # Invariants
//! - Allocated ids always start with the kind's prefix followed by `-`.
//! - Stores re-allocate on collision, so policies only need to be
//!   unique with high probability.

use crate::model::record::{RecordId, RecordKind};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces fresh identifiers for newly created records.
pub trait IdAllocator: Send + Sync {
    fn allocate(&self, kind: RecordKind) -> RecordId;
}

/// `{prefix}-{uuid v4 simple}`; the default policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdAllocator for UuidIds {
    fn allocate(&self, kind: RecordKind) -> RecordId {
        RecordId::new(format!("{}-{}", kind.id_prefix(), Uuid::new_v4().simple()))
    }
}

/// `{prefix}-{n:03}` counting up from a start value.
///
/// Readable ids for fixtures and CLI sessions. Collisions with seeded ids
/// are skipped by the store.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdAllocator for SequentialIds {
    fn allocate(&self, kind: RecordKind) -> RecordId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        RecordId::new(format!("{}-{n:03}", kind.id_prefix()))
    }
}

#[cfg(test)]
mod tests {
    use super::{IdAllocator, SequentialIds, UuidIds};
    use crate::model::record::RecordKind;

    #[test]
    fn uuid_ids_carry_kind_prefix() {
        let id = UuidIds.allocate(RecordKind::Blotter);
        assert!(id.as_str().starts_with("kp-case-"));
        assert_ne!(id, UuidIds.allocate(RecordKind::Blotter));
    }

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::starting_at(4);
        assert_eq!(ids.allocate(RecordKind::Residents).as_str(), "res-004");
        assert_eq!(ids.allocate(RecordKind::Finance).as_str(), "txn-005");
    }
}

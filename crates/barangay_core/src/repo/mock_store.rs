//! Generic in-memory record store with simulated I/O latency.
//!
//! # Responsibility
//! - Own one newest-first list of records for a single record kind.
//! - Assign identifiers and creation timestamps on `create`.
//! - Delay every operation by the configured latency before mutating.
//!
//! # Invariants
//! - Identifiers are unique within the list at all times.
//! - `id` and `created_at` never change after creation; `update` replaces
//!   only the domain fields and keeps the record's position.
//! - Once polled, a mutation runs to completion even if the caller drops
//!   its future; it mutates the list exactly once.
//! - Operations are not mutually exclusive; concurrent calls interleave.

use crate::clock::{system_clock, Clock};
use crate::model::record::{Record, RecordData, RecordId, RecordKind};
use crate::repo::ids::{IdAllocator, UuidIds};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;

/// Latency used when no explicit value is configured.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer outcome errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `update`/`delete` targeted an id absent from the list. The list is unchanged.
    NotFound { kind: RecordKind, id: RecordId },
    /// The runtime shut down before the operation task finished.
    Interrupted(RecordKind),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} record not found: {id}"),
            Self::Interrupted(kind) => write!(f, "{kind} store operation was interrupted"),
        }
    }
}

impl Error for StoreError {}

/// Construction options shared by every store instance.
#[derive(Clone)]
pub struct StoreOptions {
    pub latency: Duration,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdAllocator>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            clock: system_clock(),
            ids: Arc::new(UuidIds),
        }
    }
}

impl StoreOptions {
    /// Zero latency; the usual choice in tests.
    pub fn immediate() -> Self {
        Self::default().with_latency(Duration::ZERO)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_ids(mut self, ids: Arc<dyn IdAllocator>) -> Self {
        self.ids = ids;
        self
    }
}

impl std::fmt::Debug for StoreOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreOptions")
            .field("latency", &self.latency)
            .finish_non_exhaustive()
    }
}

struct StoreInner<T> {
    records: RwLock<Vec<Record<T>>>,
    in_flight: Arc<AtomicUsize>,
    /// `true` once the initial fetch has landed.
    loaded: watch::Sender<bool>,
    options: StoreOptions,
}

impl<T: RecordData> StoreInner<T> {
    async fn simulate_latency(&self) {
        if !self.options.latency.is_zero() {
            tokio::time::sleep(self.options.latency).await;
        }
    }

    fn fresh_id(&self, records: &[Record<T>]) -> RecordId {
        loop {
            let candidate = self.options.ids.allocate(T::KIND);
            if records.iter().all(|record| record.id != candidate) {
                return candidate;
            }
            debug!(
                "event=id_collision module=store kind={} id={}",
                T::KIND,
                candidate
            );
        }
    }
}

/// Counts one in-flight operation for the lifetime of the guard.
struct LoadingGuard {
    in_flight: Arc<AtomicUsize>,
}

impl LoadingGuard {
    fn enter(in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self {
            in_flight: Arc::clone(in_flight),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Shared handle to one kind's record list. Clones share the same list.
pub struct MockStore<T> {
    inner: Arc<StoreInner<T>>,
}

impl<T> Clone for MockStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: RecordData> MockStore<T> {
    /// Creates an empty store.
    pub fn new(options: StoreOptions) -> Self {
        Self::with_records(Vec::new(), options)
    }

    /// Creates a store already holding `seed` (given newest first).
    ///
    /// Records repeating an earlier id are dropped.
    pub fn with_records(seed: Vec<Record<T>>, options: StoreOptions) -> Self {
        Self::build(dedupe_seed(seed), true, options)
    }

    fn build(records: Vec<Record<T>>, loaded: bool, options: StoreOptions) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                records: RwLock::new(records),
                in_flight: Arc::new(AtomicUsize::new(0)),
                loaded: watch::channel(loaded).0,
                options,
            }),
        }
    }

    /// Returns an empty store right away and fetches `seed` in the background.
    ///
    /// The store reports loading until the seed becomes visible one latency
    /// period later. Seed records land after anything created meanwhile.
    /// Must be called within a Tokio runtime.
    pub fn open(seed: Vec<Record<T>>, options: StoreOptions) -> Self {
        let store = Self::build(Vec::new(), false, options);
        let inner = Arc::clone(&store.inner);
        let guard = LoadingGuard::enter(&inner.in_flight);

        tokio::spawn(async move {
            let _guard = guard;
            let started_at = Instant::now();
            inner.simulate_latency().await;

            let mut records = inner.records.write().await;
            let seed = dedupe_seed(seed);
            let count = seed.len();
            for record in seed {
                if records.iter().any(|existing| existing.id == record.id) {
                    warn!(
                        "event=seed_duplicate_id module=store kind={} status=skipped id={}",
                        T::KIND,
                        record.id
                    );
                    continue;
                }
                records.push(record);
            }
            drop(records);
            inner.loaded.send_replace(true);

            info!(
                "event=store_open module=store kind={} status=ok records={} duration_ms={}",
                T::KIND,
                count,
                started_at.elapsed().as_millis()
            );
        });
        store
    }

    /// Waits until the initial fetch started by `open` has landed.
    ///
    /// Returns immediately for stores built with `new` or `with_records`.
    pub async fn ready(&self) {
        let mut loaded = self.inner.loaded.subscribe();
        // The sender lives in `inner`, so the channel cannot close while we wait.
        let _ = loaded.wait_for(|loaded| *loaded).await;
    }

    /// True once the initial fetch has landed.
    pub fn is_ready(&self) -> bool {
        *self.inner.loaded.borrow()
    }

    pub fn kind(&self) -> RecordKind {
        T::KIND
    }

    pub fn options(&self) -> &StoreOptions {
        &self.inner.options
    }

    /// True while at least one operation is pending.
    pub fn is_loading(&self) -> bool {
        self.pending_operations() > 0
    }

    pub fn pending_operations(&self) -> usize {
        self.inner.in_flight.load(Ordering::SeqCst)
    }

    /// Current records, newest-created first. Never fails.
    pub async fn list(&self) -> Vec<Record<T>> {
        self.inner.records.read().await.clone()
    }

    /// Record with a matching id, if present. Reads are not delayed.
    pub async fn get(&self, id: &RecordId) -> Option<Record<T>> {
        self.inner
            .records
            .read()
            .await
            .iter()
            .find(|record| &record.id == id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.inner.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.records.read().await.is_empty()
    }

    /// Assigns a fresh id and timestamp, then prepends the record.
    pub async fn create(&self, data: T) -> StoreResult<Record<T>> {
        let inner = Arc::clone(&self.inner);
        let guard = LoadingGuard::enter(&inner.in_flight);

        let handle = tokio::spawn(async move {
            let _guard = guard;
            let started_at = Instant::now();
            inner.simulate_latency().await;

            let created_at = inner.options.clock.now();
            let mut records = inner.records.write().await;
            let id = inner.fresh_id(&records);
            let record = Record::new(id, created_at, data);
            records.insert(0, record.clone());

            info!(
                "event=record_create module=store kind={} status=ok id={} records={} duration_ms={}",
                T::KIND,
                record.id,
                records.len(),
                started_at.elapsed().as_millis()
            );
            record
        });

        join_operation(handle, T::KIND).await
    }

    /// Replaces the domain fields of the record with a matching id.
    ///
    /// `id`, `created_at`, and list position are kept from the stored record.
    pub async fn update(&self, record: Record<T>) -> StoreResult<()> {
        let inner = Arc::clone(&self.inner);
        let guard = LoadingGuard::enter(&inner.in_flight);

        let handle = tokio::spawn(async move {
            let _guard = guard;
            let started_at = Instant::now();
            inner.simulate_latency().await;

            let mut records = inner.records.write().await;
            let Some(existing) = records.iter_mut().find(|item| item.id == record.id) else {
                warn!(
                    "event=record_update module=store kind={} status=not_found id={}",
                    T::KIND,
                    record.id
                );
                return Err(StoreError::NotFound {
                    kind: T::KIND,
                    id: record.id,
                });
            };
            existing.data = record.data;

            info!(
                "event=record_update module=store kind={} status=ok id={} duration_ms={}",
                T::KIND,
                record.id,
                started_at.elapsed().as_millis()
            );
            Ok(())
        });

        join_operation(handle, T::KIND).await?
    }

    /// Removes the record with a matching id.
    pub async fn delete(&self, id: &RecordId) -> StoreResult<()> {
        let inner = Arc::clone(&self.inner);
        let guard = LoadingGuard::enter(&inner.in_flight);
        let id = id.clone();

        let handle = tokio::spawn(async move {
            let _guard = guard;
            let started_at = Instant::now();
            inner.simulate_latency().await;

            let mut records = inner.records.write().await;
            let Some(position) = records.iter().position(|item| item.id == id) else {
                warn!(
                    "event=record_delete module=store kind={} status=not_found id={}",
                    T::KIND,
                    id
                );
                return Err(StoreError::NotFound { kind: T::KIND, id });
            };
            records.remove(position);

            info!(
                "event=record_delete module=store kind={} status=ok id={} records={} duration_ms={}",
                T::KIND,
                id,
                records.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        });

        join_operation(handle, T::KIND).await?
    }
}

async fn join_operation<R>(handle: JoinHandle<R>, kind: RecordKind) -> StoreResult<R>
where
    R: Send + 'static,
{
    match handle.await {
        Ok(value) => Ok(value),
        Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
        Err(_) => Err(StoreError::Interrupted(kind)),
    }
}

fn dedupe_seed<T: RecordData>(seed: Vec<Record<T>>) -> Vec<Record<T>> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(seed.len());
    for record in seed {
        if seen.insert(record.id.clone()) {
            records.push(record);
        } else {
            warn!(
                "event=seed_duplicate_id module=store kind={} status=skipped id={}",
                T::KIND,
                record.id
            );
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::{MockStore, StoreError, StoreOptions};
    use crate::clock::FixedClock;
    use crate::model::finance::{Transaction, TransactionType};
    use crate::model::record::{Record, RecordId};
    use crate::repo::ids::{IdAllocator, SequentialIds};
    use chrono::{TimeZone, Utc};
    use std::sync::Arc;
    use std::time::Duration;

    fn txn(description: &str) -> Transaction {
        Transaction {
            date: Utc.with_ymd_and_hms(2023, 11, 1, 10, 0, 0).unwrap(),
            description: description.to_string(),
            kind: TransactionType::Income,
            amount: 150.0,
            category: "Document Fees".to_string(),
        }
    }

    fn seeded(ids: &[&str]) -> Vec<Record<Transaction>> {
        let at = Utc.with_ymd_and_hms(2023, 11, 1, 10, 0, 0).unwrap();
        ids.iter()
            .map(|id| Record::new(*id, at, txn(id)))
            .collect()
    }

    fn descriptions(records: &[Record<Transaction>]) -> Vec<String> {
        records
            .iter()
            .map(|record| record.data.description.clone())
            .collect()
    }

    #[tokio::test]
    async fn create_prepends_with_store_assigned_identity() {
        let now = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
        let options = StoreOptions::immediate()
            .with_clock(FixedClock::shared(now))
            .with_ids(Arc::new(SequentialIds::default()));
        let store = MockStore::with_records(seeded(&["txn-100"]), options);

        let created = store.create(txn("Hall Rental")).await.unwrap();
        assert_eq!(created.id.as_str(), "txn-001");
        assert_eq!(created.created_at, now);

        let listed = store.list().await;
        assert_eq!(descriptions(&listed), vec!["Hall Rental", "txn-100"]);
    }

    struct Colliding;

    impl IdAllocator for Colliding {
        fn allocate(&self, _kind: crate::model::record::RecordKind) -> RecordId {
            static CALLS: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);
            match CALLS.fetch_add(1, std::sync::atomic::Ordering::SeqCst) {
                0 => RecordId::from("txn-001"),
                _ => RecordId::from("txn-777"),
            }
        }
    }

    #[tokio::test]
    async fn create_skips_ids_already_in_use() {
        let options = StoreOptions::immediate().with_ids(Arc::new(Colliding));
        let store = MockStore::with_records(seeded(&["txn-001"]), options);

        let created = store.create(txn("Fresh")).await.unwrap();
        assert_eq!(created.id.as_str(), "txn-777");
    }

    #[tokio::test]
    async fn update_keeps_identity_and_position() {
        let store = MockStore::with_records(seeded(&["a", "b", "c"]), StoreOptions::immediate());
        let original = store.list().await[1].clone();

        let mut edited = original.clone();
        edited.created_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        edited.data.amount = 999.0;
        store.update(edited).await.unwrap();

        let listed = store.list().await;
        assert_eq!(descriptions(&listed), vec!["a", "b", "c"]);
        assert_eq!(listed[1].created_at, original.created_at);
        assert_eq!(listed[1].data.amount, 999.0);
    }

    #[tokio::test]
    async fn update_and_delete_report_missing_ids() {
        let store = MockStore::with_records(seeded(&["a"]), StoreOptions::immediate());
        let ghost = Record::new("missing", Utc::now(), txn("ghost"));

        let err = store.update(ghost).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        let err = store.delete(&RecordId::from("missing")).await.unwrap_err();
        assert_eq!(err.to_string(), "finance record not found: missing");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = MockStore::with_records(seeded(&["a", "b", "c"]), StoreOptions::immediate());
        store.delete(&RecordId::from("b")).await.unwrap();
        assert_eq!(descriptions(&store.list().await), vec!["a", "c"]);
    }

    #[test]
    fn duplicate_seed_ids_keep_the_first_record() {
        let store = MockStore::with_records(seeded(&["a", "a", "b"]), StoreOptions::immediate());
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        assert_eq!(runtime.block_on(store.len()), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn operations_wait_for_latency_and_report_loading() {
        let options = StoreOptions::immediate().with_latency(Duration::from_millis(500));
        let store = MockStore::with_records(Vec::new(), options);
        assert!(!store.is_loading());

        let started = tokio::time::Instant::now();
        let pending = tokio::spawn({
            let store = store.clone();
            async move { store.create(txn("slow")).await }
        });
        tokio::task::yield_now().await;
        assert!(store.is_loading());
        assert!(store.is_empty().await);

        pending.await.unwrap().unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(!store.is_loading());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_operations_keep_loading_until_the_last_finishes() {
        let options = StoreOptions::immediate().with_latency(Duration::from_millis(500));
        let store = MockStore::with_records(Vec::new(), options);

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.create(txn("one")).await }
        });
        tokio::time::sleep(Duration::from_millis(250)).await;
        let second = tokio::spawn({
            let store = store.clone();
            async move { store.create(txn("two")).await }
        });
        tokio::task::yield_now().await;
        assert_eq!(store.pending_operations(), 2);

        // The first create lands at 500 ms; the second is still pending.
        tokio::time::sleep(Duration::from_millis(300)).await;
        first.await.unwrap().unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(store.pending_operations(), 1);
        assert!(store.is_loading());

        second.await.unwrap().unwrap();
        assert!(!store.is_loading());
        assert_eq!(descriptions(&store.list().await), vec!["two", "one"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_caller_does_not_cancel_mutation() {
        let options = StoreOptions::immediate().with_latency(Duration::from_millis(500));
        let store = MockStore::with_records(seeded(&["a"]), options);

        let id = RecordId::from("a");
        let deleting = store.delete(&id);
        let _ = tokio::time::timeout(Duration::from_millis(10), deleting).await;
        assert_eq!(store.len().await, 1);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(store.is_empty().await);
        assert!(!store.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn open_reports_loading_until_seed_is_visible() {
        let options = StoreOptions::immediate().with_latency(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        let store = MockStore::open(seeded(&["a", "b"]), options);

        assert!(store.is_loading());
        assert!(!store.is_ready());
        assert!(store.is_empty().await);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(store.is_loading());
        assert!(store.is_empty().await);

        store.ready().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert!(store.is_ready());
        assert!(!store.is_loading());
        assert_eq!(descriptions(&store.list().await), vec!["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn records_created_during_open_are_kept() {
        let options = StoreOptions::immediate()
            .with_latency(Duration::from_millis(500))
            .with_ids(Arc::new(SequentialIds::default()));
        let store = MockStore::open(seeded(&["a", "b"]), options);

        tokio::time::sleep(Duration::from_millis(100)).await;
        store.create(txn("fresh")).await.unwrap();
        store.ready().await;

        assert_eq!(descriptions(&store.list().await), vec!["fresh", "a", "b"]);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn stores_built_with_records_are_ready_at_once() {
        let store = MockStore::with_records(seeded(&["a"]), StoreOptions::immediate());
        assert!(store.is_ready());
        store.ready().await;
        assert!(!store.is_loading());
    }
}

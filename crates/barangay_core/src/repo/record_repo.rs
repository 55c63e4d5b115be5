//! Record repository contract consumed by the service layer.
//!
//! # Invariants
//! - Implementations own id and `created_at` assignment.
//! - `update`/`delete` of an absent id return `StoreError::NotFound`.

use crate::model::record::{Record, RecordData, RecordId};
use crate::repo::mock_store::{MockStore, StoreResult};
use async_trait::async_trait;

#[async_trait]
pub trait RecordRepository<T: RecordData>: Send + Sync {
    async fn list_records(&self) -> Vec<Record<T>>;
    async fn get_record(&self, id: &RecordId) -> Option<Record<T>>;
    async fn create_record(&self, data: T) -> StoreResult<Record<T>>;
    async fn update_record(&self, record: Record<T>) -> StoreResult<()>;
    async fn delete_record(&self, id: &RecordId) -> StoreResult<()>;
    fn is_loading(&self) -> bool;
}

#[async_trait]
impl<T: RecordData> RecordRepository<T> for MockStore<T> {
    async fn list_records(&self) -> Vec<Record<T>> {
        self.list().await
    }

    async fn get_record(&self, id: &RecordId) -> Option<Record<T>> {
        self.get(id).await
    }

    async fn create_record(&self, data: T) -> StoreResult<Record<T>> {
        self.create(data).await
    }

    async fn update_record(&self, record: Record<T>) -> StoreResult<()> {
        self.update(record).await
    }

    async fn delete_record(&self, id: &RecordId) -> StoreResult<()> {
        self.delete(id).await
    }

    fn is_loading(&self) -> bool {
        MockStore::is_loading(self)
    }
}

//! Record use-case service.
//!
//! # Responsibility
//! - Run form validation before any repository call.
//! - Gate deletes behind an explicit confirmation.
//!
//! # Invariants
//! - Invalid input never reaches the repository.
//! - A declined confirmation leaves the repository untouched.

use crate::model::record::{Record, RecordData, RecordId, RecordKind};
use crate::model::validation::FieldErrors;
use crate::repo::mock_store::{MockStore, StoreError};
use crate::repo::record_repo::RecordRepository;
use crate::search::filter_records;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Form input rejected before reaching the store.
    Validation {
        kind: RecordKind,
        errors: FieldErrors,
    },
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { kind, errors } => {
                write!(f, "invalid {kind} record: {errors}")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Asks the operator to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approves every prompt. For scripted callers that confirmed up front.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Use-case wrapper around one kind's repository.
pub struct RecordService<T: RecordData, R: RecordRepository<T> = MockStore<T>> {
    repo: R,
    _kind: PhantomData<fn() -> T>,
}

impl<T: RecordData, R: RecordRepository<T>> RecordService<T, R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            _kind: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn is_loading(&self) -> bool {
        self.repo.is_loading()
    }

    pub async fn list(&self) -> Vec<Record<T>> {
        self.repo.list_records().await
    }

    /// Current list narrowed by the free-text filter.
    pub async fn search(&self, term: &str) -> Vec<Record<T>> {
        filter_records(&self.repo.list_records().await, term)
    }

    pub async fn get(&self, id: &RecordId) -> Option<Record<T>> {
        self.repo.get_record(id).await
    }

    /// Validates `data`, then creates it with a store-assigned id and timestamp.
    pub async fn create(&self, data: T) -> ServiceResult<Record<T>> {
        validate(&data)?;
        Ok(self.repo.create_record(data).await?)
    }

    /// Validates the new fields, then replaces the stored record's fields.
    pub async fn update(&self, record: Record<T>) -> ServiceResult<()> {
        validate(&record.data)?;
        Ok(self.repo.update_record(record).await?)
    }

    /// Deletes `id` once `confirm` approves the kind's prompt.
    pub async fn delete(
        &self,
        id: &RecordId,
        confirm: &(dyn Confirm + Sync),
    ) -> ServiceResult<DeleteOutcome> {
        if !confirm.confirm(T::KIND.delete_prompt()) {
            info!(
                "event=record_delete module=service kind={} status=cancelled id={}",
                T::KIND,
                id
            );
            return Ok(DeleteOutcome::Cancelled);
        }
        self.repo.delete_record(id).await?;
        Ok(DeleteOutcome::Deleted)
    }
}

fn validate<T: RecordData>(data: &T) -> ServiceResult<()> {
    data.validate().map_err(|errors| {
        warn!(
            "event=record_validate module=service kind={} status=rejected fields={}",
            T::KIND,
            errors
                .iter()
                .map(|(field, _)| field)
                .collect::<Vec<_>>()
                .join(",")
        );
        ServiceError::Validation {
            kind: T::KIND,
            errors,
        }
    })
}

//! Record use-case services.
//!
//! # Responsibility
//! - Put form validation and delete confirmation in front of the stores.
//! - Keep CLI and dashboard callers decoupled from store details.

pub mod record_service;

pub use record_service::{
    AlwaysConfirm, Confirm, DeleteOutcome, RecordService, ServiceError, ServiceResult,
};

//! Error types for the user account service.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during user account operations.
///
/// Every failure is terminal for the single invocation that produced it;
/// nothing here is retried or recovered internally.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The identifier has no corresponding record.
    ///
    /// Carries the operation that was attempted so callers (and log readers)
    /// see the context without a backtrace.
    #[error("user {id} not found during {operation}")]
    NotFound { id: u64, operation: &'static str },

    /// A supplied value violates a precondition (non-positive amount,
    /// insufficient balance for a payment).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The record's current status forbids the requested operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The persistence collaborator failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

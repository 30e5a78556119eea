//! Error types for the billing reconciliation service.

use crate::ports::{EncodeError, PublishError};

/// Domain-level errors (invalid values and configuration).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid channel configuration: {0}")]
    InvalidChannelConfig(String),

    #[error("Unknown dispatch mode: {0}")]
    UnknownDispatchMode(String),
}

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Database error: {0}")]
    Database(String),
}

/// Reasons a payment batch stops processing.
///
/// Every variant aborts the remaining payments of the batch. Messages
/// published before the failure stay published.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Seller not found: {0}")]
    SellerNotFound(String),

    #[error("Billing code not found: {0}")]
    BillingNotFound(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] RepoError),

    #[error("Failed to publish to {channel}: {source}")]
    PublishFailure {
        channel: String,
        #[source]
        source: PublishError,
    },

    #[error("Failed to serialize payment for billing code {billing_code}: {source}")]
    SerializationFailure {
        billing_code: String,
        #[source]
        source: EncodeError,
    },
}

impl ProcessingError {
    /// True when the batch was rejected because of what the caller sent.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ProcessingError::SellerNotFound(_) | ProcessingError::BillingNotFound(_)
        )
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ProcessingError> for AppError {
    fn from(err: ProcessingError) -> Self {
        match err {
            ProcessingError::SellerNotFound(_) | ProcessingError::BillingNotFound(_) => {
                AppError::BadRequest(err.to_string())
            }
            ProcessingError::PublishFailure { .. } => AppError::BadGateway(err.to_string()),
            ProcessingError::Lookup(_) | ProcessingError::SerializationFailure { .. } => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

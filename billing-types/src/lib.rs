//! # Billing Types
//!
//! Domain types and port traits for the billing reconciliation service.
//! This crate has ZERO external IO dependencies - only data structures,
//! the payment classifier, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, Billing, Payment, PaymentStatus, channels)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, processing and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amount, Billing, ChannelConfig, DispatchMode, Payment, PaymentBatch, PaymentStatus, Seller,
    classify,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProcessingError, RepoError};
pub use ports::{
    BillingRepository, EncodeError, JsonPaymentEncoder, LookupRepository, MessagePublisher,
    PaymentEncoder, PublishError, SellerRepository,
};

//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod encoder;
mod publisher;
mod repository;

pub use encoder::{EncodeError, JsonPaymentEncoder, PaymentEncoder};
pub use publisher::{MessagePublisher, PublishError};
pub use repository::{BillingRepository, LookupRepository, SellerRepository};

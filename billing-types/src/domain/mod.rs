//! Domain models for the billing reconciliation service.

pub mod amount;
pub mod billing;
pub mod channel;
pub mod payment;
pub mod status;

pub use amount::Amount;
pub use billing::{Billing, Seller};
pub use channel::{ChannelConfig, DispatchMode};
pub use payment::{Payment, PaymentBatch};
pub use status::{PaymentStatus, classify};

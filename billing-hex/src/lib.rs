//! # Billing Hex
//!
//! Application service layer and HTTP adapter for billing reconciliation.
//!
//! ## Architecture
//!
//! - `service/` - Payment processing service (classify and dispatch)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `openapi/` - OpenAPI document for the HTTP API
//!
//! The service is generic over `R: LookupRepository` and `P: MessagePublisher`,
//! allowing different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod service;


pub use service::PaymentService;

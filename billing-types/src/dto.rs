//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Amount, Payment, PaymentBatch};

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to process a batch of payments for one seller.
///
/// The response is a [`PaymentBatch`] with every status filled in.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentsRequest {
    /// Seller that submitted the payments
    #[schema(example = "V001")]
    pub seller_code: String,
    /// Payments in submission order
    pub payments: Vec<PaymentInput>,
}

/// A payment as submitted by the caller. Any status sent is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInput {
    /// Billing code being paid
    #[schema(example = "C001")]
    pub billing_code: String,
    /// Amount paid, non-negative decimal
    #[schema(value_type = String, example = "100.00")]
    pub amount: Amount,
}

impl From<PaymentInput> for Payment {
    fn from(input: PaymentInput) -> Self {
        Payment::new(input.billing_code, input.amount)
    }
}

impl From<ProcessPaymentsRequest> for PaymentBatch {
    fn from(req: ProcessPaymentsRequest) -> Self {
        PaymentBatch::new(
            req.seller_code,
            req.payments.into_iter().map(Payment::from).collect(),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Common responses
// ─────────────────────────────────────────────────────────────────────────────

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    #[schema(example = "Billing code not found: C999")]
    pub error: String,
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
}

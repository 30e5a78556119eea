//! Payment and batch domain models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::Amount;
use super::status::PaymentStatus;

/// A payment against a billing code.
///
/// `status` is empty until the payment has been classified. This is also
/// the shape of the message published to the downstream channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Billing code this payment settles
    #[schema(example = "C001")]
    pub billing_code: String,
    /// Amount paid
    #[schema(value_type = String, example = "100.00")]
    pub amount: Amount,
    /// Classification result, present once processed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PaymentStatus>,
}

impl Payment {
    /// Creates an unclassified payment.
    pub fn new(billing_code: impl Into<String>, amount: Amount) -> Self {
        Self {
            billing_code: billing_code.into(),
            amount,
            status: None,
        }
    }

    pub fn is_classified(&self) -> bool {
        self.status.is_some()
    }
}

/// One seller's payments, processed together.
///
/// Order is preserved so the response lines up with the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBatch {
    /// Seller that submitted the payments
    #[schema(example = "V001")]
    pub seller_code: String,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl PaymentBatch {
    pub fn new(seller_code: impl Into<String>, payments: Vec<Payment>) -> Self {
        Self {
            seller_code: seller_code.into(),
            payments,
        }
    }
}

//! Seller and billing reference records.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::Amount;

/// A seller known to the system.
///
/// Only existence matters to payment processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub code: String,
}

impl Seller {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// The amount originally owed under a billing code.
///
/// Read-only reference data from the point of view of payment processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    /// Unique billing code
    #[schema(example = "C001")]
    pub code: String,
    /// Amount originally owed
    #[schema(value_type = String, example = "100.00")]
    pub original_amount: Amount,
}

impl Billing {
    pub fn new(code: impl Into<String>, original_amount: Amount) -> Self {
        Self {
            code: code.into(),
            original_amount,
        }
    }
}

//! Payment status and the classifier that assigns it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use utoipa::ToSchema;

use super::amount::Amount;

/// How a paid amount compares to the amount originally owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Paid less than owed
    Partial,
    /// Paid exactly what was owed
    Full,
    /// Paid more than owed
    Overpaid,
}

impl PaymentStatus {
    /// Classifies `amount` against `original_amount` with exact decimal comparison.
    pub fn classify(amount: Amount, original_amount: Amount) -> Self {
        match amount.cmp(&original_amount) {
            Ordering::Less => PaymentStatus::Partial,
            Ordering::Equal => PaymentStatus::Full,
            Ordering::Greater => PaymentStatus::Overpaid,
        }
    }
}

/// Shorthand for [`PaymentStatus::classify`].
pub fn classify(amount: Amount, original_amount: Amount) -> PaymentStatus {
    PaymentStatus::classify(amount, original_amount)
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Partial => write!(f, "PARTIAL"),
            PaymentStatus::Full => write!(f, "FULL"),
            PaymentStatus::Overpaid => write!(f, "OVERPAID"),
        }
    }
}

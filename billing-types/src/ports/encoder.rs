//! Payment encoder port.
//!
//! Turns a classified payment into the bytes placed on a channel, so the
//! wire format can change without touching classification.

use crate::domain::Payment;

/// Error type for payment encoding.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct EncodeError(pub String);

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        EncodeError(err.to_string())
    }
}

/// Port trait for payment encoders.
pub trait PaymentEncoder: Send + Sync + 'static {
    fn encode(&self, payment: &Payment) -> Result<Vec<u8>, EncodeError>;
}

impl<F> PaymentEncoder for F
where
    F: Fn(&Payment) -> Result<Vec<u8>, EncodeError> + Send + Sync + 'static,
{
    fn encode(&self, payment: &Payment) -> Result<Vec<u8>, EncodeError> {
        self(payment)
    }
}

/// Default encoder: camelCase JSON, amount as a decimal string.
///
/// `{"billingCode":"C001","amount":"100.00","status":"FULL"}`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPaymentEncoder;

impl PaymentEncoder for JsonPaymentEncoder {
    fn encode(&self, payment: &Payment) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(payment)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PaymentStatus;

    #[test]
    fn test_json_encoding_round_trips() {
        let mut payment = Payment::new("C001", "100.00".parse().unwrap());
        payment.status = Some(PaymentStatus::Full);

        let bytes = JsonPaymentEncoder.encode(&payment).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            r#"{"billingCode":"C001","amount":"100.00","status":"FULL"}"#
        );

        let decoded: Payment = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, payment);
    }

    #[test]
    fn test_closure_encoder() {
        let encoder = |p: &Payment| -> Result<Vec<u8>, EncodeError> {
            Ok(p.billing_code.clone().into_bytes())
        };
        let payment = Payment::new("C042", "1".parse().unwrap());

        assert_eq!(encoder.encode(&payment).unwrap(), b"C042".to_vec());
    }
}

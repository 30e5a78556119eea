//! # Billing Client SDK
//!
//! A typed Rust client for the billing reconciliation API.

use billing_types::{PaymentBatch, PaymentInput, ProcessPaymentsRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns true when the server rejected the batch as invalid
    /// (unknown seller, unknown billing code, malformed body).
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == 400)
    }
}

/// Billing API client.
pub struct BillingClient {
    base_url: String,
    http: Client,
}

impl BillingClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Submits a batch of payments for a seller.
    ///
    /// Returns the batch with every payment status filled in.
    pub async fn process_payments(
        &self,
        seller_code: &str,
        payments: Vec<PaymentInput>,
    ) -> Result<PaymentBatch, ClientError> {
        let req = ProcessPaymentsRequest {
            seller_code: seller_code.to_string(),
            payments,
        };
        self.submit(&req).await
    }

    /// Submits a prepared request body.
    pub async fn submit(&self, req: &ProcessPaymentsRequest) -> Result<PaymentBatch, ClientError> {
        self.post("/api/payments", req).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use billing_types::{Amount, PaymentStatus};
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn classify_all_full(Json(body): Json<Value>) -> Json<Value> {
        let payments: Vec<Value> = body["payments"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|mut p| {
                p["status"] = json!("FULL");
                p
            })
            .collect();
        Json(json!({ "sellerCode": body["sellerCode"], "payments": payments }))
    }

    async fn unknown_seller() -> (StatusCode, Json<Value>) {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Seller not found: V999", "code": 400 })),
        )
    }

    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn input(code: &str, amount: Amount) -> PaymentInput {
        PaymentInput {
            billing_code: code.into(),
            amount,
        }
    }

    #[test]
    fn test_client_creation() {
        let client = BillingClient::new("http://localhost:3000");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = BillingClient::new("http://localhost:3000/");
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[tokio::test]
    async fn test_process_payments_decodes_batch() {
        let base = spawn(Router::new().route("/api/payments", post(classify_all_full))).await;
        let client = BillingClient::new(base);

        let payments = vec![input("C001", Amount::new(dec!(100.00)).unwrap())];

        let batch = client.process_payments("V001", payments).await.unwrap();

        assert_eq!(batch.seller_code, "V001");
        assert_eq!(batch.payments[0].status, Some(PaymentStatus::Full));
        assert_eq!(batch.payments[0].amount.value(), dec!(100.00));
    }

    #[tokio::test]
    async fn test_api_error_carries_server_message() {
        let base = spawn(Router::new().route("/api/payments", post(unknown_seller))).await;
        let client = BillingClient::new(base);

        let err = client.process_payments("V999", vec![]).await.unwrap_err();

        assert!(err.is_rejected());
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Seller not found: V999");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }
}

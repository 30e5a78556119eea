//! HTTP-level tests for the payments endpoint.
//!
//! Requests go through the full router (handlers, error mapping, layers)
//! against the in-memory store and publisher.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use billing_hex::{PaymentService, inbound::HttpServer};
use billing_repo::{InMemoryPublisher, InMemoryStore};
use billing_types::{Amount, Billing, ChannelConfig};

const PARTIAL: &str = "queue.partial";
const FULL: &str = "queue.full";
const OVERPAID: &str = "queue.overpaid";

/// Helper to create a server with seller V001 and billings C001..C003.
fn create_test_server() -> HttpServer<InMemoryStore, InMemoryPublisher> {
    let store = InMemoryStore::new()
        .with_seller("V001")
        .with_billing(billing("C001", "100.00"))
        .with_billing(billing("C002", "250.00"))
        .with_billing(billing("C003", "80.00"));
    let channels = ChannelConfig::new(PARTIAL, FULL, OVERPAID).unwrap();
    HttpServer::new(PaymentService::new(store, InMemoryPublisher::new(), channels))
}

fn billing(code: &str, amount: &str) -> Billing {
    Billing::new(code, amount.parse::<Amount>().unwrap())
}

fn payments_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/payments")
        .header("Content-Type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(
    server: &HttpServer<InMemoryStore, InMemoryPublisher>,
    body: Value,
) -> (StatusCode, Value) {
    let response = server
        .router()
        .oneshot(payments_request(body.to_string()))
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health_returns_ok() {
    let server = create_test_server();

    let response = server
        .router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_batch_is_classified_and_dispatched() {
    let server = create_test_server();

    let (status, body) = send(
        &server,
        json!({
            "sellerCode": "V001",
            "payments": [
                {"billingCode": "C001", "amount": "100.00"},
                {"billingCode": "C002", "amount": 50},
                {"billingCode": "C003", "amount": "120.00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sellerCode"], "V001");
    let statuses: Vec<&str> = body["payments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["FULL", "PARTIAL", "OVERPAID"]);
    assert_eq!(body["payments"][0]["amount"], "100.00");

    let publisher = server.service().publisher();
    assert_eq!(publisher.messages().len(), 3);
    assert_eq!(publisher.messages_for(FULL).len(), 1);
    assert_eq!(publisher.messages_for(PARTIAL).len(), 1);
    assert_eq!(publisher.messages_for(OVERPAID).len(), 1);
}

#[tokio::test]
async fn test_incoming_status_is_ignored() {
    let server = create_test_server();

    let (status, body) = send(
        &server,
        json!({
            "sellerCode": "V001",
            "payments": [{"billingCode": "C001", "amount": "10.00", "status": "OVERPAID"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payments"][0]["status"], "PARTIAL");
}

#[tokio::test]
async fn test_empty_batch_publishes_nothing() {
    let server = create_test_server();

    let (status, body) = send(&server, json!({"sellerCode": "V001", "payments": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payments"], json!([]));
    assert!(server.service().publisher().messages().is_empty());
}

#[tokio::test]
async fn test_unknown_seller_returns_400() {
    let server = create_test_server();

    let (status, body) = send(
        &server,
        json!({
            "sellerCode": "V999",
            "payments": [{"billingCode": "C001", "amount": "100.00"}]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Seller not found: V999");
    assert_eq!(body["code"], 400);
    assert!(server.service().publisher().messages().is_empty());
}

#[tokio::test]
async fn test_unknown_billing_returns_400_and_keeps_earlier_messages() {
    let server = create_test_server();

    let (status, body) = send(
        &server,
        json!({
            "sellerCode": "V001",
            "payments": [
                {"billingCode": "C001", "amount": "100.00"},
                {"billingCode": "C999", "amount": "1.00"},
                {"billingCode": "C002", "amount": "1.00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Billing code not found: C999");

    let messages = server.service().publisher().messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].channel, FULL);
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let server = create_test_server();

    let response = server
        .router()
        .oneshot(payments_request("{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_numeric_amount_is_classified_exactly() {
    let server = create_test_server();

    // Raw body: a Rust float literal would already have lost the last digit.
    let response = server
        .router()
        .oneshot(payments_request(
            r#"{"sellerCode":"V001","payments":[
                {"billingCode":"C001","amount":100.000000000000001},
                {"billingCode":"C002","amount":249.999999999999999}
            ]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["payments"][0]["status"], "OVERPAID");
    assert_eq!(body["payments"][0]["amount"], "100.000000000000001");
    assert_eq!(body["payments"][1]["status"], "PARTIAL");

    let publisher = server.service().publisher();
    assert_eq!(publisher.messages_for(OVERPAID).len(), 1);
    assert_eq!(publisher.messages_for(PARTIAL).len(), 1);
}

#[tokio::test]
async fn test_negative_amount_returns_400() {
    let server = create_test_server();

    let response = server
        .router()
        .oneshot(payments_request(
            json!({
                "sellerCode": "V001",
                "payments": [{"billingCode": "C001", "amount": "-5.00"}]
            })
            .to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(server.service().publisher().messages().is_empty());
}

#[tokio::test]
async fn test_publish_failure_returns_502() {
    let server = create_test_server();
    server.service().publisher().fail_channel(OVERPAID);

    let (status, body) = send(
        &server,
        json!({
            "sellerCode": "V001",
            "payments": [
                {"billingCode": "C002", "amount": "10.00"},
                {"billingCode": "C003", "amount": "500.00"}
            ]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], 502);
    assert!(body["error"].as_str().unwrap().contains(OVERPAID));
    assert_eq!(server.service().publisher().messages_for(PARTIAL).len(), 1);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let server = create_test_server();

    let response = server
        .router()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["paths"]["/api/payments"].is_object());
}

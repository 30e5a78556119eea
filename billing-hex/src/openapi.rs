//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use billing_types::dto::{ErrorResponse, HealthResponse, PaymentInput, ProcessPaymentsRequest};
use billing_types::domain::{Payment, PaymentBatch, PaymentStatus};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health() {}

/// Classify and dispatch a seller's payments
///
/// Each payment is compared with the amount owed on its billing code and
/// published to the partial, full or overpaid channel. Processing stops at
/// the first failure; messages already published are not withdrawn.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = ProcessPaymentsRequest,
    responses(
        (status = 200, description = "All payments classified and published", body = PaymentBatch),
        (status = 400, description = "Unknown seller or billing code, or malformed body", body = ErrorResponse),
        (status = 500, description = "Lookup or serialization failure", body = ErrorResponse),
        (status = 502, description = "A channel rejected or did not accept a message", body = ErrorResponse)
    )
)]
async fn process_payments() {}

/// OpenAPI documentation for the Billing API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Billing Reconciliation API",
        version = "1.0.0",
        description = "Reconciles incoming payments against billing records and routes each payment to a channel by status.\n\n## Statuses\n\n- `PARTIAL` - paid less than owed\n- `FULL` - paid exactly what was owed\n- `OVERPAID` - paid more than owed\n\nAmounts are exact decimals, sent and returned as strings (numbers are also accepted on input).",
        license(name = "MIT"),
    ),
    paths(health, process_payments),
    components(
        schemas(
            ProcessPaymentsRequest,
            PaymentInput,
            PaymentBatch,
            Payment,
            PaymentStatus,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment classification and dispatch"),
    )
)]
pub struct ApiDoc;

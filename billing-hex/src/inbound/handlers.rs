//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use billing_types::{
    AppError, ErrorResponse, HealthResponse, LookupRepository, MessagePublisher, PaymentBatch,
    ProcessPaymentsRequest,
};

use crate::PaymentService;

/// Application state shared across handlers.
pub struct AppState<R: LookupRepository, P: MessagePublisher> {
    pub service: PaymentService<R, P>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl From<billing_types::ProcessingError> for ApiError {
    fn from(err: billing_types::ProcessingError) -> Self {
        ApiError(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(AppError::BadRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = ErrorResponse {
            error: message,
            code: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".into(),
    })
}

/// Classify a seller's payments and dispatch each to its channel.
#[tracing::instrument(skip(state, payload))]
pub async fn process_payments<R: LookupRepository, P: MessagePublisher>(
    State(state): State<Arc<AppState<R, P>>>,
    payload: Result<Json<ProcessPaymentsRequest>, JsonRejection>,
) -> Result<Json<PaymentBatch>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!(
        "Received batch of {} payments for seller {}",
        req.payments.len(),
        req.seller_code
    );

    let batch = state.service.process_payments(req.into()).await?;
    Ok(Json(batch))
}

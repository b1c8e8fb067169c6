//! HTTP surface of the payment service

pub mod health;
pub mod payments;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::database::error::{DatabaseError, DatabaseErrorKind};
use crate::database::PaymentRepository;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub payments: PaymentRepository,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let payments = PaymentRepository::new(pool.clone());
        Self {
            config,
            pool,
            payments,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/payments/:order_id", get(payments::get_payment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Database errors rendered as JSON responses
#[derive(Debug)]
pub struct ApiError(pub DatabaseError);

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0.kind {
            DatabaseErrorKind::NotFound { .. } => StatusCode::NOT_FOUND,
            DatabaseErrorKind::Validation { .. } => StatusCode::BAD_REQUEST,
            DatabaseErrorKind::UniqueConstraintViolation { .. } => StatusCode::CONFLICT,
            DatabaseErrorKind::PoolExhausted
            | DatabaseErrorKind::ConnectionTimeout
            | DatabaseErrorKind::ConnectionError { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(error: DatabaseError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

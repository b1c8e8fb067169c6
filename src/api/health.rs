use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::database;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub database: String,
    pub pool_size: u32,
    pub pool_idle: u32,
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database_ok = database::health_check(&state.pool).await.is_ok();
    let stats = database::get_pool_stats(&state.pool);

    let (status_code, status) = if database_ok {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let response = HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.server.environment.clone(),
        database: if database_ok { "up" } else { "down" }.to_string(),
        pool_size: stats.size,
        pool_idle: stats.num_idle,
    };

    (status_code, Json(response))
}

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::shared::infrastructure::PoolStatus;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: Option<PoolStatus>,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        database: state.database.as_ref().map(|db| db.pool_status()),
    })
}

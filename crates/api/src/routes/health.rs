//! Root-level liveness probe for the front desk and load balancers.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use gymdesk_db::repositories::AttendanceRepo;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Members currently in the gym (checked in today, not yet out).
    /// Absent when the database is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members_on_floor: Option<i64>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = gymdesk_db::health_check(&state.pool).await.is_ok();
    let members_on_floor = if db_healthy {
        AttendanceRepo::count_open_on(&state.pool, Utc::now().date_naive())
            .await
            .map_err(|e| tracing::warn!(error = %e, "Failed to count open check-ins"))
            .ok()
    } else {
        None
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        members_on_floor,
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

use crate::infrastructure::database::pool::ping;
use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthReport {
    status: &'static str,
    database: &'static str,
    rate_limit: &'static str,
    version: &'static str,
}

/// 503 when PostgreSQL does not answer. Redis is not pinged: the rate limiter
/// lets requests through when it is down.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database_up = ping(&state.db).await;
    if !database_up {
        tracing::error!("health check: database unreachable");
    }

    let report = HealthReport {
        status: if database_up { "healthy" } else { "unhealthy" },
        database: if database_up { "up" } else { "down" },
        rate_limit: if state.rate_limiter.enabled() {
            "enabled"
        } else {
            "disabled"
        },
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(report))
}

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use maud::Markup;
use serde_json::json;
use tracing::warn;

use crate::views;
use crate::AppState;

pub async fn index() -> Markup {
    views::home_page()
}

/// Liveness plus migration state. Answers 503 when the pool can't run a query.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database_ok = state.db.health_check().await;

    let migrations = match state.db.migration_status().await {
        Ok(status) => json!({
            "total": status.total,
            "applied": status.applied,
            "current": status.is_current(),
        }),
        Err(e) => {
            warn!(error = %e, "Failed to read migration status");
            serde_json::Value::Null
        }
    };

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if database_ok { "serving" } else { "not_serving" },
        "database": database_ok,
        "migrations": migrations,
        "server_time": Utc::now().to_rfc3339(),
    });

    (status, Json(body))
}

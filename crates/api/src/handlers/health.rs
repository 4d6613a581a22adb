//! Readiness of the annotation store.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct Readiness {
    /// `ready` when the store can serve requests, `unavailable` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// `up` or `down`.
    pub database: &'static str,
}

/// GET /health
///
/// 200 while the database answers, 503 when it does not, so load balancers
/// stop routing to an instance that cannot reach the store.
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match boxreview_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ready",
                version: env!("CARGO_PKG_VERSION"),
                database: "up",
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Annotation store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "unavailable",
                    version: env!("CARGO_PKG_VERSION"),
                    database: "down",
                }),
            )
        }
    }
}

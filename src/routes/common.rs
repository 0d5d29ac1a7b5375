//! Operational routes: liveness, store readiness, and build/model info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Shared body for `/health` and `/ready`.
#[derive(Serialize)]
struct ProbeBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct InfoBody {
    name: &'static str,
    version: &'static str,
    /// Route segments of every mounted model.
    models: Vec<String>,
}

async fn health() -> Json<ProbeBody> {
    Json(ProbeBody {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeBody>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ProbeBody {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn info(State(state): State<AppState>) -> Json<InfoBody> {
    Json(InfoBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        models: state.registry.models().iter().map(|m| m.route_name.clone()).collect(),
    })
}

/// GET /health, GET /ready (pings the store), GET /version (package and mounted models).
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(info))
        .with_state(state)
}

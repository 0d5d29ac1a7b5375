//! Router assembly.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::error::ConfigError;
use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Upper bound on request bodies.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Paths owned by `common_routes`.
pub const RESERVED_PATHS: &[&str] = &["/health", "/ready", "/version"];

/// Common routes plus every model's CRUD routes under `prefix`, with body limit and request tracing.
/// Fails if a model's collection path would shadow a common route.
pub fn build_router(state: AppState, prefix: &str) -> Result<Router, ConfigError> {
    for model in state.registry.models() {
        let path = format!("{}/{}", prefix, model.route_name);
        if RESERVED_PATHS.contains(&path.as_str()) {
            return Err(ConfigError::ReservedPath(path));
        }
    }
    Ok(Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state, prefix))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http()))
}

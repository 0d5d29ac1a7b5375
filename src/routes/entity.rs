//! Entity CRUD routes: two per registered model, each bound to the model's own state.

use crate::handlers::entity::{create, delete as delete_handler, list, patch, read, replace};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `GET/POST {prefix}/<route>` and `GET/PUT/PATCH/DELETE {prefix}/<route>/:id` for every model in the registry.
/// `prefix` must be empty or start with `/` (see `normalize_prefix`).
pub fn entity_routes(state: AppState, prefix: &str) -> Router {
    let mut router = Router::new();
    for model in state.registry.models() {
        let collection_path = format!("{}/{}", prefix, model.route_name);
        let item_path = format!("{}/:id", collection_path);
        tracing::info!(
            model = %model.name,
            collection = %model.collection_name,
            path = %collection_path,
            "binding routes"
        );
        router = router.merge(
            Router::new()
                .route(&collection_path, get(list).post(create))
                .route(
                    &item_path,
                    get(read).put(replace).patch(patch).delete(delete_handler),
                )
                .with_state(state.for_model(model)),
        );
    }
    router
}

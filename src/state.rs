//! Shared state for routes: the store handle, plus the bound model for entity routes.

use crate::config::{ModelDescriptor, ModelRegistry};
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, registry: ModelRegistry) -> Self {
        AppState {
            store,
            registry: Arc::new(registry),
        }
    }

    /// State for the routes of a single model.
    pub fn for_model(&self, model: &Arc<ModelDescriptor>) -> EntityState {
        EntityState {
            store: Arc::clone(&self.store),
            model: Arc::clone(model),
        }
    }
}

/// Per-model state: each model's routes carry their own descriptor, so handlers need no lookup.
#[derive(Clone)]
pub struct EntityState {
    pub store: Arc<dyn DocumentStore>,
    pub model: Arc<ModelDescriptor>,
}

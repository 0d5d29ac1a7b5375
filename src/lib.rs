//! Mongo CRUD: REST endpoints generated from declared models, backed by a document store.

pub mod case;
pub mod config;
pub mod error;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::{
    load_model_dir, load_registry_from_dir, resolve, Model, ModelDef, ModelDescriptor, ModelRegistry, Settings,
};
pub use error::{AppError, ConfigError, StoreError};
pub use state::{AppState, EntityState};
pub use store::{DocumentStore, MemoryStore, MongoStore, ObjectId};
pub use routes::{build_router, common_routes, entity_routes};
pub use service::CrudService;

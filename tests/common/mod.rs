//! Shared helpers for router tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use mongo_crud::store::Fields;
use mongo_crud::{build_router, resolve, AppState, DocumentStore, MemoryStore, ModelDef, ObjectId, StoreError};

pub const PREFIX: &str = "/api";

pub fn model_defs() -> Vec<ModelDef> {
    vec![
        ModelDef::new("OrderItem", ["sku", "quantity", "note"]),
        ModelDef::new("UserProfile", ["display_name", "email"]).with_collection("profiles"),
    ]
}

/// Router over the given store with the test models mounted under `PREFIX`.
pub fn test_app(store: Arc<dyn DocumentStore>) -> Router {
    let registry = resolve(&model_defs()).unwrap();
    build_router(AppState::new(store, registry), PREFIX).unwrap()
}

pub fn memory_app() -> (Router, Arc<MemoryStore>) {
    let store = MemoryStore::new_shared();
    (test_app(store.clone()), store)
}

/// Send a request (JSON body when given) and return status + parsed JSON response.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::json!({ "raw_body": String::from_utf8_lossy(&bytes).to_string() })
        })
    };
    (status, json)
}

/// Hex id of a returned document.
pub fn id_of(doc: &Value) -> String {
    doc["_id"]["$oid"].as_str().expect("document has an $oid").to_string()
}

/// Store whose every operation fails, for exercising the swallowed-lookup paths.
pub struct FailingStore;

fn broken() -> StoreError {
    StoreError::Poisoned
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_all(&self, _collection: &str) -> Result<Vec<Value>, StoreError> {
        Err(broken())
    }

    async fn find_one(&self, _collection: &str, _id: &ObjectId) -> Result<Option<Value>, StoreError> {
        Err(broken())
    }

    async fn insert_one(&self, _collection: &str, _fields: Fields) -> Result<ObjectId, StoreError> {
        Err(broken())
    }

    async fn set_fields(
        &self,
        _collection: &str,
        _id: &ObjectId,
        _fields: Fields,
        _upsert: bool,
    ) -> Result<bool, StoreError> {
        Err(broken())
    }

    async fn delete_one(&self, _collection: &str, _id: &ObjectId) -> Result<bool, StoreError> {
        Err(broken())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(broken())
    }
}

//! Generic CRUD execution against a document store.

use crate::config::ModelDescriptor;
use crate::error::AppError;
use crate::response::{deleted_message, not_found_message};
use crate::service::{FieldFilter, WriteMode};
use crate::store::{DocumentStore, Fields, ObjectId};
use serde_json::Value;

pub struct CrudService;

impl CrudService {
    /// All documents in the model's collection.
    pub async fn list(store: &dyn DocumentStore, model: &ModelDescriptor) -> Result<Vec<Value>, AppError> {
        Ok(store.find_all(&model.collection_name).await?)
    }

    /// Fetch one document by id. Returns JSON object or None.
    pub async fn read(
        store: &dyn DocumentStore,
        model: &ModelDescriptor,
        id: &ObjectId,
    ) -> Result<Option<Value>, AppError> {
        Ok(store.find_one(&model.collection_name, id).await?)
    }

    /// Insert the declared fields of `body` (absent ones as null). Returns the stored document.
    pub async fn create(
        store: &dyn DocumentStore,
        model: &ModelDescriptor,
        body: &Fields,
    ) -> Result<Value, AppError> {
        let fields = FieldFilter::apply(model, body, WriteMode::Full);
        let id = store.insert_one(&model.collection_name, fields).await?;
        tracing::debug!(model = %model.route_name, id = %id, "created");
        Self::reload(store, model, &id).await
    }

    /// Set every declared field (absent ones to null), creating the document if needed. Returns the stored document.
    pub async fn replace(
        store: &dyn DocumentStore,
        model: &ModelDescriptor,
        id: &ObjectId,
        body: &Fields,
    ) -> Result<Value, AppError> {
        let fields = FieldFilter::apply(model, body, WriteMode::Full);
        store.set_fields(&model.collection_name, id, fields, true).await?;
        Self::reload(store, model, id).await
    }

    /// Merge the declared, non-null fields into an existing document.
    /// Returns the updated document, or the not-found message if there is none.
    pub async fn patch(
        store: &dyn DocumentStore,
        model: &ModelDescriptor,
        id: &ObjectId,
        body: &Fields,
    ) -> Result<Value, AppError> {
        if store.find_one(&model.collection_name, id).await?.is_none() {
            return Ok(not_found_message(&model.route_name));
        }
        let fields = FieldFilter::apply(model, body, WriteMode::Partial);
        store.set_fields(&model.collection_name, id, fields, false).await?;
        Self::reload(store, model, id).await
    }

    /// Remove a document. Returns the deleted or not-found message.
    pub async fn delete(
        store: &dyn DocumentStore,
        model: &ModelDescriptor,
        id: &ObjectId,
    ) -> Result<Value, AppError> {
        if store.find_one(&model.collection_name, id).await?.is_none() {
            return Ok(not_found_message(&model.route_name));
        }
        store.delete_one(&model.collection_name, id).await?;
        Ok(deleted_message(&model.route_name))
    }

    // A concurrent delete between write and read leaves nothing to return.
    async fn reload(store: &dyn DocumentStore, model: &ModelDescriptor, id: &ObjectId) -> Result<Value, AppError> {
        Ok(store
            .find_one(&model.collection_name, id)
            .await?
            .unwrap_or_else(|| not_found_message(&model.route_name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelDef;
    use crate::store::MemoryStore;
    use serde_json::json;

    fn model() -> ModelDescriptor {
        ModelDescriptor::from_def(&ModelDef::new("OrderItem", ["sku", "quantity"]))
    }

    fn body(v: Value) -> Fields {
        v.as_object().cloned().unwrap()
    }

    fn oid(doc: &Value) -> ObjectId {
        ObjectId::parse_str(doc["_id"]["$oid"].as_str().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn create_persists_only_declared_fields() {
        let store = MemoryStore::new();
        let m = model();
        let created = CrudService::create(&store, &m, &body(json!({"sku": "A1", "quantity": 3, "extra": 1})))
            .await
            .unwrap();
        assert_eq!(created["sku"], "A1");
        assert!(created.get("extra").is_none());
        let stored = CrudService::read(&store, &m, &oid(&created)).await.unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn replace_upserts_unknown_id() {
        let store = MemoryStore::new();
        let m = model();
        let id = ObjectId::new();
        let doc = CrudService::replace(&store, &m, &id, &body(json!({"sku": "B2"}))).await.unwrap();
        assert_eq!(doc["_id"]["$oid"], id.to_hex());
        assert_eq!(doc["sku"], "B2");
        assert_eq!(doc["quantity"], Value::Null);
    }

    #[tokio::test]
    async fn patch_and_delete_on_missing_return_message() {
        let store = MemoryStore::new();
        let m = model();
        let id = ObjectId::new();
        let patched = CrudService::patch(&store, &m, &id, &body(json!({"sku": "C3"}))).await.unwrap();
        assert_eq!(patched, json!({"message": "order-item not found"}));
        assert_eq!(store.count("order_item"), 0);

        let deleted = CrudService::delete(&store, &m, &id).await.unwrap();
        assert_eq!(deleted, json!({"message": "order-item not found"}));
    }

    #[tokio::test]
    async fn patch_with_no_declared_fields_leaves_document_alone() {
        let store = MemoryStore::new();
        let m = model();
        let created = CrudService::create(&store, &m, &body(json!({"sku": "D4", "quantity": 1})))
            .await
            .unwrap();
        let patched = CrudService::patch(&store, &m, &oid(&created), &body(json!({"bogus": 1})))
            .await
            .unwrap();
        assert_eq!(patched, created);
    }
}

//! In-memory document store for tests and local runs. Mirrors the MongoDB semantics the handlers rely on.

use super::{id_json, DocumentStore, Fields, ObjectId};
use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Clone, Debug)]
struct StoredDocument {
    id: ObjectId,
    fields: Fields,
}

impl StoredDocument {
    fn to_json(&self) -> Value {
        let mut map = Fields::new();
        map.insert("_id".into(), id_json(&self.id));
        for (k, v) in &self.fields {
            map.insert(k.clone(), v.clone());
        }
        Value::Object(map)
    }
}

/// Collections keyed by name; documents kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of documents in a collection (0 if it was never written).
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map(Vec::len).unwrap_or(0))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .get(collection)
            .map(|docs| docs.iter().map(StoredDocument::to_json).collect())
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, id: &ObjectId) -> Result<Option<Value>, StoreError> {
        let guard = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| &d.id == id))
            .map(StoredDocument::to_json))
    }

    async fn insert_one(&self, collection: &str, fields: Fields) -> Result<ObjectId, StoreError> {
        let id = ObjectId::new();
        let mut guard = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, fields });
        Ok(id)
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Fields,
        upsert: bool,
    ) -> Result<bool, StoreError> {
        let mut guard = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let docs = guard.entry(collection.to_string()).or_default();
        if let Some(existing) = docs.iter_mut().find(|d| &d.id == id) {
            existing.fields.extend(fields);
            return Ok(true);
        }
        if upsert {
            docs.push(StoredDocument { id: *id, fields });
        }
        Ok(upsert)
    }

    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError> {
        let mut guard = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| &d.id != id);
        Ok(docs.len() < before)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

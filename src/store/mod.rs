//! Document store interface and its implementations (MongoDB, in-memory).
//!
//! Documents cross this boundary as JSON objects in relaxed extended-JSON form,
//! so the identifier of a stored document reads `{"_id": {"$oid": "<24 hex>"}}`.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use mongodb::bson::oid::ObjectId;

use crate::error::StoreError;
use async_trait::async_trait;
use serde_json::{Map, Value};

pub type Fields = Map<String, Value>;

/// Minimal document-store operations the CRUD handlers need.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in the collection, in store order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    async fn find_one(&self, collection: &str, id: &ObjectId) -> Result<Option<Value>, StoreError>;

    /// Insert a new document; the store assigns the id.
    async fn insert_one(&self, collection: &str, fields: Fields) -> Result<ObjectId, StoreError>;

    /// `$set` the given fields on the document. When `upsert` is true a missing document is created with `id`.
    /// Returns whether a document matched or was created.
    async fn set_fields(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Fields,
        upsert: bool,
    ) -> Result<bool, StoreError>;

    /// Returns whether a document was removed.
    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError>;

    /// Connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Parse a path id into an ObjectId (24 hex characters).
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// JSON projection of an ObjectId, matching the relaxed extended-JSON form.
pub(crate) fn id_json(id: &ObjectId) -> Value {
    serde_json::json!({ "$oid": id.to_hex() })
}

//! MongoDB-backed document store.

use super::{DocumentStore, Fields, ObjectId};
use crate::config::Settings;
use crate::error::StoreError;
use async_trait::async_trait;
use mongodb::bson::{doc, to_document, Bson, Document};
use mongodb::options::{ClientOptions, Credential};
use mongodb::{Client, Collection, Database};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: Database) -> Self {
        MongoStore { db }
    }

    /// Connect using `mongodb://{host}/{database}`; username/password, when set, are attached as credentials.
    pub async fn connect(settings: &Settings) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(settings.mongo_uri()).await?;
        if settings.db_username.is_some() {
            options.credential = Some(
                Credential::builder()
                    .username(settings.db_username.clone())
                    .password(settings.db_password.clone())
                    .build(),
            );
        }
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        let client = Client::with_options(options)?;
        tracing::info!(host = %settings.db_host, database = %settings.database_name, "mongodb client ready");
        Ok(Self::new(client.database(&settings.database_name)))
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

fn to_json(document: Document) -> Value {
    Bson::Document(document).into_relaxed_extjson()
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(collection, "find");
        let mut cursor = self.collection(collection).find(doc! {}).await?;
        let mut out = Vec::new();
        while cursor.advance().await? {
            out.push(to_json(cursor.deserialize_current()?));
        }
        Ok(out)
    }

    async fn find_one(&self, collection: &str, id: &ObjectId) -> Result<Option<Value>, StoreError> {
        tracing::debug!(collection, id = %id, "find_one");
        let found = self.collection(collection).find_one(doc! { "_id": *id }).await?;
        Ok(found.map(to_json))
    }

    async fn insert_one(&self, collection: &str, fields: Fields) -> Result<ObjectId, StoreError> {
        tracing::debug!(collection, "insert_one");
        let document = to_document(&fields)?;
        let result = self.collection(collection).insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: &ObjectId,
        fields: Fields,
        upsert: bool,
    ) -> Result<bool, StoreError> {
        tracing::debug!(collection, id = %id, upsert, "update_one");
        let set = to_document(&fields)?;
        // The server rejects an empty $set.
        if set.is_empty() {
            let coll = self.collection(collection);
            if coll.find_one(doc! { "_id": *id }).await?.is_some() {
                return Ok(true);
            }
            if upsert {
                coll.insert_one(doc! { "_id": *id }).await?;
            }
            return Ok(upsert);
        }
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": *id }, doc! { "$set": set })
            .upsert(upsert)
            .await?;
        Ok(result.matched_count > 0 || result.upserted_id.is_some())
    }

    async fn delete_one(&self, collection: &str, id: &ObjectId) -> Result<bool, StoreError> {
        tracing::debug!(collection, id = %id, "delete_one");
        let result = self.collection(collection).delete_one(doc! { "_id": *id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

//! In-memory document store
//!
//! Used by tests and by the `memory` backend. Nothing survives a restart.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::{broadcast, RwLock};

use crate::application::ports::outbound::{
    DocumentChange, DocumentPath, DocumentStorePort, DocumentSubscription, StoreError,
};

pub struct InMemoryDocumentStore {
    /// collection -> id -> document
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
    changes: broadcast::Sender<DocumentChange>,
}

impl InMemoryDocumentStore {
    pub fn new(channel_capacity: usize) -> Self {
        let (changes, _) = broadcast::channel(channel_capacity.max(1));
        Self {
            collections: RwLock::new(HashMap::new()),
            changes,
        }
    }

    fn publish(&self, path: &DocumentPath, data: Option<Value>) {
        // No receivers is fine
        let _ = self.changes.send(DocumentChange {
            path: path.clone(),
            data,
        });
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    fn server_timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(path.collection())
            .and_then(|docs| docs.get(path.id()))
            .cloned())
    }

    async fn set(&self, path: &DocumentPath, data: Value) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        collections
            .entry(path.collection().to_string())
            .or_default()
            .insert(path.id().to_string(), data.clone());

        // Publish under the write guard so listeners see writes in storage order
        self.publish(path, Some(data));
        Ok(())
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        let removed = collections
            .get_mut(path.collection())
            .and_then(|docs| docs.remove(path.id()));

        if removed.is_some() {
            self.publish(path, None);
        }
        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn where_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| doc.get(field) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn listen(&self, path: &DocumentPath) -> Result<DocumentSubscription, StoreError> {
        let receiver = self.changes.subscribe();
        let initial = self.get(path).await?;
        Ok(DocumentSubscription::new(path.clone(), initial, receiver))
    }
}

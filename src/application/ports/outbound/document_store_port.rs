//! Document store port - collection/document addressed JSON storage
//!
//! Writes are full overwrites and the last write wins. Listeners receive the
//! current value of a document first, then every later write or delete.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid document path: {0}")]
    InvalidPath(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Serialization(e.to_string())
    }
}

/// Address of one document: `collection/id`
///
/// The collection may itself be nested, e.g. `users/{sid}/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    collection: String,
    id: String,
}

impl DocumentPath {
    pub fn new(collection: impl Into<String>, id: impl ToString) -> Self {
        Self {
            collection: collection.into(),
            id: id.to_string(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}

/// Notification that a document was written (`Some`) or deleted (`None`)
#[derive(Debug, Clone)]
pub struct DocumentChange {
    pub path: DocumentPath,
    pub data: Option<Value>,
}

/// Live listener on one document
///
/// Dropping the subscription releases the listener.
pub struct DocumentSubscription {
    path: DocumentPath,
    initial: Option<Option<Value>>,
    receiver: broadcast::Receiver<DocumentChange>,
}

impl DocumentSubscription {
    /// `receiver` must be subscribed before `initial` is read so no write is missed
    pub fn new(
        path: DocumentPath,
        initial: Option<Value>,
        receiver: broadcast::Receiver<DocumentChange>,
    ) -> Self {
        Self {
            path,
            initial: Some(initial),
            receiver,
        }
    }

    /// Next snapshot of the document, or `None` once the store has shut down
    pub async fn next(&mut self) -> Option<Option<Value>> {
        if let Some(initial) = self.initial.take() {
            return Some(initial);
        }

        loop {
            match self.receiver.recv().await {
                Ok(change) if change.path == self.path => return Some(change.data),
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(path = %self.path, skipped, "Document listener lagged");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Timestamp assigned by the store for created/updated fields
    fn server_timestamp(&self) -> DateTime<Utc>;

    async fn get(&self, path: &DocumentPath) -> Result<Option<Value>, StoreError>;

    async fn set(&self, path: &DocumentPath, data: Value) -> Result<(), StoreError>;

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError>;

    /// All documents in a collection
    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Documents in a collection whose top-level `field` equals `value`
    async fn where_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError>;

    async fn listen(&self, path: &DocumentPath) -> Result<DocumentSubscription, StoreError>;
}

/// Read and decode one document
pub async fn read_document<T: DeserializeOwned>(
    store: &dyn DocumentStorePort,
    path: &DocumentPath,
) -> Result<Option<T>, StoreError> {
    match store.get(path).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Encode and write one document
pub async fn write_document<T: Serialize>(
    store: &dyn DocumentStorePort,
    path: &DocumentPath,
    document: &T,
) -> Result<(), StoreError> {
    store.set(path, serde_json::to_value(document)?).await
}

/// Decode every document matching `field == value`
pub async fn query_documents<T: DeserializeOwned>(
    store: &dyn DocumentStorePort,
    collection: &str,
    field: &str,
    value: &Value,
) -> Result<Vec<T>, StoreError> {
    store
        .where_eq(collection, field, value)
        .await?
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(StoreError::from))
        .collect()
}

/// Decode every document in a collection
pub async fn list_documents<T: DeserializeOwned>(
    store: &dyn DocumentStorePort,
    collection: &str,
) -> Result<Vec<T>, StoreError> {
    store
        .list(collection)
        .await?
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(StoreError::from))
        .collect()
}

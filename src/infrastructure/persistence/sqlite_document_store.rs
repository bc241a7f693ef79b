//! SQLite-backed document store
//!
//! All documents share one `documents` table keyed by `(collection, id)` and
//! hold their JSON as text. Change notifications are fanned out in-process.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::SqlitePool;
use tokio::sync::{broadcast, Mutex};

use crate::application::ports::outbound::{
    DocumentChange, DocumentPath, DocumentStorePort, DocumentSubscription, StoreError,
};

pub struct SqliteDocumentStore {
    pool: SqlitePool,
    changes: broadcast::Sender<DocumentChange>,
    /// Held across a write and its notification so listeners see storage order
    write_lock: Mutex<()>,
}

impl SqliteDocumentStore {
    pub async fn new(pool: SqlitePool, channel_capacity: usize) -> Result<Self, sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )
        "#,
        )
        .execute(&pool)
        .await?;

        let (changes, _) = broadcast::channel(channel_capacity.max(1));
        Ok(Self {
            pool,
            changes,
            write_lock: Mutex::new(()),
        })
    }

    fn publish(&self, path: &DocumentPath, data: Option<Value>) {
        let _ = self.changes.send(DocumentChange {
            path: path.clone(),
            data,
        });
    }

    fn decode(rows: Vec<(String,)>) -> Result<Vec<Value>, StoreError> {
        rows.into_iter()
            .map(|(data,)| serde_json::from_str(&data).map_err(StoreError::from))
            .collect()
    }
}

fn database_error(e: sqlx::Error) -> StoreError {
    StoreError::Database(e.to_string())
}

/// JSON path for a top-level field; only plain identifiers are accepted
fn field_path(field: &str) -> Result<String, StoreError> {
    let plain = !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !plain {
        return Err(StoreError::InvalidPath(format!("unsupported field '{}'", field)));
    }
    Ok(format!("$.{}", field))
}

#[async_trait]
impl DocumentStorePort for SqliteDocumentStore {
    fn server_timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn get(&self, path: &DocumentPath) -> Result<Option<Value>, StoreError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT data FROM documents WHERE collection = ? AND id = ?")
                .bind(path.collection())
                .bind(path.id())
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        match row {
            Some((data,)) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, path: &DocumentPath, data: Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(&data)?;
        let _guard = self.write_lock.lock().await;
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data, updated_at) VALUES (?, ?, ?, ?)
            ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at
        "#,
        )
        .bind(path.collection())
        .bind(path.id())
        .bind(text)
        .bind(self.server_timestamp().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        self.publish(path, Some(data));
        Ok(())
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(path.collection())
            .bind(path.id())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() > 0 {
            self.publish(path, None);
        }
        Ok(())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT data FROM documents WHERE collection = ? ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;
        Self::decode(rows)
    }

    async fn where_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<Value>, StoreError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT data FROM documents
            WHERE collection = ? AND json_extract(data, ?) = json_extract(?, '$')
            ORDER BY id
        "#,
        )
        .bind(collection)
        .bind(field_path(field)?)
        .bind(serde_json::to_string(value)?)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;
        Self::decode(rows)
    }

    async fn listen(&self, path: &DocumentPath) -> Result<DocumentSubscription, StoreError> {
        let receiver = self.changes.subscribe();
        let initial = self.get(path).await?;
        Ok(DocumentSubscription::new(path.clone(), initial, receiver))
    }
}

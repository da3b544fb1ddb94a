use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::{sqlite::SqlitePoolOptions, Executor, Pool, Row, Sqlite};
use tokio::sync::Mutex;

use crate::error::Error;

/// Get/set-by-key persistence. Every `set` replaces the whole value.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

#[derive(Debug)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    #[tracing::instrument]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        pool.execute("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, data TEXT NOT NULL)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let maybe_result = self
            .pool
            .fetch_optional(sqlx::query("SELECT data FROM kv WHERE key = ?1").bind(key))
            .await?;

        match maybe_result {
            Some(row) => Ok(Some(row.try_get("data")?)),
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.pool
            .execute(
                sqlx::query(
                    "INSERT INTO kv (key, data) VALUES (?1, ?2) \
                     ON CONFLICT(key) DO UPDATE SET data = excluded.data",
                )
                .bind(key)
                .bind(value),
            )
            .await?;

        Ok(())
    }
}

/// In-process store. Writes can be made to fail to exercise error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut data = HashMap::new();
        data.insert(key.to_string(), value.to_string());

        Self {
            data: Mutex::new(data),
            ..Self::default()
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::database_error("write rejected"));
        }

        self.data.lock().await.insert(key.into(), value.into());
        self.writes.fetch_add(1, Ordering::SeqCst);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sqlite_store_round_trip() {
        let store = SqliteStore::new("sqlite::memory:", 1).await.unwrap();

        assert_eq!(store.get("widgets").await.unwrap(), None);

        store.set("widgets", "[]").await.unwrap();
        store.set("widgets", r#"[{"name":"a"}]"#).await.unwrap();

        assert_eq!(
            store.get("widgets").await.unwrap().as_deref(),
            Some(r#"[{"name":"a"}]"#)
        );
    }

    #[test]
    fn memory_store_rejects_writes_on_demand() {
        use tokio_test::block_on;

        let store = MemoryStore::with_value("widgets", "[]");
        store.fail_writes(true);

        let err = block_on(store.set("widgets", "[1]")).unwrap_err();
        assert!(err.is_persistence_error());
        assert_eq!(block_on(store.get("widgets")).unwrap().as_deref(), Some("[]"));
        assert_eq!(store.writes(), 0);
    }
}

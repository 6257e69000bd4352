//! SQLite-backed law store.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use lawbook_core::{Category, Law, LawStore, PersistenceError, ValidatedLaw};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{statement, unavailable, StoreError};

/// Schema for the `laws` table. `creation_date` is filled in by the store.
const CREATE_LAWS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS laws (
        law_text TEXT NOT NULL,
        category TEXT NOT NULL,
        creation_date TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
    )
"#;

const INSERT_LAW: &str = r#"
    INSERT INTO laws (law_text, category, creation_date)
    VALUES (?1, ?2, strftime('%Y-%m-%d %H:%M:%f', 'now'))
"#;

const SELECT_LAWS: &str = r#"
    SELECT rowid AS id, law_text, category, creation_date
    FROM laws
    ORDER BY rowid
"#;

const COUNT_LAWS: &str = "SELECT COUNT(*) FROM laws";

/// Law store backed by an SQLite connection pool.
#[derive(Debug, Clone)]
pub struct SqliteLawStore {
    pool: SqlitePool,
}

impl SqliteLawStore {
    /// Open a connection pool for the configured database.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| StoreError::InvalidUrl(e.to_string()))?
            .create_if_missing(config.create_if_missing);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(options)
            .await
            .map_err(StoreError::Connect)?;

        info!(
            database_url = %config.database_url,
            max_connections = config.max_connections,
            "connected to law store"
        );

        Ok(Self { pool })
    }

    /// Connect and make sure the `laws` table exists.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = Self::connect(config).await?;
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the `laws` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_LAWS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Schema)?;
        debug!("law schema ready");
        Ok(())
    }

    /// All stored laws, oldest first.
    pub async fn list_laws(&self) -> Result<Vec<Law>, PersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        let rows = sqlx::query(SELECT_LAWS)
            .fetch_all(&mut *conn)
            .await
            .map_err(statement)?;

        rows.iter().map(law_from_row).collect()
    }

    /// Number of stored laws.
    pub async fn count_laws(&self) -> Result<i64, PersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        sqlx::query_scalar::<_, i64>(COUNT_LAWS)
            .fetch_one(&mut *conn)
            .await
            .map_err(statement)
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection. Later calls fail as unavailable.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("law store closed");
    }
}

#[async_trait]
impl LawStore for SqliteLawStore {
    async fn insert_law(&self, law: &ValidatedLaw) -> Result<(), PersistenceError> {
        // Returned to the pool when dropped, on every path out of this call.
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;

        let result = sqlx::query(INSERT_LAW)
            .bind(law.law_text())
            .bind(law.category().as_str())
            .execute(&mut *conn)
            .await
            .map_err(statement)?;

        debug!(rowid = result.last_insert_rowid(), "inserted law");
        Ok(())
    }

    async fn ping(&self) -> Result<(), PersistenceError> {
        let mut conn = self.pool.acquire().await.map_err(unavailable)?;
        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(statement)?;
        Ok(())
    }
}

fn law_from_row(row: &SqliteRow) -> Result<Law, PersistenceError> {
    let decode = |e: sqlx::Error| PersistenceError::Decode(e.to_string());

    let category: String = row.try_get("category").map_err(decode)?;
    let category = Category::from_str(&category)
        .map_err(|_| PersistenceError::Decode(format!("unknown category: {category}")))?;

    Ok(Law {
        id: row.try_get("id").map_err(decode)?,
        law_text: row.try_get("law_text").map_err(decode)?,
        category,
        creation_date: row.try_get::<NaiveDateTime, _>("creation_date").map_err(decode)?,
    })
}

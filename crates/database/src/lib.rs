//! SQLite persistence layer for Voicelead.
//!
//! This crate provides async database operations for captured leads using
//! SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{lead, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and ensure the schema exists
//!     let db = Database::connect("sqlite:leads.db?mode=rwc").await?;
//!     db.initialize().await?;
//!
//!     // Persist a captured lead
//!     let id = lead::save_lead(db.pool(), "conv-123", Some("John Smith"), None).await?;
//!     println!("saved lead #{id}");
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod lead;
pub mod models;

pub use error::{DatabaseError, Result};
pub use models::Lead;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Each operation borrows a connection for its own unit of work only.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/leads.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to lead store: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Ensure the leads schema exists and is up to date.
    ///
    /// Creates the `leads` table if absent, then runs the additive-only
    /// migration that adds the `ts` column to installations predating it.
    /// Existing rows are never touched; pre-migration rows keep a null
    /// timestamp. Safe to call more than once.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                conv_id TEXT,
                name TEXT,
                email TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        if !self.leads_has_column("ts").await? {
            tracing::info!("Adding ts column to leads table");
            sqlx::query("ALTER TABLE leads ADD COLUMN ts TEXT")
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    /// Check whether the leads table already has a column.
    async fn leads_has_column(&self, column: &str) -> Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM pragma_table_info('leads')
            WHERE name = ?
            "#,
        )
        .bind(column)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

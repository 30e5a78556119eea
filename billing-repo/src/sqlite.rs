//! SQLite lookup adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use billing_types::{Billing, BillingRepository, RepoError, Seller, SellerRepository};

use crate::types::{DbSeller, SqliteBillingRow};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        // Every connection to `:memory:` opens its own database.
        let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let repo = Self { pool };
        repo.create_schema().await?;
        Ok(repo)
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the database schema.
    pub async fn create_schema(&self) -> Result<(), RepoError> {
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }

    /// Registers a seller. Existing sellers are left untouched.
    pub async fn insert_seller(&self, seller: &Seller) -> Result<(), RepoError> {
        sqlx::query(r#"INSERT INTO sellers (code) VALUES (?) ON CONFLICT (code) DO NOTHING"#)
            .bind(&seller.code)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }

    /// Inserts a billing or replaces the amount of an existing one.
    pub async fn insert_billing(&self, billing: &Billing) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO billings (code, original_amount) VALUES (?, ?)
               ON CONFLICT (code) DO UPDATE SET original_amount = excluded.original_amount"#,
        )
        .bind(&billing.code)
        .bind(billing.original_amount.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl SellerRepository for SqliteRepo {
    async fn find_seller(&self, code: &str) -> Result<Option<Seller>, RepoError> {
        let row: Option<DbSeller> = sqlx::query_as(r#"SELECT code FROM sellers WHERE code = ?"#)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(Seller::from))
    }
}

#[async_trait]
impl BillingRepository for SqliteRepo {
    async fn find_billing(&self, code: &str) -> Result<Option<Billing>, RepoError> {
        let row: Option<SqliteBillingRow> =
            sqlx::query_as(r#"SELECT code, original_amount FROM billings WHERE code = ?"#)
                .bind(code)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(SqliteBillingRow::into_domain).transpose()
    }
}

//! PostgreSQL lookup adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use billing_types::{Billing, BillingRepository, RepoError, Seller, SellerRepository};

use crate::types::{DbSeller, PgBillingRow};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_tables_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Registers a seller. Existing sellers are left untouched.
    pub async fn insert_seller(&self, seller: &Seller) -> Result<(), RepoError> {
        sqlx::query(r#"INSERT INTO sellers (code) VALUES ($1) ON CONFLICT (code) DO NOTHING"#)
            .bind(&seller.code)
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;
        Ok(())
    }

    /// Inserts a billing or replaces the amount of an existing one.
    pub async fn insert_billing(&self, billing: &Billing) -> Result<(), RepoError> {
        sqlx::query(
            r#"INSERT INTO billings (code, original_amount) VALUES ($1, $2)
               ON CONFLICT (code) DO UPDATE SET original_amount = EXCLUDED.original_amount"#,
        )
        .bind(&billing.code)
        .bind(billing.original_amount.value())
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
impl SellerRepository for PostgresRepo {
    async fn find_seller(&self, code: &str) -> Result<Option<Seller>, RepoError> {
        let row: Option<DbSeller> = sqlx::query_as(r#"SELECT code FROM sellers WHERE code = $1"#)
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::Database(e.to_string()))?;

        Ok(row.map(Seller::from))
    }
}

#[async_trait]
impl BillingRepository for PostgresRepo {
    async fn find_billing(&self, code: &str) -> Result<Option<Billing>, RepoError> {
        let row: Option<PgBillingRow> =
            sqlx::query_as(r#"SELECT code, original_amount FROM billings WHERE code = $1"#)
                .bind(code)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepoError::Database(e.to_string()))?;

        row.map(PgBillingRow::into_domain).transpose()
    }
}

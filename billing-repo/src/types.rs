//! Database row types for the SQL adapters.

use sqlx::FromRow;

use billing_types::{Billing, RepoError};

/// Billing row from PostgreSQL (`NUMERIC` amount).
#[cfg(feature = "postgres")]
#[derive(FromRow)]
pub struct PgBillingRow {
    pub code: String,
    pub original_amount: rust_decimal::Decimal,
}

#[cfg(feature = "postgres")]
impl PgBillingRow {
    pub fn into_domain(self) -> Result<Billing, RepoError> {
        let amount = billing_types::Amount::new(self.original_amount)?;
        Ok(Billing::new(self.code, amount))
    }
}

/// Billing row from SQLite (amount stored as decimal text).
#[cfg(feature = "sqlite")]
#[derive(FromRow)]
pub struct SqliteBillingRow {
    pub code: String,
    pub original_amount: String,
}

#[cfg(feature = "sqlite")]
impl SqliteBillingRow {
    pub fn into_domain(self) -> Result<Billing, RepoError> {
        let amount = self.original_amount.parse::<billing_types::Amount>()?;
        Ok(Billing::new(self.code, amount))
    }
}

/// Seller row, shared by both backends.
#[derive(FromRow)]
pub struct DbSeller {
    pub code: String,
}

impl From<DbSeller> for billing_types::Seller {
    fn from(row: DbSeller) -> Self {
        billing_types::Seller::new(row.code)
    }
}

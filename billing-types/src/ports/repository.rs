//! Lookup port traits.
//!
//! Adapters (Postgres, SQLite, InMemory) implement these traits.
//! `Ok(None)` means the code does not exist; `Err` means the store
//! itself could not answer.

use crate::domain::{Billing, Seller};
use crate::error::RepoError;

/// Resolves sellers by code.
#[async_trait::async_trait]
pub trait SellerRepository: Send + Sync + 'static {
    /// Finds a seller by its unique code.
    async fn find_seller(&self, code: &str) -> Result<Option<Seller>, RepoError>;
}

/// Resolves billing records by code.
#[async_trait::async_trait]
pub trait BillingRepository: Send + Sync + 'static {
    /// Finds a billing by its unique code.
    async fn find_billing(&self, code: &str) -> Result<Option<Billing>, RepoError>;
}

/// Both lookups together, as the processing service needs them.
pub trait LookupRepository: SellerRepository + BillingRepository {}

impl<T: SellerRepository + BillingRepository> LookupRepository for T {}

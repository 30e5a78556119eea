//! In-memory lookup store.
//!
//! Backed by `DashMap`, so it can be shared across concurrent requests
//! without an outer lock. Used for local runs (`memory://`) and tests.

use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use serde::Deserialize;

use billing_types::{Billing, BillingRepository, RepoError, Seller, SellerRepository};

/// Reference data used to seed a lookup store.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
    #[serde(default)]
    pub sellers: Vec<String>,
    #[serde(default)]
    pub billings: Vec<Billing>,
}

impl SeedData {
    /// Reads seed data from a JSON file.
    ///
    /// ```json
    /// {"sellers": ["V001"], "billings": [{"code": "C001", "originalAmount": "100.00"}]}
    /// ```
    pub async fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = tokio::fs::read(path.as_ref()).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Thread-safe in-memory store of sellers and billings.
#[derive(Default)]
pub struct InMemoryStore {
    sellers: DashMap<String, Seller>,
    billings: DashMap<String, Billing>,
}

impl InMemoryStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the given seed data.
    pub fn from_seed(seed: &SeedData) -> Self {
        let store = Self::new();
        store.seed(seed);
        store
    }

    pub fn with_seller(self, code: impl Into<String>) -> Self {
        self.insert_seller(Seller::new(code));
        self
    }

    pub fn with_billing(self, billing: Billing) -> Self {
        self.insert_billing(billing);
        self
    }

    pub fn insert_seller(&self, seller: Seller) {
        self.sellers.insert(seller.code.clone(), seller);
    }

    /// Inserts or replaces a billing.
    pub fn insert_billing(&self, billing: Billing) {
        self.billings.insert(billing.code.clone(), billing);
    }

    pub fn seed(&self, seed: &SeedData) {
        for code in &seed.sellers {
            self.insert_seller(Seller::new(code.clone()));
        }
        for billing in &seed.billings {
            self.insert_billing(billing.clone());
        }
    }
}

#[async_trait]
impl SellerRepository for InMemoryStore {
    async fn find_seller(&self, code: &str) -> Result<Option<Seller>, RepoError> {
        Ok(self.sellers.get(code).map(|entry| entry.value().clone()))
    }
}

#[async_trait]
impl BillingRepository for InMemoryStore {
    async fn find_billing(&self, code: &str) -> Result<Option<Billing>, RepoError> {
        Ok(self.billings.get(code).map(|entry| entry.value().clone()))
    }
}

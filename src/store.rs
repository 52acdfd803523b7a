//! Product persistence. `ProductStore` is the seam between the service and the database.

mod memory;
mod postgres;

pub use memory::MemoryProductStore;
pub use postgres::{ensure_products_table, PgProductStore, PRODUCTS_TABLE};

use crate::model::{Product, ProductDraft};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Operator-facing cause. Never includes connection strings.
    pub fn detail(&self) -> String {
        match self {
            StoreError::Database(sqlx::Error::Configuration(_)) => "invalid database configuration".into(),
            StoreError::Database(sqlx::Error::Tls(_)) => "database TLS negotiation failed".into(),
            StoreError::Database(sqlx::Error::PoolTimedOut) => "timed out waiting for a database connection".into(),
            StoreError::Database(sqlx::Error::Database(db)) => db.message().to_string(),
            StoreError::Database(e) => e.to_string(),
            StoreError::Unavailable(msg) => msg.clone(),
        }
    }
}

/// CRUD primitives over products. Update and delete on a missing id report
/// `None` / `false` rather than failing.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// First row matching `id`, if any.
    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError>;

    /// Insert and return the row with its generated id and timestamps.
    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError>;

    /// Replace the editable fields and refresh `modified_at`.
    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Option<Product>, StoreError>;

    async fn delete(&self, id: i32) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

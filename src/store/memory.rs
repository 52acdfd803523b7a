//! In-process `ProductStore`. Ids are never reused after a delete.

use super::{ProductStore, StoreError};
use crate::model::{Product, ProductDraft};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Product>,
    last_id: i32,
}

#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Product>, StoreError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Unavailable("product id space exhausted".into()))?;
        inner.last_id = id;
        let now = Utc::now();
        let product = Product {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            price: draft.price,
            stock: draft.stock,
            created_at: now,
            modified_at: now,
        };
        inner.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i32, draft: &ProductDraft) -> Result<Option<Product>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.name = draft.name.clone();
        row.description = draft.description.clone();
        row.price = draft.price;
        row.stock = draft.stock;
        row.modified_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

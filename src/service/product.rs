//! Product CRUD over a `ProductStore`.

use crate::error::AppError;
use crate::model::{CreateProduct, Product, ProductDraft, UpdateProduct};
use crate::service::ProductValidator;
use crate::store::{ProductStore, StoreError};
use std::future::Future;
use std::sync::Arc;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        ProductService { store }
    }

    /// All products in store order.
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        let store = Arc::clone(&self.store);
        detached(async move { store.list().await }).await
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        let store = Arc::clone(&self.store);
        detached(async move { store.get(id).await })
            .await?
            .ok_or(AppError::NotFound(id))
    }

    /// Validate then insert. Invalid input never reaches the store.
    pub async fn create(&self, input: CreateProduct) -> Result<Product, AppError> {
        let draft = ProductDraft::from(input);
        ProductValidator::validate(&draft)?;
        let store = Arc::clone(&self.store);
        let product = detached(async move { store.insert(&draft).await }).await?;
        tracing::info!(id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Merge `input` over the stored product, validate the result, persist it.
    pub async fn update(&self, id: i32, input: UpdateProduct) -> Result<Product, AppError> {
        let current = self.get(id).await?;
        let draft = input.merge_onto(&current);
        ProductValidator::validate(&draft)?;
        let store = Arc::clone(&self.store);
        let product = detached(async move { store.update(id, &draft).await })
            .await?
            .ok_or(AppError::NotFound(id))?;
        tracing::info!(id, "product updated");
        Ok(product)
    }

    /// Remove and return the product.
    pub async fn delete(&self, id: i32) -> Result<Product, AppError> {
        let current = self.get(id).await?;
        let store = Arc::clone(&self.store);
        if !detached(async move { store.delete(id).await }).await? {
            return Err(AppError::NotFound(id));
        }
        tracing::info!(id, "product deleted");
        Ok(current)
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        let store = Arc::clone(&self.store);
        detached(async move { store.ping().await }).await
    }
}

/// Run a store call on its own task so dropping the request does not cancel it.
async fn detached<T, F>(call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, StoreError>> + Send + 'static,
    T: Send + 'static,
{
    match tokio::spawn(call).await {
        Ok(result) => Ok(result?),
        Err(e) => Err(AppError::Internal(format!("store task failed: {}", e))),
    }
}

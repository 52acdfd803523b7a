//! Shared application state for all routes.

use crate::service::ProductService;
use crate::store::ProductStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        AppState {
            products: ProductService::new(store),
        }
    }
}

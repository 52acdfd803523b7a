//! Product API: CRUD REST service for a single product entity over PostgreSQL.

pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::{AppError, ErrorBody, FieldError};
pub use model::{CreateProduct, Product, ProductDraft, UpdateProduct};
pub use openapi::ApiDoc;
pub use routes::{app, common_routes_with_ready, product_routes, PRODUCTS_BASE_PATH};
pub use service::{ProductService, ProductValidator};
pub use settings::{Settings, SettingsError};
pub use state::AppState;
pub use store::{ensure_products_table, MemoryProductStore, PgProductStore, ProductStore, StoreError};

//! Product CRUD routes, mounted under `PRODUCTS_BASE_PATH`.

use crate::handlers::product::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const PRODUCTS_BASE_PATH: &str = "/api/products";

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route("/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}

//! OpenAPI document for the product routes.

use crate::error::ErrorBody;
use crate::model::{CreateProduct, Product, UpdateProduct};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::product::list,
        crate::handlers::product::read,
        crate::handlers::product::create,
        crate::handlers::product::update,
        crate::handlers::product::delete,
    ),
    components(schemas(Product, CreateProduct, UpdateProduct, ErrorBody)),
    tags((name = "products", description = "Product CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_json))
}

//! Product CRUD handlers: list, read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{CreateProduct, Product, UpdateProduct};
use crate::response::{confirmation, success_many, success_one, success_one_ok};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products, wrapped in `data` with `meta.count`", body = [Product]),
        (status = 500, description = "Store error", body = ErrorBody),
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.products.list().await?;
    Ok(success_many(rows))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product, wrapped in `data`", body = Product),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    )
)]
pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let row = state.products.get(id).await?;
    Ok(success_one_ok(row))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Created product with its generated id", body = Product),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateProduct>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let row = state.products.create(body).await?;
    Ok(success_one(row))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Confirmation with the merged product", body = Product),
        (status = 400, description = "Invalid input", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateProduct>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let row = state.products.update(id, body).await?;
    Ok(confirmation("product updated", row))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Confirmation with the removed product", body = Product),
        (status = 404, description = "No such product", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let row = state.products.delete(id).await?;
    Ok(confirmation("product deleted", row))
}

//! Router assembly.

mod common;
mod product;

pub use common::common_routes_with_ready;
pub use product::{product_routes, PRODUCTS_BASE_PATH};

use crate::error::internal_error_body;
use crate::openapi::openapi_routes;
use crate::settings::Settings;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json, Router,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Full application: common, docs and product routes with body limit, tracing and panic capture.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(openapi_routes())
        .nest(PRODUCTS_BASE_PATH, product_routes(state))
        .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let cause = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %cause, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(internal_error_body())).into_response()
}

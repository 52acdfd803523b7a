//! Typed errors and HTTP mapping.

use crate::store::StoreError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// One failed field check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid input: {}", join_fields(.0))]
    InvalidInput(Vec<FieldError>),
    #[error("product {0} not found")]
    NotFound(i32),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("internal: {0}")]
    Internal(String),
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // A body cut off by the size limit has no content-length to reject it up front.
        if matches!(rejection, JsonRejection::BytesRejection(_))
            && rejection.status() == StatusCode::PAYLOAD_TOO_LARGE
        {
            return AppError::PayloadTooLarge;
        }
        AppError::InvalidInput(vec![FieldError::new("body", rejection.body_text())])
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(vec![FieldError::new("id", rejection.body_text())])
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub detail: Option<serde_json::Value>,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::InvalidInput(errors) => ErrorBody {
                code: "invalid_input".into(),
                message: "invalid input".into(),
                detail: serde_json::to_value(errors).ok(),
            },
            AppError::NotFound(id) => ErrorBody {
                code: "not_found".into(),
                message: format!("product {} not found", id),
                detail: None,
            },
            AppError::PayloadTooLarge => ErrorBody {
                code: "payload_too_large".into(),
                message: "request body too large".into(),
                detail: None,
            },
            AppError::Store(e) => {
                tracing::error!(error = %e, "store call failed");
                ErrorBody {
                    code: "store_error".into(),
                    message: "database error".into(),
                    detail: Some(serde_json::Value::String(e.detail())),
                }
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                internal_error_body()
            }
        };
        (status, Json(body)).into_response()
    }
}

/// Body for any 500 whose cause must not reach the client.
pub fn internal_error_body() -> ErrorBody {
    ErrorBody {
        code: "internal_error".into(),
        message: "internal server error".into(),
        detail: None,
    }
}

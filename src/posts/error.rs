use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failures raised by store operations. The `Display` strings are the exact
/// `detail` messages sent on the wire.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostStoreError {
    #[error("Post not found")]
    NotFound(i64),

    #[error("Post with this ID already exists")]
    AlreadyExists(i64),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for PostStoreError {
    fn into_response(self) -> Response {
        let status = match self {
            PostStoreError::NotFound(_) => StatusCode::NOT_FOUND,
            PostStoreError::AlreadyExists(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// A single offending field in a rejected request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub error: &'static str,
}

/// Rejection produced by the body decoding step before any store operation
/// runs. Rendered as a 422 with one entry per offending field.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("request body failed validation")]
pub struct BodyValidationError {
    pub errors: Vec<FieldError>,
}

impl IntoResponse for BodyValidationError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ValidationBody {
            detail: Vec<FieldError>,
        }

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationBody {
                detail: self.errors,
            }),
        )
            .into_response()
    }
}

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;

use super::error::{BodyValidationError, FieldError};
use super::types::Post;

pub async fn list_posts_handler(State(app_state): State<AppState>) -> Json<Vec<Post>> {
    Json(app_state.store.list().await)
}

pub async fn get_post_handler(
    State(app_state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Response {
    match app_state.store.get(post_id).await {
        Ok(post) => Json(post).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_post_handler(
    State(app_state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let post = match decode_post_body(&body) {
        Ok(post) => post,
        Err(rejection) => return rejection.into_response(),
    };

    match app_state.store.create(post).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_post_handler(
    State(app_state): State<AppState>,
    Path(post_id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let post = match decode_post_body(&body) {
        Ok(post) => post,
        Err(rejection) => return rejection.into_response(),
    };

    match app_state.store.update(post_id, post).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_post_handler(
    State(app_state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Response {
    match app_state.store.delete(post_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Shape check for write bodies, run before any store operation. Both fields
/// are required and never defaulted, on update as much as on create.
pub(crate) fn decode_post_body(body: &Value) -> Result<Post, BodyValidationError> {
    let Some(object) = body.as_object() else {
        return Err(BodyValidationError {
            errors: vec![FieldError {
                field: "body",
                error: "value is not a valid object",
            }],
        });
    };

    let mut errors = Vec::new();

    let id = match object.get("id") {
        None => {
            errors.push(FieldError {
                field: "id",
                error: "field required",
            });
            None
        }
        Some(value) => match value.as_i64() {
            Some(id) => Some(id),
            None => {
                errors.push(FieldError {
                    field: "id",
                    error: "value is not a valid integer",
                });
                None
            }
        },
    };

    let content = match object.get("content") {
        None => {
            errors.push(FieldError {
                field: "content",
                error: "field required",
            });
            None
        }
        Some(value) => match value.as_str() {
            Some(content) => Some(content.to_string()),
            None => {
                errors.push(FieldError {
                    field: "content",
                    error: "value is not a valid string",
                });
                None
            }
        },
    };

    match (id, content) {
        (Some(id), Some(content)) => Ok(Post { id, content }),
        _ => Err(BodyValidationError { errors }),
    }
}

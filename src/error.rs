// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::store::models::ValidationError;
use crate::store::StoreError;

/// HTTP-boundary errors. Three kinds only: the request body was bad,
/// the target record does not exist, or the store itself failed.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request - request body failed validation
    BadRequest(String),

    // 404 Not Found - id matches no stored record
    NotFound(String),

    // 500 Internal Server Error - store-layer failure; context names
    // the operation that failed, detail carries the store message
    Store {
        context: &'static str,
        detail: String,
    },
}

impl ApiError {
    /// Wrap a store failure, logging the underlying error before it is
    /// flattened into the response payload.
    pub fn store(context: &'static str, err: StoreError) -> Self {
        tracing::error!("{}: {}", context, err);
        ApiError::Store {
            context,
            detail: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => write!(f, "{}", msg),
            ApiError::Store { context, detail } => write!(f, "{}: {}", context, detail),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum. NotFound renders the
// update path's {"message": ...} wire shape; the delete handlers
// build their {"error": ...} form inline.
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = match self {
            ApiError::BadRequest(msg) => json!({ "error": msg }),
            ApiError::NotFound(msg) => json!({ "message": msg }),
            ApiError::Store { context, detail } => json!({ "message": context, "error": detail }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_become_bad_requests() {
        let err: ApiError = ValidationError::MissingField("name").into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing required field: name");
    }

    #[test]
    fn store_errors_are_internal() {
        let err = ApiError::store("Error fetching links", StoreError::InvalidStoreUrl);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn not_found_is_404() {
        let err = ApiError::NotFound("Link not found".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::models::LinkDraft;
use crate::store::StoreError;
use crate::store::repository::LinkRepository;

/// GET /api/links - List all links in insertion order
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let links = LinkRepository::new(state.pool)
        .list()
        .await
        .map_err(|e| ApiError::store("Error fetching links", e))?;

    Ok(Json(links).into_response())
}

/// POST /api/links - Create a link; the store assigns the id
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let draft = LinkDraft::from_value(&payload)?;

    let link = LinkRepository::new(state.pool)
        .create(&draft)
        .await
        .map_err(|e| ApiError::store("Error creating link", e))?;

    Ok((StatusCode::CREATED, Json(link)).into_response())
}

/// PUT /api/links/:id - Replace all fields of a link
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let draft = LinkDraft::from_value(&payload)?;

    // An id that is not a UUID cannot match any stored record
    let Ok(id) = id.parse::<Uuid>() else {
        return Err(ApiError::NotFound("Link not found".to_string()));
    };

    match LinkRepository::new(state.pool).update(id, &draft).await {
        Ok(link) => Ok(Json(link).into_response()),
        Err(StoreError::NotFound(_)) => Err(ApiError::NotFound("Link not found".to_string())),
        Err(e) => Err(ApiError::store("Error updating link", e)),
    }
}

/// DELETE /api/links/:id - Remove a link
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let not_found =
        || (StatusCode::NOT_FOUND, Json(json!({ "error": "Link not found" }))).into_response();

    let Ok(id) = id.parse::<Uuid>() else {
        return Ok(not_found());
    };

    match LinkRepository::new(state.pool).delete(id).await {
        Ok(()) => Ok(Json(json!({ "message": "Link deleted successfully" })).into_response()),
        Err(StoreError::NotFound(_)) => Ok(not_found()),
        Err(e) => Err(ApiError::store("Error deleting link", e)),
    }
}

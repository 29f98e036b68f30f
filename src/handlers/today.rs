use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::store::models::TodayDraft;
use crate::store::StoreError;
use crate::store::repository::TodayRepository;

/// GET /api/today - List all today entries in insertion order
pub async fn list(State(state): State<AppState>) -> Result<Response, ApiError> {
    let entries = TodayRepository::new(state.pool)
        .list()
        .await
        .map_err(|e| ApiError::store("Error fetching today entries", e))?;

    Ok(Json(entries).into_response())
}

/// POST /api/today - Create a today entry; the store assigns the id
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let draft = TodayDraft::from_value(&payload)?;

    let entry = TodayRepository::new(state.pool)
        .create(&draft)
        .await
        .map_err(|e| ApiError::store("Error creating today entry", e))?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

/// PUT /api/today/:id - Replace all fields of a today entry
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Response, ApiError> {
    let draft = TodayDraft::from_value(&payload)?;

    // An id that is not a UUID cannot match any stored record
    let Ok(id) = id.parse::<Uuid>() else {
        return Err(ApiError::NotFound("Today entry not found".to_string()));
    };

    match TodayRepository::new(state.pool).update(id, &draft).await {
        Ok(entry) => Ok(Json(entry).into_response()),
        Err(StoreError::NotFound(_)) => {
            Err(ApiError::NotFound("Today entry not found".to_string()))
        }
        Err(e) => Err(ApiError::store("Error updating today entry", e)),
    }
}

/// DELETE /api/today/:id - Remove a today entry
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let not_found = || {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Today entry not found" })),
        )
            .into_response()
    };

    let Ok(id) = id.parse::<Uuid>() else {
        return Ok(not_found());
    };

    match TodayRepository::new(state.pool).delete(id).await {
        Ok(()) => {
            Ok(Json(json!({ "message": "Today entry deleted successfully" })).into_response())
        }
        Err(StoreError::NotFound(_)) => Ok(not_found()),
        Err(e) => Err(ApiError::store("Error deleting today entry", e)),
    }
}

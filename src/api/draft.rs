//! Draft editing endpoints

use axum::{extract::State, http::StatusCode};

use crate::api::state::AppState;
use crate::api::types::{ApiError, DraftFieldUpdate, Json, UserResponse};

/// GET /api/draft
pub async fn get_draft(State(state): State<AppState>) -> Result<Json<UserResponse>, ApiError> {
    state
        .directory
        .draft()
        .await
        .map(|draft| Json(UserResponse::from(draft)))
        .ok_or_else(|| ApiError::not_found("No draft is open"))
}

/// PATCH /api/draft
pub async fn update_draft(
    State(state): State<AppState>,
    Json(update): Json<DraftFieldUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    let DraftFieldUpdate {
        container,
        field,
        value,
    } = update;

    let draft = match container {
        Some(container) => {
            state
                .directory
                .set_nested_field_named(&container, &field, value)
                .await?
        }
        None => state.directory.set_field_named(&field, value).await?,
    };

    Ok(Json(UserResponse::from(draft)))
}

/// POST /api/draft/commit
pub async fn commit_draft(State(state): State<AppState>) -> Result<Json<UserResponse>, ApiError> {
    let saved = state.directory.save_draft().await?;
    Ok(Json(UserResponse::from(saved)))
}

/// DELETE /api/draft
pub async fn cancel_draft(State(state): State<AppState>) -> StatusCode {
    state.directory.cancel_draft().await;
    StatusCode::NO_CONTENT
}

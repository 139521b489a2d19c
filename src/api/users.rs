//! User directory endpoints

use axum::{extract::State, http::StatusCode};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ListUsersResponse, Path, ReloadResponse, UserResponse};
use crate::domain::{User, UserId};

/// GET /api/users
pub async fn list_users(State(state): State<AppState>) -> Json<ListUsersResponse> {
    let status = state.directory.status().await;
    let users: Vec<UserResponse> = state
        .directory
        .users()
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();
    let total = users.len();

    Json(ListUsersResponse {
        status,
        users,
        total,
    })
}

/// POST /api/users/reload
pub async fn reload_users(State(state): State<AppState>) -> (StatusCode, Json<ReloadResponse>) {
    debug!("Reload requested");

    let status = state.directory.start_load().await;
    (StatusCode::ACCEPTED, Json(ReloadResponse { status }))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.directory.get(UserId::new(id)).await?;
    Ok(Json(UserResponse::from(user)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(user): Json<User>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = id, "Updating user");

    let user = state.directory.update(UserId::new(id), user).await?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = id, "Deleting user");

    let removed = state.directory.delete(UserId::new(id)).await?;
    Ok(Json(UserResponse::from(removed)))
}

/// POST /api/users/{id}/edit
pub async fn edit_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserResponse>, ApiError> {
    let draft = state.directory.edit(UserId::new(id)).await?;
    Ok(Json(UserResponse::from(draft)))
}

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::draft;
use super::health;
use super::notifications;
use super::state::AppState;
use super::users;

fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/reload", post(users::reload_users))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/{id}/edit", post(users::edit_user))
}

fn create_draft_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(draft::get_draft)
                .patch(draft::update_draft)
                .delete(draft::cancel_draft),
        )
        .route("/commit", post(draft::commit_draft))
}

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Directory API
        .nest("/api/users", create_users_router())
        .nest("/api/draft", create_draft_router())
        .route("/api/notifications", get(notifications::list_notifications))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

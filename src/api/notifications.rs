//! Notification feed endpoint

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{Json, Query};
use crate::infrastructure::notification::FeedEntry;

#[derive(Debug, Default, Deserialize)]
pub struct NotificationsQuery {
    /// Only entries newer than this sequence number
    pub after: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<FeedEntry>,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationsQuery>,
) -> Json<NotificationsResponse> {
    let notifications = match query.after {
        Some(sequence) => state.feed.since(sequence),
        None => state.feed.recent(),
    };

    Json(NotificationsResponse { notifications })
}

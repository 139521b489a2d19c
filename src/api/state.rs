//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::notification::NotificationFeed;
use crate::infrastructure::services::DirectoryService;

/// Handles shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub directory: Arc<DirectoryService>,
    pub feed: Arc<NotificationFeed>,
}

impl AppState {
    pub fn new(directory: Arc<DirectoryService>, feed: Arc<NotificationFeed>) -> Self {
        Self { directory, feed }
    }
}

//! User Directory
//!
//! Loads a list of users from a REST endpoint and lets clients browse,
//! edit and delete them locally:
//! - Optimistic in-memory updates and deletes
//! - Draft editing isolated from the list until saved
//! - Load status and user-facing notifications

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{NotificationSink, UserSource};
use infrastructure::{
    notification::{CompositeNotificationSink, NotificationFeed, TracingNotificationSink},
    services::DirectoryService,
    source::HttpUserSource,
};
use tracing::info;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let source = HttpUserSource::from_config(&config.source)?;
    info!(endpoint = source.endpoint(), "Using HTTP user source");
    let source: Arc<dyn UserSource> = Arc::new(source);

    let feed = Arc::new(NotificationFeed::new(config.notifications.capacity));
    let feed_sink: Arc<dyn NotificationSink> = feed.clone();
    let notifier: Arc<dyn NotificationSink> = Arc::new(
        CompositeNotificationSink::new()
            .with(Arc::new(TracingNotificationSink))
            .with(feed_sink),
    );

    let directory = Arc::new(DirectoryService::new(source, notifier));

    Ok(AppState::new(directory, feed))
}

//! Notification sinks
//!
//! The directory reports outcomes through [`NotificationSink`]. These sinks
//! log them, keep a feed for the view layer, or fan out to several others.

mod feed;

pub use feed::{FeedEntry, NotificationFeed};

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::NotificationSink;
use crate::domain::directory::{Notification, Severity};

/// Logs every notification through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: &Notification) {
        match notification.severity() {
            Severity::Error => error!(
                title = notification.title(),
                notification = ?notification,
                "{}",
                notification.message()
            ),
            Severity::Info => info!(title = notification.title(), "{}", notification.message()),
        }
    }
}

/// Forwards each notification to every inner sink, in order
#[derive(Debug, Default, Clone)]
pub struct CompositeNotificationSink {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl CompositeNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl NotificationSink for CompositeNotificationSink {
    fn notify(&self, notification: &Notification) {
        for sink in &self.sinks {
            sink.notify(notification);
        }
    }
}

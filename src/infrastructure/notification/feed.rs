//! Bounded feed of recent notifications, read by the view layer

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::NotificationSink;
use crate::domain::directory::{Notification, Severity};

/// A notification as presented to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub sequence: u64,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub at: DateTime<Utc>,
    pub notification: Notification,
}

#[derive(Debug, Default)]
struct FeedInner {
    entries: VecDeque<FeedEntry>,
    next_sequence: u64,
}

/// Keeps the newest `capacity` notifications, oldest first
#[derive(Debug)]
pub struct NotificationFeed {
    capacity: usize,
    inner: Mutex<FeedInner>,
}

impl NotificationFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            inner: Mutex::new(FeedInner::default()),
        }
    }

    pub fn recent(&self) -> Vec<FeedEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    /// Entries with a sequence number greater than `sequence`
    pub fn since(&self, sequence: u64) -> Vec<FeedEntry> {
        self.lock()
            .entries
            .iter()
            .filter(|entry| entry.sequence > sequence)
            .cloned()
            .collect()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> MutexGuard<'_, FeedInner> {
        // Entries are pushed whole, so a poisoned lock still guards a valid deque
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for NotificationFeed {
    fn notify(&self, notification: &Notification) {
        let mut inner = self.lock();
        inner.next_sequence += 1;

        let entry = FeedEntry {
            sequence: inner.next_sequence,
            severity: notification.severity(),
            title: notification.title().to_string(),
            message: notification.message(),
            at: Utc::now(),
            notification: notification.clone(),
        };

        if inner.entries.len() == self.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(entry);
    }
}

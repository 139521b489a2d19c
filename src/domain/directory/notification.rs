//! Events the directory reports to the presentation layer

use serde::Serialize;
use std::fmt::Debug;

use crate::domain::user::User;

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

/// Outcome of a directory operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    LoadSucceeded { count: usize },
    LoadFailed { reason: String },
    UserUpdated { user: User },
    UserDeleted { user: User },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Self::LoadFailed { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::LoadSucceeded { .. } => "Success!",
            Self::LoadFailed { .. } => "Error",
            Self::UserUpdated { .. } => "User Updated!",
            Self::UserDeleted { .. } => "User Deleted",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::LoadSucceeded { count } => format!("Loaded {} users successfully.", count),
            Self::LoadFailed { .. } => "Failed to load users. Please try again.".to_string(),
            Self::UserUpdated { user } => {
                format!("{}'s profile has been updated successfully.", user.name())
            }
            Self::UserDeleted { user } => format!("{} has been removed successfully.", user.name()),
        }
    }
}

/// Receiver for directory notifications
pub trait NotificationSink: Send + Sync + Debug {
    fn notify(&self, notification: &Notification);
}

//! Domain layer - core types, the user directory and its editing rules

pub mod directory;
pub mod error;
pub mod user;

pub use directory::{
    DraftEditor, LoadStatus, Notification, NotificationSink, UserListStore, UserSource,
};
pub use error::DomainError;
pub use user::{User, UserId};

//! User directory domain
//!
//! The ordered user list, the draft editor that stages edits against it, the
//! load status, the source seam for the bulk load and the notifications the
//! directory emits.

mod draft;
mod notification;
mod source;
mod status;
mod store;

pub use draft::DraftEditor;
pub use notification::{Notification, NotificationSink, Severity};
pub use source::UserSource;
pub use status::LoadStatus;
pub use store::UserListStore;

#[cfg(test)]
pub use notification::mock::RecordingSink;
#[cfg(test)]
pub use source::mock::MockUserSource;

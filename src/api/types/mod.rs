//! API request/response types

pub mod error;
pub mod json;
pub mod path;
pub mod query;
pub mod user;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
pub use path::Path;
pub use query::Query;
pub use user::{AvatarUrls, DraftFieldUpdate, ListUsersResponse, ReloadResponse, UserResponse};

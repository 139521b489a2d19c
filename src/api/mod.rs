//! API layer - HTTP endpoints rendering the user directory

pub mod draft;
pub mod health;
pub mod notifications;
pub mod router;
pub mod state;
pub mod types;
pub mod users;

pub use router::create_router;
pub use state::AppState;

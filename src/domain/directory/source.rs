//! Source trait for the bulk user load

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;
use crate::domain::user::User;

/// Produces the full list of users, or fails with `LoadFailure`
#[async_trait]
pub trait UserSource: Send + Sync + Debug {
    async fn fetch_users(&self) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Notify, RwLock};

    /// Mock source for testing
    #[derive(Debug, Default)]
    pub struct MockUserSource {
        users: RwLock<Vec<User>>,
        failure: RwLock<Option<String>>,
        gate: Option<Arc<Notify>>,
        panics: bool,
        calls: AtomicUsize,
    }

    impl MockUserSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_users(users: Vec<User>) -> Self {
            Self {
                users: RwLock::new(users),
                ..Self::default()
            }
        }

        pub fn failing(reason: impl Into<String>) -> Self {
            Self {
                failure: RwLock::new(Some(reason.into())),
                ..Self::default()
            }
        }

        /// Panic inside every fetch
        pub fn panicking() -> Self {
            Self {
                panics: true,
                ..Self::default()
            }
        }

        /// Hold every fetch until the returned handle is notified
        pub fn gated(mut self) -> (Self, Arc<Notify>) {
            let gate = Arc::new(Notify::new());
            self.gate = Some(gate.clone());
            (self, gate)
        }

        pub async fn set_users(&self, users: Vec<User>) {
            *self.users.write().await = users;
        }

        pub async fn set_failure(&self, reason: Option<&str>) {
            *self.failure.write().await = reason.map(str::to_string);
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserSource for MockUserSource {
        async fn fetch_users(&self) -> Result<Vec<User>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(gate) = &self.gate {
                gate.notified().await;
            }

            if self.panics {
                panic!("user source exploded");
            }

            if let Some(reason) = self.failure.read().await.as_ref() {
                return Err(DomainError::load_failure(reason.clone()));
            }

            Ok(self.users.read().await.clone())
        }
    }
}

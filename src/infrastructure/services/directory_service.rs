//! Directory service - load, browse, edit and delete users
//!
//! Owns the user list, the draft editor and the load status behind one lock.
//! The bulk load is the only operation that awaits anything: it is split into
//! a locked begin (enter `Loading`), an unlocked fetch and a locked finish
//! (apply the result), so edits can never interleave with a half-applied load.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::directory::{DraftEditor, LoadStatus, Notification, UserListStore};
use crate::domain::user::{NestedField, UserField};
use crate::domain::{DomainError, NotificationSink, User, UserId, UserSource};

#[derive(Debug, Default)]
struct DirectoryState {
    status: LoadStatus,
    store: UserListStore,
    editor: DraftEditor,
}

impl DirectoryState {
    fn ensure_not_loading(&self) -> Result<(), DomainError> {
        if self.status.is_loading() {
            return Err(DomainError::invalid_state(
                "Users are still loading; try again once the load completes",
            ));
        }
        Ok(())
    }
}

/// Coordinates the user list, the draft editor and the bulk load
#[derive(Debug)]
pub struct DirectoryService {
    source: Arc<dyn UserSource>,
    notifier: Arc<dyn NotificationSink>,
    state: Mutex<DirectoryState>,
}

impl DirectoryService {
    /// Create an empty, not yet loaded directory
    pub fn new(source: Arc<dyn UserSource>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            source,
            notifier,
            state: Mutex::new(DirectoryState::default()),
        }
    }

    // Loading

    /// Load the full user list and wait for the result.
    ///
    /// When a load is already outstanding this returns `Loading` without
    /// issuing a second fetch.
    pub async fn load(&self) -> Result<LoadStatus, DomainError> {
        if !self.begin_load().await {
            return Ok(LoadStatus::Loading);
        }

        let result = self.fetch().await;
        self.finish_load(result).await
    }

    /// Re-issue the load, typically after `LoadFailed`
    pub async fn retry(&self) -> Result<LoadStatus, DomainError> {
        info!("Retrying user load");
        self.load().await
    }

    /// Start a load in the background and return immediately
    pub async fn start_load(self: &Arc<Self>) -> LoadStatus {
        if self.begin_load().await {
            let service = Arc::clone(self);

            tokio::spawn(async move {
                let result = service.fetch().await;

                // The failure is recorded in the status and the notifications
                if let Err(e) = service.finish_load(result).await {
                    debug!(error = %e, "Background user load failed");
                }
            });
        }

        self.status().await
    }

    /// Run the fetch on its own task so a panicking source still ends the load
    async fn fetch(&self) -> Result<Vec<User>, DomainError> {
        let source = Arc::clone(&self.source);

        match tokio::spawn(async move { source.fetch_users().await }).await {
            Ok(result) => result,
            Err(e) => Err(DomainError::load_failure(format!("User load task failed: {}", e))),
        }
    }

    async fn begin_load(&self) -> bool {
        let mut state = self.state.lock().await;

        if state.status.is_loading() {
            debug!("User load already in flight, not starting another");
            return false;
        }

        if state.editor.is_open() {
            debug!(user_id = ?state.editor.original_id(), "Discarding open draft before load");
            state.editor.cancel();
        }

        state.status = LoadStatus::Loading;
        info!("Loading users");
        true
    }

    async fn finish_load(
        &self,
        result: Result<Vec<User>, DomainError>,
    ) -> Result<LoadStatus, DomainError> {
        let mut state = self.state.lock().await;

        match result {
            Ok(users) => {
                state.store.replace_all(users);
                let count = state.store.len();

                state.status = LoadStatus::Ready {
                    count,
                    loaded_at: Utc::now(),
                };
                self.notifier.notify(&Notification::LoadSucceeded { count });

                Ok(state.status.clone())
            }
            Err(err) => {
                let err = match err {
                    DomainError::LoadFailure { .. } => err,
                    other => DomainError::load_failure(other.to_string()),
                };
                let reason = err.to_string();
                warn!(error = %reason, "Failed to load users");

                state.status = LoadStatus::LoadFailed {
                    reason: reason.clone(),
                };
                self.notifier.notify(&Notification::LoadFailed { reason });

                Err(err)
            }
        }
    }

    // Reads

    pub async fn status(&self) -> LoadStatus {
        self.state.lock().await.status.clone()
    }

    /// Snapshot of the list in display order
    pub async fn users(&self) -> Vec<User> {
        self.state.lock().await.store.snapshot()
    }

    /// Get a user by ID, returning an error if not found
    pub async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.state
            .lock()
            .await
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))
    }

    /// The draft being edited, if any
    pub async fn draft(&self) -> Option<User> {
        self.state.lock().await.editor.draft().cloned()
    }

    // Direct mutations

    /// Replace a user in place
    pub async fn update(&self, id: UserId, user: User) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;

        state.store.update_by_id(id, user.clone())?;
        info!(user_id = %id, "Updated user");
        self.notifier
            .notify(&Notification::UserUpdated { user: user.clone() });

        Ok(user)
    }

    /// Remove a user without going through the draft editor
    pub async fn delete(&self, id: UserId) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;

        let removed = state.store.remove_by_id(id)?;
        info!(user_id = %id, "Deleted user");
        self.notifier.notify(&Notification::UserDeleted {
            user: removed.clone(),
        });

        Ok(removed)
    }

    // Draft editing

    /// Open the editor on a copy of the user with `id`
    pub async fn edit(&self, id: UserId) -> Result<User, DomainError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        state.ensure_not_loading()?;

        let user = state
            .store
            .get(id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        debug!(user_id = %id, "Opening draft");
        Ok(state.editor.open(user).clone())
    }

    pub async fn set_field(&self, field: UserField, value: String) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;
        let draft = state.editor.set_field(field, value)?.clone();
        Ok(draft)
    }

    pub async fn set_nested_field(
        &self,
        field: NestedField,
        value: String,
    ) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;
        let draft = state.editor.set_nested_field(field, value)?.clone();
        Ok(draft)
    }

    pub async fn set_field_named(&self, name: &str, value: String) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;
        let draft = state.editor.set_field_named(name, value)?.clone();
        Ok(draft)
    }

    pub async fn set_nested_field_named(
        &self,
        container: &str,
        key: &str,
        value: String,
    ) -> Result<User, DomainError> {
        let mut state = self.state.lock().await;
        state.ensure_not_loading()?;
        let draft = state.editor.set_nested_field_named(container, key, value)?.clone();
        Ok(draft)
    }

    /// Write the draft back to the list.
    ///
    /// The draft is closed only once the list accepted it; if the user was
    /// deleted meanwhile the draft stays open and the list is unchanged.
    pub async fn save_draft(&self) -> Result<User, DomainError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        state.ensure_not_loading()?;

        let draft = state
            .editor
            .draft()
            .cloned()
            .ok_or_else(|| DomainError::invalid_state("Cannot save without an open draft"))?;

        state.store.update_by_id(draft.id(), draft)?;
        let saved = state.editor.commit()?;

        info!(user_id = %saved.id(), "Saved draft");
        self.notifier
            .notify(&Notification::UserUpdated { user: saved.clone() });

        Ok(saved)
    }

    /// Discard the draft. Returns whether one was open.
    pub async fn cancel_draft(&self) -> bool {
        let mut state = self.state.lock().await;
        let was_open = state.editor.is_open();

        if was_open {
            debug!(user_id = ?state.editor.original_id(), "Discarding draft");
        }
        state.editor.cancel();

        was_open
    }
}

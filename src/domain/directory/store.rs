//! Ordered in-memory user collection

use std::collections::HashSet;

use tracing::warn;

use crate::domain::DomainError;
use crate::domain::user::{User, UserId};

/// Authoritative list of users, in display order
#[derive(Debug, Clone, Default)]
pub struct UserListStore {
    users: Vec<User>,
}

impl UserListStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut store = Self::new();
        store.replace_all(users);
        store
    }

    /// Replace the whole collection, keeping input order.
    ///
    /// A repeated id keeps its first occurrence; later ones are dropped.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = User>) {
        let mut seen = HashSet::new();
        let mut users = Vec::new();

        for user in records {
            if seen.insert(user.id()) {
                users.push(user);
            } else {
                warn!(user_id = %user.id(), "Dropping duplicate user id from load");
            }
        }

        self.users = users;
    }

    /// Replace the record with `id` in place
    pub fn update_by_id(&mut self, id: UserId, updated: User) -> Result<(), DomainError> {
        if updated.id() != id {
            return Err(DomainError::validation(format!(
                "Record id {} does not match target id {}",
                updated.id(),
                id
            )));
        }

        let slot = self
            .users
            .iter_mut()
            .find(|u| u.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        *slot = updated;
        Ok(())
    }

    /// Remove and return the record with `id`
    pub fn remove_by_id(&mut self, id: UserId) -> Result<User, DomainError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        Ok(self.users.remove(index))
    }

    /// Owned copy of the current collection
    pub fn snapshot(&self) -> Vec<User> {
        self.users.clone()
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id() == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: u64, name: &str) -> User {
        User::new(UserId::new(id), name, name.to_lowercase())
    }

    fn three_users() -> Vec<User> {
        vec![
            create_test_user(1, "Alice"),
            create_test_user(2, "Bob"),
            create_test_user(3, "Carol"),
        ]
    }

    #[test]
    fn test_replace_all_preserves_order() {
        let mut store = UserListStore::new();
        store.replace_all(three_users());

        assert_eq!(store.snapshot(), three_users());
    }

    #[test]
    fn test_replace_all_discards_previous_contents() {
        let mut store = UserListStore::with_users(three_users());

        store.replace_all(vec![create_test_user(9, "Zed")]);

        assert_eq!(store.len(), 1);
        assert!(store.get(UserId::new(1)).is_none());
    }

    #[test]
    fn test_replace_all_with_empty_sequence() {
        let mut store = UserListStore::with_users(three_users());

        store.replace_all(Vec::new());

        assert!(store.is_empty());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_replace_all_keeps_first_duplicate() {
        let mut store = UserListStore::new();
        store.replace_all(vec![
            create_test_user(1, "Alice"),
            create_test_user(2, "Bob"),
            create_test_user(1, "Impostor"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(UserId::new(1)).unwrap().name(), "Alice");
    }

    #[test]
    fn test_update_in_place() {
        let mut store = UserListStore::with_users(three_users());
        let updated = create_test_user(2, "Robert");

        store.update_by_id(UserId::new(2), updated.clone()).unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot[1], updated);
        assert_eq!(snapshot[0], three_users()[0]);
        assert_eq!(snapshot[2], three_users()[2]);
    }

    #[test]
    fn test_update_missing_id() {
        let mut store = UserListStore::with_users(three_users());

        let result = store.update_by_id(UserId::new(42), create_test_user(42, "Nobody"));

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(store.snapshot(), three_users());
    }

    #[test]
    fn test_update_rejects_id_mismatch() {
        let mut store = UserListStore::with_users(three_users());

        let result = store.update_by_id(UserId::new(1), create_test_user(2, "Bob"));

        assert!(matches!(result, Err(DomainError::Validation { .. })));
        assert_eq!(store.snapshot(), three_users());
    }

    #[test]
    fn test_remove_returns_record() {
        let mut store = UserListStore::with_users(three_users());

        let removed = store.remove_by_id(UserId::new(2)).unwrap();

        assert_eq!(removed.name(), "Bob");
        let names: Vec<_> = store.snapshot().iter().map(|u| u.name().to_string()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_remove_last_then_again() {
        let mut store = UserListStore::with_users(vec![create_test_user(1, "Alice")]);

        store.remove_by_id(UserId::new(1)).unwrap();
        assert!(store.is_empty());

        let again = store.remove_by_id(UserId::new(1));
        assert!(matches!(again, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_snapshot_does_not_alias() {
        let store = UserListStore::with_users(three_users());
        let mut snapshot = store.snapshot();

        snapshot[0] = create_test_user(1, "Changed");
        snapshot.clear();

        assert_eq!(store.snapshot(), three_users());
    }
}

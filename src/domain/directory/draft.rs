//! Draft editor: an isolated working copy of one user
//!
//! The editor never holds a reference into the store. Opening copies the
//! record in, committing hands the finished copy back out, and cancelling
//! drops it. Whatever happens to the draft in between is invisible to the
//! collection.

use crate::domain::DomainError;
use crate::domain::user::{NestedField, User, UserField, UserId};

/// The draft currently being edited, together with the id it was opened from
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenDraft {
    draft: User,
    original_id: UserId,
}

impl OpenDraft {
    fn draft(&self) -> &User {
        &self.draft
    }

    fn original_id(&self) -> UserId {
        self.original_id
    }
}

/// Two states: closed (`None`) or open with one draft
#[derive(Debug, Clone, Default)]
pub struct DraftEditor {
    current: Option<OpenDraft>,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing a copy of `source`, discarding any unsaved draft
    pub fn open(&mut self, source: &User) -> &User {
        let open = self.current.insert(OpenDraft {
            draft: source.clone(),
            original_id: source.id(),
        });
        &open.draft
    }

    pub fn set_field(
        &mut self,
        field: UserField,
        value: impl Into<String>,
    ) -> Result<&User, DomainError> {
        let draft = self.draft_mut()?;
        draft.set_field(field, value);
        Ok(draft)
    }

    pub fn set_nested_field(
        &mut self,
        field: NestedField,
        value: impl Into<String>,
    ) -> Result<&User, DomainError> {
        let draft = self.draft_mut()?;
        draft.set_nested_field(field, value);
        Ok(draft)
    }

    /// String-addressed variant of [`Self::set_field`]
    pub fn set_field_named(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<&User, DomainError> {
        let field = name.parse::<UserField>()?;
        self.set_field(field, value)
    }

    /// String-addressed variant of [`Self::set_nested_field`]
    pub fn set_nested_field_named(
        &mut self,
        container: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Result<&User, DomainError> {
        let field = NestedField::parse(container, key)?;
        self.set_nested_field(field, value)
    }

    /// Close the editor and hand back the finished record
    pub fn commit(&mut self) -> Result<User, DomainError> {
        self.current
            .take()
            .map(|open| open.draft)
            .ok_or_else(|| no_draft("commit"))
    }

    /// Drop the draft; a no-op when nothing is open
    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn draft(&self) -> Option<&User> {
        self.current.as_ref().map(OpenDraft::draft)
    }

    pub fn original_id(&self) -> Option<UserId> {
        self.current.as_ref().map(OpenDraft::original_id)
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    fn draft_mut(&mut self) -> Result<&mut User, DomainError> {
        self.current
            .as_mut()
            .map(|open| &mut open.draft)
            .ok_or_else(|| no_draft("edit a field"))
    }
}

fn no_draft(action: &str) -> DomainError {
    DomainError::invalid_state(format!("Cannot {} without an open draft", action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::UserListStore;
    use crate::domain::user::{Address, AddressField, Company, CompanyField};

    fn alice() -> User {
        User::new(UserId::new(1), "Alice", "alice")
            .with_email("alice@example.com")
            .with_address(Address::new("A", "1"))
            .with_company(Company::new("Acme"))
    }

    #[test]
    fn test_open_copies_source() {
        let source = alice();
        let mut editor = DraftEditor::new();

        let draft = editor.open(&source).clone();

        assert_eq!(draft, source);
        assert_eq!(editor.original_id(), Some(UserId::new(1)));
        assert!(editor.is_open());
    }

    #[test]
    fn test_open_discards_previous_draft() {
        let mut editor = DraftEditor::new();
        editor.open(&alice());
        editor.set_field(UserField::Name, "Unsaved").unwrap();

        let bob = User::new(UserId::new(2), "Bob", "bob");
        editor.open(&bob);

        assert_eq!(editor.draft(), Some(&bob));
        assert_eq!(editor.original_id(), Some(UserId::new(2)));
    }

    #[test]
    fn test_set_field_changes_only_draft() {
        let store = UserListStore::with_users(vec![alice()]);
        let mut editor = DraftEditor::new();
        editor.open(store.get(UserId::new(1)).unwrap());

        let draft = editor.set_field(UserField::Name, "Alicia").unwrap();

        assert_eq!(draft.name(), "Alicia");
        assert_eq!(store.get(UserId::new(1)).unwrap().name(), "Alice");
    }

    #[test]
    fn test_set_nested_field_is_partial() {
        let mut editor = DraftEditor::new();
        editor.open(&alice());

        let draft = editor
            .set_nested_field(NestedField::Address(AddressField::City), "B")
            .unwrap();

        assert_eq!(draft.address().city, "B");
        assert_eq!(draft.address().zipcode, "1");
        assert_eq!(draft.company().name, "Acme");
    }

    #[test]
    fn test_named_setters() {
        let mut editor = DraftEditor::new();
        editor.open(&alice());

        editor.set_field_named("website", "alice.dev").unwrap();
        editor
            .set_nested_field_named("company", "catchPhrase", "Make it so")
            .unwrap();

        let draft = editor.draft().unwrap();
        assert_eq!(draft.website(), "alice.dev");
        assert_eq!(draft.company().get(CompanyField::CatchPhrase), "Make it so");
        assert_eq!(draft.company().name, "Acme");
    }

    #[test]
    fn test_named_setter_rejects_unknown_container() {
        let mut editor = DraftEditor::new();
        editor.open(&alice());
        let before = editor.draft().cloned();

        let err = editor
            .set_nested_field_named("name", "first", "x")
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidField { .. }));
        assert_eq!(editor.draft().cloned(), before);
    }

    #[test]
    fn test_set_field_while_closed() {
        let mut editor = DraftEditor::new();

        let err = editor.set_field(UserField::Name, "x").unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));

        let err = editor
            .set_nested_field(NestedField::Address(AddressField::City), "x")
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));
    }

    #[test]
    fn test_commit_returns_draft_and_closes() {
        let mut editor = DraftEditor::new();
        editor.open(&alice());
        editor.set_field(UserField::Name, "Alicia").unwrap();

        let committed = editor.commit().unwrap();

        assert_eq!(committed.name(), "Alicia");
        assert_eq!(committed.id(), UserId::new(1));
        assert!(!editor.is_open());
        assert!(editor.original_id().is_none());
    }

    #[test]
    fn test_commit_while_closed() {
        let mut editor = DraftEditor::new();

        let err = editor.commit().unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut editor = DraftEditor::new();
        editor.cancel();
        assert!(!editor.is_open());

        editor.open(&alice());
        editor.cancel();
        editor.cancel();

        assert!(editor.draft().is_none());
        assert!(editor.original_id().is_none());
    }

    #[test]
    fn test_cancel_leaves_store_untouched() {
        let mut store = UserListStore::with_users(vec![alice()]);
        let mut editor = DraftEditor::new();
        editor.open(store.get(UserId::new(1)).unwrap());
        editor.set_field(UserField::Name, "Alicia").unwrap();

        editor.cancel();

        assert_eq!(store.snapshot(), vec![alice()]);
        assert!(editor.commit().is_err());

        // Committing after a fresh open still goes through the store
        editor.open(store.get(UserId::new(1)).unwrap());
        editor.set_field(UserField::Name, "Alicia").unwrap();
        let result = editor.commit().unwrap();
        store.update_by_id(UserId::new(1), result).unwrap();
        assert_eq!(store.get(UserId::new(1)).unwrap().name(), "Alicia");
    }
}

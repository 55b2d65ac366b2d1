//! Process-local user store.
//!
//! Used when no database URL is configured and as the backing store for
//! HTTP tests. Records live in a `BTreeMap` keyed by id, so listing is
//! naturally ordered. Identifiers start at 1 and are never reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId, UserListing, UserName};

#[derive(Debug)]
struct Store {
    next_id: i64,
    users: BTreeMap<UserId, UserName>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            users: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// # Examples
/// ```
/// use user_service::domain::UserName;
/// use user_service::domain::ports::UserRepository;
/// use user_service::outbound::memory::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let name = UserName::new("ada").expect("valid name");
/// let user = repo.create(&name).await.expect("create");
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::connection("in-memory user store is poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<UserListing, UserPersistenceError> {
        let store = self.lock()?;
        let users = store
            .users
            .iter()
            .map(|(id, name)| User::new(*id, name.clone()))
            .collect();
        Ok(UserListing::from_sorted(users))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.users.get(&id).map(|name| User::new(id, name.clone())))
    }

    async fn create(&self, name: &UserName) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let id = UserId::new(store.next_id)
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id space exhausted"))?;
        store.users.insert(id, name.clone());
        Ok(User::new(id, name.clone()))
    }

    async fn update(&self, id: UserId, name: &UserName) -> Result<bool, UserPersistenceError> {
        let mut store = self.lock()?;
        match store.users.get_mut(&id) {
            Some(stored) => {
                *stored = name.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut store = self.lock()?;
        Ok(store.users.remove(&id).is_some())
    }

    async fn exists_by_name(&self, name: &UserName) -> Result<bool, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store
            .users
            .values()
            .any(|stored| stored.matches_ignoring_case(name.as_ref())))
    }
}

//! User service delegating to the storage gateway.
//!
//! The service adds no business rules of its own: inputs and outputs pass
//! through unchanged. Its one job beyond delegation is to turn persistence
//! failures into domain [`Error`]s so inbound adapters never see adapter
//! error types.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserPersistenceError, UserRepository, UserService};
use crate::domain::{Error, User, UserId, UserListing, UserName};

/// [`UserService`] implementation backed by a [`UserRepository`].
pub struct UserServiceImpl<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> UserServiceImpl<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: ?Sized> Clone for UserServiceImpl<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
    error!(operation, error = %err, "user repository call failed");
    match err {
        UserPersistenceError::Connection { .. } => {
            Error::service_unavailable("user repository unavailable")
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UserService for UserServiceImpl<R>
where
    R: UserRepository + ?Sized,
{
    async fn list_users(&self) -> Result<UserListing, Error> {
        let listing = self
            .repository
            .list()
            .await
            .map_err(|err| map_persistence_error("list", err))?;
        if listing.is_empty() {
            debug!("user store is empty");
        } else {
            debug!(count = listing.len(), "listed users");
        }
        Ok(listing)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| map_persistence_error("find_by_id", err))
    }

    async fn create_user(&self, name: &UserName) -> Result<User, Error> {
        self.repository
            .create(name)
            .await
            .map_err(|err| map_persistence_error("create", err))
    }

    async fn update_user(&self, id: UserId, name: &UserName) -> Result<bool, Error> {
        self.repository
            .update(id, name)
            .await
            .map_err(|err| map_persistence_error("update", err))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, Error> {
        self.repository
            .delete(id)
            .await
            .map_err(|err| map_persistence_error("delete", err))
    }

    async fn user_exists(&self, name: &UserName) -> Result<bool, Error> {
        self.repository
            .exists_by_name(name)
            .await
            .map_err(|err| map_persistence_error("exists_by_name", err))
    }
}

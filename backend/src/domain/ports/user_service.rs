//! Driving port for user use-cases.
//!
//! Inbound adapters (HTTP handlers) depend on this port only, so they never
//! import persistence concerns. Each method mirrors one
//! [`UserRepository`](super::UserRepository) operation.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserListing, UserName};

/// Domain use-case port for managing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user, or [`UserListing::Empty`] when there are none.
    async fn list_users(&self) -> Result<UserListing, Error>;

    /// Fetch a single user.
    async fn get_user(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Create a user with a store-assigned identifier.
    async fn create_user(&self, name: &UserName) -> Result<User, Error>;

    /// Rename a user; `false` when the user does not exist.
    async fn update_user(&self, id: UserId, name: &UserName) -> Result<bool, Error>;

    /// Delete a user; `false` when the user does not exist.
    async fn delete_user(&self, id: UserId) -> Result<bool, Error>;

    /// Whether a user with this name exists, ignoring case.
    async fn user_exists(&self, name: &UserName) -> Result<bool, Error>;
}

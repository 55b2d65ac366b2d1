//! Driven port for user persistence adapters and their errors.
//!
//! Absence is never an error here: lookups return `Option`, mutations of a
//! missing record return `false`, and an empty store lists as
//! [`UserListing::Empty`]. Only infrastructure failures surface as
//! [`UserPersistenceError`].

use async_trait::async_trait;

use crate::domain::{User, UserId, UserListing, UserName};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Storage gateway for user records keyed by integer identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users ordered by id ascending.
    async fn list(&self) -> Result<UserListing, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Store a new user and return it with its assigned identifier.
    async fn create(&self, name: &UserName) -> Result<User, UserPersistenceError>;

    /// Replace the name of an existing user; `false` when `id` is unknown.
    async fn update(&self, id: UserId, name: &UserName) -> Result<bool, UserPersistenceError>;

    /// Remove a user; `false` when `id` is unknown.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Whether any user has `name`, compared case-insensitively.
    async fn exists_by_name(&self, name: &UserName) -> Result<bool, UserPersistenceError>;
}

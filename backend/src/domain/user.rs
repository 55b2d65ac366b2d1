//! User data model.
//!
//! The service manages a single resource: a user with a store-assigned
//! integer identifier and a required name.

use std::fmt;

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Identifiers are assigned by the store and are always positive.
    #[error("user id must be a positive integer, got {0}")]
    NonPositiveId(i64),
    /// The name was missing or blank.
    #[error("name must not be empty")]
    EmptyName,
}

/// Store-assigned user identifier.
///
/// ## Invariants
/// - The wrapped value is strictly positive.
///
/// # Examples
/// ```
/// use user_service::domain::UserId;
///
/// assert_eq!(UserId::new(7).expect("positive").get(), 7);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: i64) -> Result<Self, UserValidationError> {
        if raw <= 0 {
            return Err(UserValidationError::NonPositiveId(raw));
        }
        Ok(Self(raw))
    }

    /// The raw integer value.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Required user name.
///
/// Names are stored exactly as supplied; only blank input is rejected.
/// Uniqueness is checked case-insensitively before creation but is not
/// enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Case-insensitive comparison used for duplicate detection.
    ///
    /// # Examples
    /// ```
    /// use user_service::domain::UserName;
    ///
    /// let name = UserName::new("Alice").expect("valid name");
    /// assert!(name.matches_ignoring_case("aLiCe"));
    /// ```
    #[must_use]
    pub fn matches_ignoring_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A stored user.
///
/// ## Invariants
/// - `id` is the key the record was stored under and is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    /// Build a [`User`] from validated components.
    #[must_use]
    pub fn new(id: UserId, name: UserName) -> Self {
        Self { id, name }
    }

    /// Fallible constructor from raw parts.
    pub fn try_from_parts(id: i64, name: impl Into<String>) -> Result<Self, UserValidationError> {
        Ok(Self::new(UserId::new(id)?, UserName::new(name)?))
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Split into components.
    #[must_use]
    pub fn into_parts(self) -> (UserId, UserName) {
        (self.id, self.name)
    }
}

/// Result of listing all users.
///
/// An empty store is reported as [`UserListing::Empty`] rather than an
/// empty vector so callers decide explicitly how to present it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserListing {
    /// At least one user, ordered by id ascending.
    Found(Vec<User>),
    /// The store holds no users.
    Empty,
}

impl UserListing {
    /// Build a listing from rows already sorted by id.
    #[must_use]
    pub fn from_sorted(users: Vec<User>) -> Self {
        if users.is_empty() {
            Self::Empty
        } else {
            Self::Found(users)
        }
    }

    /// Number of users in the listing.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Found(users) => users.len(),
            Self::Empty => 0,
        }
    }

    /// Whether the listing is [`UserListing::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests;

//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and never
//! leave it. Conversions to and from domain types are written out by hand
//! below.

use diesel::prelude::*;

use crate::domain::{User, UserValidationError};

use super::schema::users;

/// Row struct for reading from the users table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
}

/// Insertable struct for creating new user records; the id comes from the
/// sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
}

/// Changeset struct for renaming an existing user.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Self::try_from_parts(row.id, row.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn valid_rows_convert_to_users() {
        let user = User::try_from(UserRow {
            id: 5,
            name: "ada".to_owned(),
        })
        .expect("valid row");
        assert_eq!(user.id().get(), 5);
        assert_eq!(user.name().as_ref(), "ada");
    }

    #[rstest]
    #[case(0, "ada", UserValidationError::NonPositiveId(0))]
    #[case(3, "", UserValidationError::EmptyName)]
    fn corrupt_rows_are_rejected(
        #[case] id: i64,
        #[case] name: &str,
        #[case] expected: UserValidationError,
    ) {
        let result = User::try_from(UserRow {
            id,
            name: name.to_owned(),
        });
        assert_eq!(result, Err(expected));
    }
}

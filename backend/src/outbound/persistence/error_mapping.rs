//! Translation of pool and Diesel failures into [`UserPersistenceError`].
//!
//! Pool and driver messages are logged at `debug` and replaced with fixed
//! strings so hosts, credentials and SQL fragments never reach API clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Pool failures always mean the store is unreachable.
pub(crate) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    debug!(%error, "connection pool failure");
    UserPersistenceError::connection("database connection error")
}

/// Classify a Diesel error as a connection or query failure.
pub(crate) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        DieselError::DeserializationError(_) | DieselError::SerializationError(_) => {
            UserPersistenceError::query("database row could not be decoded")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out waiting for db.internal:5432"))]
    #[case(PoolError::build("password authentication failed for user \"app\""))]
    fn pool_errors_map_to_fixed_connection_failures(#[case] error: PoolError) {
        let mapped = map_pool_error(error);
        assert_eq!(
            mapped,
            UserPersistenceError::connection("database connection error")
        );
        let text = mapped.to_string();
        assert!(!text.contains("db.internal") && !text.contains("password"), "{text}");
    }

    #[rstest]
    fn broken_transaction_manager_is_a_connection_failure() {
        assert_eq!(
            map_diesel_error(DieselError::BrokenTransactionManager),
            UserPersistenceError::connection("database connection error")
        );
    }

    #[rstest]
    fn not_found_is_a_query_failure() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            UserPersistenceError::query("record not found")
        );
    }

    #[rstest]
    fn other_errors_fall_back_to_a_generic_query_failure() {
        assert_eq!(
            map_diesel_error(DieselError::RollbackTransaction),
            UserPersistenceError::query("database error")
        );
    }
}

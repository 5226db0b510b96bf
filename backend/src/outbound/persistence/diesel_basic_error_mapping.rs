//! Translation of pool and Diesel failures into repository errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::FeedbackRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> FeedbackRepositoryError {
    let (PoolError::Checkout { message } | PoolError::Build { message }) = error;
    FeedbackRepositoryError::connection(message)
}

/// Driver detail goes to the debug log only; callers get a fixed message.
pub(super) fn map_diesel_error(error: DieselError) -> FeedbackRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            FeedbackRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => FeedbackRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => FeedbackRepositoryError::query("database query error"),
        _ => FeedbackRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn pool_errors_become_connection_errors(#[case] error: PoolError, #[case] message: &str) {
        assert_eq!(map_pool_error(error), FeedbackRepositoryError::connection(message));
    }

    #[rstest]
    fn not_found_becomes_query_error() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            FeedbackRepositoryError::query("record not found")
        );
    }

    #[rstest]
    fn closed_connection_becomes_connection_error() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        );

        assert_eq!(
            map_diesel_error(error),
            FeedbackRepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    fn other_database_errors_hide_driver_detail() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation,
            Box::new("value too long for type character varying(1000)".to_owned()),
        );

        assert_eq!(
            map_diesel_error(error),
            FeedbackRepositoryError::query("database error")
        );
    }
}

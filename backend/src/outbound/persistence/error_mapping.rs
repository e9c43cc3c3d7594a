//! Diesel and pool error mapping for the document store adapter.

use tracing::debug;

use crate::domain::ports::DocumentStoreError;

use super::pool::PoolError;

/// Pool failures mean the store is unreachable.
#[must_use]
pub fn map_pool_error(error: PoolError) -> DocumentStoreError {
    DocumentStoreError::connection(error.into_message())
}

/// Map Diesel errors into connection or query failures.
///
/// Closed connections are connection failures; everything else is a query
/// failure carrying the database message for the logs.
#[must_use]
pub fn map_diesel_error(error: diesel::result::Error, operation: &str) -> DocumentStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            %operation,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DocumentStoreError::connection(format!("{operation}: database connection closed"))
        }
        DieselError::DatabaseError(_, info) => {
            DocumentStoreError::query(format!("{operation}: {}", info.message()))
        }
        DieselError::NotFound => DocumentStoreError::query(format!("{operation}: no rows")),
        other => DocumentStoreError::query(format!("{operation}: {other}")),
    }
}

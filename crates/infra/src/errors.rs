//! Conversions from external infrastructure errors into domain errors.

use rusqlite::Error as SqlError;
use timeslice_domain::TimesliceError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TimesliceError);

impl From<InfraError> for TimesliceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TimesliceError> for InfraError {
    fn from(value: TimesliceError) -> Self {
        InfraError(value)
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        use rusqlite::ffi::ErrorCode;

        let mapped = match value {
            SqlError::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => TimesliceError::Database("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        TimesliceError::Database("database is locked".into())
                    }
                    ErrorCode::ConstraintViolation => {
                        TimesliceError::Database("constraint violation".into())
                    }
                    _ => TimesliceError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            SqlError::QueryReturnedNoRows => {
                TimesliceError::NotFound("no rows returned by query".into())
            }
            SqlError::FromSqlConversionFailure(_, _, cause) => {
                TimesliceError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            SqlError::InvalidColumnType(_, _, ty) => {
                TimesliceError::Database(format!("invalid column type: {ty}"))
            }
            other => TimesliceError::Database(other.to_string()),
        };

        InfraError(mapped)
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(TimesliceError::Database(format!(
            "connection pool error: {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError {
                code: ErrorCode::DatabaseBusy,
                extended_code: 5,
            },
            Some("database is locked".into()),
        );

        let mapped: TimesliceError = InfraError::from(err).into();
        match mapped {
            TimesliceError::Database(msg) => assert!(msg.contains("busy")),
            other => panic!("expected database error, got {other:?}"),
        }
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let mapped: TimesliceError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(matches!(mapped, TimesliceError::NotFound(_)));
    }
}

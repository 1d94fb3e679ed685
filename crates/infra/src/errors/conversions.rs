//! Conversions from external infrastructure errors into domain errors.

use r2d2::Error as PoolError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;
use usersvc_domain::UserServiceError;

/// Extended result code SQLite reports for a violated UNIQUE constraint.
const SQLITE_CONSTRAINT_UNIQUE: i32 = 2067;
/// Extended result code SQLite reports for a violated FOREIGN KEY constraint.
const SQLITE_CONSTRAINT_FOREIGNKEY: i32 = 787;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub UserServiceError);

impl From<InfraError> for UserServiceError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<UserServiceError> for InfraError {
    fn from(value: UserServiceError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoUserServiceError {
    fn into_user_service(self) -> UserServiceError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for SqlError {
    fn into_user_service(self) -> UserServiceError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        UserServiceError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        UserServiceError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_UNIQUE) => {
                        UserServiceError::Conflict(format!(
                            "unique constraint violation: {message}"
                        ))
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_FOREIGNKEY) => {
                        UserServiceError::Database("foreign key constraint violation".into())
                    }
                    _ => UserServiceError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => {
                UserServiceError::NotFound("no rows returned by query".into())
            }
            RE::FromSqlConversionFailure(_, _, cause) => {
                UserServiceError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                UserServiceError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                UserServiceError::Database("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidParameterName(parameter_name) => {
                UserServiceError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => UserServiceError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            RE::InvalidQuery => UserServiceError::Database("invalid SQL query".into()),
            other => UserServiceError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_user_service())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for PoolError {
    fn into_user_service(self) -> UserServiceError {
        UserServiceError::Database(format!("failed to acquire a pooled connection: {self}"))
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_user_service())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → UserServiceError */
/* -------------------------------------------------------------------------- */

impl IntoUserServiceError for JoinError {
    fn into_user_service(self) -> UserServiceError {
        UserServiceError::Internal(format!("Task join error: {self}"))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_user_service())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use rusqlite::ffi::{Error as FfiError, ErrorCode};
    use rusqlite::Error as SqlError;

    use super::*;

    #[test]
    fn sqlite_busy_maps_to_database_error() {
        let err = SqlError::SqliteFailure(
            FfiError { code: ErrorCode::DatabaseBusy, extended_code: 5 },
            Some("database is locked".into()),
        );

        let mapped: UserServiceError = InfraError::from(err).into();
        match mapped {
            UserServiceError::Database(msg) => {
                assert!(msg.contains("busy") || msg.contains("locked"));
            }
            other => panic!("expected database error, got {:?}", other),
        }
    }

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = SqlError::SqliteFailure(
            FfiError {
                code: ErrorCode::ConstraintViolation,
                extended_code: SQLITE_CONSTRAINT_UNIQUE,
            },
            Some("UNIQUE constraint failed: user_account.username".into()),
        );

        let mapped: UserServiceError = InfraError::from(err).into();
        match mapped {
            UserServiceError::Conflict(msg) => assert!(msg.contains("user_account.username")),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        let mapped: UserServiceError = InfraError::from(SqlError::QueryReturnedNoRows).into();
        assert!(mapped.is_not_found());
    }
}

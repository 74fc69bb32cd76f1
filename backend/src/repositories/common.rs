//! Shared repository utilities.

use crate::error::AppError;

/// Turns a unique-constraint violation into a 409 with a domain message;
/// every other error goes through the default mapping.
pub fn map_unique_violation(err: sqlx::Error, message: impl Into<String>) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(message.into())
        }
        _ => err.into(),
    }
}

/// Builds the 404 returned when a keyed lookup or mutation matches no row.
pub fn not_found(entity: &str, key: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("No {}: {}", entity, key))
}

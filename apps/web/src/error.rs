//! Error types for the web server.
//!
//! Every handler returns `Result<_, AppError>`. The error is logged and
//! turned into a status code with a plain-text body.
//!
//! | Variant       | Status |
//! |---------------|--------|
//! | `Validation`  | 400    |
//! | `NotFound`    | 404    |
//! | `Conflict`    | 409    |
//! | `Unavailable` | 503    |
//! | `Database`    | 500    |

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstore_core::{CoreError, ValidationError};
use bookstore_db::DbError;
use tracing::{error, warn};

/// Web server errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing form field.
    #[error("{0}")]
    Validation(String),

    /// Referenced or targeted row doesn't exist.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate key, or a delete blocked by dependent rows.
    #[error("{0}")]
    Conflict(String),

    /// No database connection available.
    #[error("{0}")]
    Unavailable(String),

    /// Any other database failure. The detail is logged, not returned.
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::HasDependents { .. } => AppError::Conflict(err.to_string()),
            DbError::Core(core) => core.into(),
            DbError::PoolExhausted | DbError::ConnectionFailed(_) => {
                AppError::Unavailable(err.to_string())
            }
            DbError::MigrationFailed(_)
            | DbError::QueryFailed(_)
            | DbError::TransactionFailed(_)
            | DbError::Internal(_) => AppError::Database(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Database(detail) => {
                error!(%detail, "Request failed with a database error");
                "An error occurred while executing the database queries.".to_string()
            }
            AppError::Unavailable(detail) => {
                error!(%detail, "Database unavailable");
                "The database is temporarily unavailable. Please retry.".to_string()
            }
            other => {
                warn!(status = status.as_u16(), error = %other, "Request rejected");
                other.to_string()
            }
        };

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_mapping() {
        assert_eq!(
            AppError::from(DbError::not_found("Member", 3)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(DbError::duplicate("ISBN", "9780441013593")).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(DbError::has_dependents("Member", 3, "orders", 1)).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(DbError::PoolExhausted).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            AppError::from(DbError::QueryFailed("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_mapping() {
        let err = AppError::from(ValidationError::required("ISBN"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let core = CoreError::QuantityTooLarge { requested: 5000, max: 999 };
        assert_eq!(AppError::from(DbError::Core(core)).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_message_is_returned() {
        let err = AppError::from(DbError::not_found("Book", "9780441013593"));
        assert_eq!(err.to_string(), "Book not found: 9780441013593");
    }
}

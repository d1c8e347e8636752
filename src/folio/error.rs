//! Request-boundary error taxonomy.
//!
//! Every failure a handler or the middleware can produce maps to one of these
//! variants; raw storage or token errors never reach the caller, only the
//! mapped status and a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or malformed input, surfaced as 400
    #[error("{0}")]
    Validation(String),

    /// Duplicate username or email, surfaced as 409
    #[error("{0}")]
    Conflict(String),

    /// Bad credentials or a missing/invalid/expired token, surfaced as 401.
    /// The message is fixed per operation so callers cannot tell a missing
    /// account from a wrong password, or an expired token from a forged one.
    #[error("{0}")]
    Authentication(&'static str),

    /// Resource lookup came up empty, surfaced as 404
    #[error("{0}")]
    NotFound(String),

    /// Datastore failure, surfaced as 500 with the detail logged only
    #[error(transparent)]
    Storage(#[from] sqlx::Error),

    /// Hashing or signing backend failure, surfaced as 500
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message),
            Self::Conflict(message) => (StatusCode::CONFLICT, message),
            Self::Authentication(message) => (StatusCode::UNAUTHORIZED, message.to_string()),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Storage(err) => {
                error!("Storage error: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
            Self::Internal(message) => {
                error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                Error::Validation("All fields required".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                Error::Conflict("User already exists".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                Error::Authentication("invalid username or password"),
                StatusCode::UNAUTHORIZED,
            ),
            (
                Error::NotFound("Blog not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                Error::Storage(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_storage_detail_not_leaked() {
        let response = Error::Storage(sqlx::Error::PoolClosed).into_response();
        // the body is the generic message, the sqlx detail stays in the log
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

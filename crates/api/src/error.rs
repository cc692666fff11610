//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure funnels through
//! [`IntoResponse`] so clients always see the same `{ "error", "code" }`
//! JSON body. Database errors are classified by Postgres error code so
//! the schema's constraints double as API semantics: `uq_`-named unique
//! violations become 409s and foreign-key violations on client-supplied
//! ids become 400s instead of opaque 500s.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use folio_core::error::CoreError;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed request surface: broken multipart framing, missing
    /// fields, path-traversal filenames.
    #[error("{0}")]
    BadRequest(String),

    /// Filesystem failure while storing or removing a media file.
    #[error("media storage failed: {0}")]
    MediaStore(#[from] std::io::Error),

    /// A failure the client cannot act on (token minting, password
    /// hashing). Logged in full, sanitized on the wire.
    #[error("{0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => core_response(core),
            AppError::Database(err) => database_response(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::MediaStore(err) => {
                tracing::error!(error = %err, "Media storage failure");
                internal_response()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_response()
            }
        };

        (status, Json(ErrorBody { error: message, code })).into_response()
    }
}

fn core_response(err: &CoreError) -> (StatusCode, &'static str, String) {
    let (status, code) = match err {
        CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
    };
    (status, code, err.to_string())
}

/// Map a sqlx error onto this schema's constraint conventions.
///
/// - `RowNotFound` is a plain 404.
/// - Unique violations (23505) on `uq_*` constraints are 409s: duplicate
///   category slug, setting key, section name, or admin email.
/// - Foreign-key violations (23503) are 400s: the request referenced a
///   category or project id that does not exist.
/// - Everything else is logged and sanitized to a 500.
fn database_response(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some("23505") if constraint.starts_with("uq_") => {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Value already exists ({constraint})"),
                );
            }
            Some("23503") => {
                return (
                    StatusCode::BAD_REQUEST,
                    "INVALID_REFERENCE",
                    format!("Referenced row does not exist ({constraint})"),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Unhandled database error");
    internal_response()
}

fn internal_response() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

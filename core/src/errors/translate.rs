//! Mapping from [`AppError`] to the wire error body
//!
//! [`translate`] is a pure function: it reads only its argument and returns
//! a fresh [`ErrorResponse`], so adapters may call it from any number of
//! request tasks concurrently and as often as they like.

use eh_shared::ErrorResponse;

use super::database::{classify, DatabaseError, DatabaseErrorKind};
use super::service_error::{status, ServiceError};
use super::AppError;

pub const RECORD_NOT_FOUND_MESSAGE: &str = "Database record not found";
pub const DUPLICATE_ENTRY_MESSAGE: &str = "Duplicate entry, unique constraint violated";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Translate an error into the response body. First match wins:
///
/// 1. a [`ServiceError`], directly or anywhere in an `anyhow` cause chain,
///    is rendered verbatim;
/// 2. a [`DatabaseError`] classified as `RecordNotFound` or
///    `UniqueConstraintViolation` becomes 404 or 409;
/// 3. everything else is a generic 500.
pub fn translate(err: &AppError) -> ErrorResponse {
    match err {
        AppError::Service(service) => from_service_error(service),
        AppError::Database(db) => from_database_error(db).unwrap_or_else(internal_error),
        AppError::Other(other) => translate_opaque(other),
    }
}

/// The generic 500 body, also used for contained panics
pub fn internal_error() -> ErrorResponse {
    ErrorResponse::new(INTERNAL_ERROR_MESSAGE, status::INTERNAL_SERVER_ERROR)
}

fn from_service_error(err: &ServiceError) -> ErrorResponse {
    ErrorResponse::new(err.message(), err.status())
}

/// `None` for unclassified errors; escalation to 500 is the caller's call.
fn from_database_error(err: &DatabaseError) -> Option<ErrorResponse> {
    match classify(err) {
        DatabaseErrorKind::RecordNotFound => Some(ErrorResponse::new(
            RECORD_NOT_FOUND_MESSAGE,
            status::NOT_FOUND,
        )),
        DatabaseErrorKind::UniqueConstraintViolation => Some(ErrorResponse::new(
            DUPLICATE_ENTRY_MESSAGE,
            status::CONFLICT,
        )),
        DatabaseErrorKind::Unclassified => None,
    }
}

fn translate_opaque(err: &anyhow::Error) -> ErrorResponse {
    for cause in err.chain() {
        // A transparent AppError hides its variant from the rest of the chain
        if let Some(app) = cause.downcast_ref::<AppError>() {
            match app {
                AppError::Service(service) => return from_service_error(service),
                AppError::Database(db) => {
                    if let Some(response) = from_database_error(db) {
                        return response;
                    }
                }
                AppError::Other(inner) => return translate_opaque(inner),
            }
        }
        if let Some(service) = cause.downcast_ref::<ServiceError>() {
            return from_service_error(service);
        }
        if let Some(response) = cause
            .downcast_ref::<DatabaseError>()
            .and_then(from_database_error)
        {
            return response;
        }
    }
    internal_error()
}

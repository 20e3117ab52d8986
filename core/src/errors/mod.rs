//! Error taxonomy and response translation.

mod database;
mod service_error;
mod translate;

#[cfg(test)]
mod tests;

pub use database::{classify, is_unique_violation, DatabaseError, DatabaseErrorKind, Driver};
pub use service_error::{status, ServiceError};
pub use translate::{
    internal_error, translate, DUPLICATE_ENTRY_MESSAGE, INTERNAL_ERROR_MESSAGE,
    RECORD_NOT_FOUND_MESSAGE,
};

use eh_shared::ErrorResponse;
use thiserror::Error;

/// Every error a request handler can fail with
#[derive(Error, Debug)]
pub enum AppError {
    /// Intentional failure with its own status
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Failure reported by the persistence layer
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Shorthand for [`translate`]
    pub fn to_response(&self) -> ErrorResponse {
        translate(self)
    }
}

pub type AppResult<T> = Result<T, AppError>;

//! Status-bearing errors raised by request handlers

use thiserror::Error;

/// HTTP status codes used by the named constructors
pub mod status {
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const CONFLICT: u16 = 409;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
}

/// An intentional failure with a caller-chosen HTTP status
///
/// Both fields are fixed at construction. The `Display` output is the
/// message, so `err.to_string()` is what ends up in the response body.
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
    status: u16,
}

impl ServiceError {
    /// Create an error with an arbitrary status
    ///
    /// The status is not validated; passing a non-error code is the caller's
    /// responsibility.
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, status::BAD_REQUEST)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, status::UNAUTHORIZED)
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message, status::FORBIDDEN)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, status::NOT_FOUND)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, status::CONFLICT)
    }

    /// 422 Unprocessable Entity
    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(message, status::UNPROCESSABLE_ENTITY)
    }

    /// 429 Too Many Requests
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::new(message, status::TOO_MANY_REQUESTS)
    }

    /// 503 Service Unavailable
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(message, status::SERVICE_UNAVAILABLE)
    }

    /// 500 Internal Server Error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(message, status::INTERNAL_SERVER_ERROR)
    }
}

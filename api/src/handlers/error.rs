//! Handler-level error type
//!
//! Handlers return [`ApiResult`]; `?` lifts service, database and `anyhow`
//! errors into [`ApiError`], and actix renders it through [`translate`].

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use eh_core::errors::{translate, AppError, DatabaseError, ServiceError};
use eh_shared::{ErrorResponse, ResponseFormat};
use thiserror::Error;

use crate::dto::ErrorResponseExt;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    pub fn inner(&self) -> &AppError {
        &self.0
    }

    /// The translated body
    pub fn response(&self) -> ErrorResponse {
        translate(&self.0)
    }

    /// Record the cause behind `body`. A 5xx body hides it, so it only survives here.
    pub(crate) fn log(&self, body: &ErrorResponse) {
        if body.is_server_error() {
            tracing::error!(status = body.status, error = ?self.0, "request failed");
        } else {
            tracing::debug!(status = body.status, error = %self.0, "request rejected");
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(AppError::Service(err))
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        Self(AppError::Database(err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(AppError::Other(err))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.response().status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let body = self.response();
        self.log(&body);
        body.to_response(ResponseFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_rt::test]
    async fn test_service_error_response() {
        let error = ApiError::from(ServiceError::not_found("User 7 not found"));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let json = body_json(error.error_response()).await;
        assert_eq!(json, serde_json::json!({"error": "User 7 not found", "status": 404}));
    }

    #[actix_rt::test]
    async fn test_database_error_response() {
        let error = ApiError::from(DatabaseError::NoRows);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);

        let json = body_json(error.error_response()).await;
        assert_eq!(json["error"], "Database record not found");
    }

    #[actix_rt::test]
    async fn test_anyhow_error_hides_cause() {
        let error = ApiError::from(anyhow::anyhow!("password=hunter2 rejected by upstream"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(error.error_response()).await;
        assert_eq!(json, serde_json::json!({"error": "Internal Server Error", "status": 500}));
    }
}

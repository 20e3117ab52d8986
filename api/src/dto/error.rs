use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;
pub use eh_shared::{ErrorResponse, ResponseFormat};

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    /// Write the body in `format` with the matching status line
    fn to_response(&self, format: ResponseFormat) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, format: ResponseFormat) -> HttpResponse {
        let Ok(status) = StatusCode::from_u16(self.status) else {
            // Status line and body must agree, so an unusable code is an internal error.
            tracing::warn!(status = self.status, error = %self.error, "invalid HTTP status in error response");
            return eh_core::errors::internal_error().to_response(format);
        };

        match format {
            ResponseFormat::Json => HttpResponse::build(status).json(self),
            ResponseFormat::PlainText => HttpResponse::build(status)
                .content_type(ContentType::plaintext())
                .body(self.error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;

    #[test]
    fn test_json_response() {
        let response = ErrorResponse::new("Invalid input provided", 400).to_response(ResponseFormat::Json);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_plain_text_response() {
        let response = ErrorResponse::new("Conflict", 409).to_response(ResponseFormat::PlainText);
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_invalid_status_becomes_internal_error() {
        let response = ErrorResponse::new("Odd", 42).to_response(ResponseFormat::Json);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

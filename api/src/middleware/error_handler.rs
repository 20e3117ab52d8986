//! Error normalization and panic containment middleware
//!
//! Wraps an app or scope so every failed request leaves with the same
//! `{ "error", "status" }` body (or its plain-text form):
//!
//! - an [`ApiError`] attached to the response is re-rendered from [`translate`]
//!   output in the configured format
//! - any other actix error keeps its status and gets the canonical reason
//!   phrase as its message
//! - a panic while building or polling the inner service becomes the generic
//!   500, logged with the request id before the response is produced
//!
//! Responses without an attached error pass through untouched. When
//! middlewares are nested the innermost one wins.
//!
//! [`translate`]: eh_core::errors::translate

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{HeaderName, HeaderValue},
        StatusCode,
    },
    Error, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::{FutureExt, LocalBoxFuture};
use std::any::Any;
use std::future::{ready, Ready};
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use thiserror::Error;
use uuid::Uuid;

use eh_core::errors::internal_error;
use eh_shared::{config::ErrorHandlingConfig, ErrorResponse, ResponseFormat};

use crate::dto::ErrorResponseExt;
use crate::handlers::ApiError;

const DEFAULT_REQUEST_ID_HEADER: &str = "x-request-id";

/// Identifier assigned to each request, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Middleware for standardizing error responses
#[derive(Debug, Clone)]
pub struct ErrorHandlerMiddleware {
    format: ResponseFormat,
    request_id_header: HeaderName,
}

impl ErrorHandlerMiddleware {
    pub fn new(format: ResponseFormat) -> Self {
        Self {
            format,
            request_id_header: HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER),
        }
    }

    /// Structured bodies, for routers that speak JSON
    pub fn json() -> Self {
        Self::new(ResponseFormat::Json)
    }

    /// Message-only bodies, for raw handlers
    pub fn plain_text() -> Self {
        Self::new(ResponseFormat::PlainText)
    }

    pub fn from_config(config: &ErrorHandlingConfig) -> Self {
        let request_id_header = HeaderName::from_bytes(config.request_id_header.as_bytes())
            .unwrap_or_else(|_| {
                tracing::warn!(
                    header = %config.request_id_header,
                    "invalid request id header name, using the default"
                );
                HeaderName::from_static(DEFAULT_REQUEST_ID_HEADER)
            });
        Self {
            format: config.format,
            request_id_header,
        }
    }

    pub fn format(&self) -> ResponseFormat {
        self.format
    }
}

impl Default for ErrorHandlerMiddleware {
    fn default() -> Self {
        Self::json()
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorHandlerMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorHandlerMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorHandlerMiddlewareService {
            service: Rc::new(service),
            format: self.format,
            request_id_header: self.request_id_header.clone(),
        }))
    }
}

pub struct ErrorHandlerMiddlewareService<S> {
    service: Rc<S>,
    format: ResponseFormat,
    request_id_header: HeaderName,
}

impl<S, B> Service<ServiceRequest> for ErrorHandlerMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // An outer instance may already have assigned one
        let assigned = req.extensions().get::<RequestId>().map(|id| id.0.clone());
        let request_id = assigned
            .or_else(|| {
                req.headers()
                    .get(&self.request_id_header)
                    .and_then(|v| v.to_str().ok())
                    .filter(|v| !v.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let scope = RequestScope {
            request_id,
            request_id_header: self.request_id_header.clone(),
            method: req.method().to_string(),
            path: req.path().to_owned(),
            format: self.format,
        };

        Box::pin(async move {
            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| service.call(req))) {
                Ok(fut) => AssertUnwindSafe(fut).catch_unwind().await,
                Err(payload) => Err(payload),
            };

            match outcome {
                Ok(Ok(res)) => Ok(scope.normalize_response(res)),
                Ok(Err(err)) => Err(scope.normalize_error(err)),
                Err(payload) => Err(scope.contain_panic(payload)),
            }
        })
    }
}

/// Per-request data the normalizer needs after the inner call
struct RequestScope {
    request_id: String,
    request_id_header: HeaderName,
    method: String,
    path: String,
    format: ResponseFormat,
}

impl RequestScope {
    fn normalize_response<B>(&self, res: ServiceResponse<B>) -> ServiceResponse<EitherBody<B>> {
        let body = match res.response().error() {
            Some(err) if err.as_error::<NormalizedError>().is_none() => {
                Some(self.body_for(err, res.status()))
            }
            _ => None,
        };
        let Some(body) = body else {
            return res.map_into_left_body();
        };

        let (req, _) = res.into_parts();
        ServiceResponse::new(req, self.respond(body)).map_into_right_body()
    }

    fn normalize_error(&self, err: Error) -> Error {
        if err.as_error::<NormalizedError>().is_some() {
            return err;
        }
        // Returned rather than attached, so actix never rendered it and nothing logged the cause
        if let Some(api) = err.as_error::<ApiError>() {
            let body = api.response();
            api.log(&body);
            return self.normalized(body).into();
        }
        let status = err.as_response_error().status_code();
        self.normalized(self.body_for(&err, status)).into()
    }

    fn contain_panic(&self, payload: Box<dyn Any + Send>) -> Error {
        tracing::error!(
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            panic = %panic_message(payload.as_ref()),
            "[PANIC RECOVERED] request handler panicked"
        );
        self.normalized(internal_error()).into()
    }

    fn body_for(&self, err: &Error, status: StatusCode) -> ErrorResponse {
        // Attached ApiErrors were logged when actix rendered them
        if let Some(api) = err.as_error::<ApiError>() {
            return api.response();
        }

        let body = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Unknown Error"),
            status.as_u16(),
        );
        if body.is_server_error() {
            tracing::error!(
                request_id = %self.request_id,
                status = body.status,
                error = %err,
                "request failed"
            );
        } else {
            tracing::debug!(
                request_id = %self.request_id,
                status = body.status,
                error = %err,
                "request rejected"
            );
        }
        body
    }

    fn normalized(&self, body: ErrorResponse) -> NormalizedError {
        NormalizedError {
            body,
            format: self.format,
            request_id: Some((self.request_id_header.clone(), self.request_id.clone())),
        }
    }

    /// Response carrying the normalized error, so outer middleware leaves it alone
    fn respond(&self, body: ErrorResponse) -> HttpResponse {
        HttpResponse::from_error(self.normalized(body))
    }
}

/// An error already rendered by this middleware
#[derive(Debug, Error)]
#[error("{body}")]
pub struct NormalizedError {
    body: ErrorResponse,
    format: ResponseFormat,
    request_id: Option<(HeaderName, String)>,
}

impl ResponseError for NormalizedError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = self.body.to_response(self.format);
        if let Some((name, id)) = &self.request_id {
            if let Ok(value) = HeaderValue::from_str(id) {
                response.headers_mut().insert(name.clone(), value);
            }
        }
        response
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

/// Extension trait to read the request id assigned by [`ErrorHandlerMiddleware`]
pub trait RequestIdExt {
    fn request_id(&self) -> Option<String>;
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = ErrorHandlingConfig {
            format: ResponseFormat::PlainText,
            request_id_header: "X-Correlation-ID".to_string(),
        };
        let middleware = ErrorHandlerMiddleware::from_config(&config);
        assert_eq!(middleware.format(), ResponseFormat::PlainText);
        assert_eq!(middleware.request_id_header, "x-correlation-id");
    }

    #[test]
    fn test_invalid_header_falls_back_to_default() {
        let config = ErrorHandlingConfig {
            request_id_header: "not a header".to_string(),
            ..ErrorHandlingConfig::default()
        };
        let middleware = ErrorHandlerMiddleware::from_config(&config);
        assert_eq!(middleware.format(), ResponseFormat::Json);
        assert_eq!(middleware.request_id_header, DEFAULT_REQUEST_ID_HEADER);
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned boom"));
        assert_eq!(panic_message(payload.as_ref()), "owned boom");

        let payload: Box<dyn Any + Send> = Box::new(7_u32);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }
}

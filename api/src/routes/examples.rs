//! Handlers that fail on purpose

use actix_web::{web, HttpResponse};
use anyhow::Context;
use eh_core::errors::ServiceError;

use crate::handlers::ApiResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/example")
            .route("", web::get().to(bad_request))
            .route("/panic", web::get().to(panics))
            .route("/unavailable", web::get().to(unavailable))
            .route("/internal", web::get().to(internal))
            .route("/status/{code}", web::get().to(custom_status)),
    );
}

/// GET /example
pub async fn bad_request() -> ApiResult<HttpResponse> {
    Err(ServiceError::bad_request("Invalid input provided").into())
}

/// GET /example/panic
pub async fn panics() -> HttpResponse {
    panic!("simulated handler failure")
}

/// GET /example/unavailable
///
/// The service error is buried under `anyhow` context and still surfaces as 503.
pub async fn unavailable() -> ApiResult<HttpResponse> {
    check_upstream().context("checking upstream availability")?;
    Ok(HttpResponse::Ok().finish())
}

/// GET /example/internal
pub async fn internal() -> ApiResult<HttpResponse> {
    Err(anyhow::anyhow!("cache shard 3 unreachable").into())
}

/// GET /example/status/{code}
pub async fn custom_status(code: web::Path<u16>) -> ApiResult<HttpResponse> {
    let code = code.into_inner();
    Err(ServiceError::new(format!("Custom failure with status {}", code), code).into())
}

fn check_upstream() -> Result<(), ServiceError> {
    Err(ServiceError::service_unavailable(
        "Upstream service is temporarily unavailable",
    ))
}

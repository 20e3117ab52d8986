//! Demo routes exercising every error path

pub mod examples;
pub mod health;
pub mod users;

use actix_web::web;

use crate::middleware::ErrorHandlerMiddleware;

/// Register all routes
///
/// `/text/...` mounts the example routes again behind a plain-text
/// normalizer, the degraded form for clients that cannot parse JSON.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .configure(examples::configure)
        .configure(users::configure)
        .service(
            web::scope("/text")
                .wrap(ErrorHandlerMiddleware::plain_text())
                .configure(examples::configure),
        );
}

//! Application state and factory
//!
//! This module holds the shared state handed to handlers and builds the
//! actix-web application around the error handling middleware.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use eh_core::repositories::UserRepository;
use eh_shared::config::ErrorHandlingConfig;

use crate::middleware::ErrorHandlerMiddleware;
use crate::routes;

/// State shared by all workers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

/// Create and configure the application
///
/// The tracing span is the outermost layer so a contained panic is still
/// logged inside the request span.
pub fn create_app(
    state: web::Data<AppState>,
    errors: &ErrorHandlingConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .configure(routes::configure)
        .wrap(ErrorHandlerMiddleware::from_config(errors))
        .wrap(TracingLogger::default())
}

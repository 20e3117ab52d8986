//! actix-web adapters for the error handler core
//!
//! - [`handlers::error::ApiError`] lets handlers return `Err(..)` and get the
//!   normalized body from `ResponseError`
//! - [`middleware::ErrorHandlerMiddleware`] contains panics and re-renders
//!   every error response in one format
//! - [`app`] and [`routes`] wire a small demo server on top of both

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

//! # Error Handler Core
//!
//! The error taxonomy shared by every HTTP adapter: status-bearing
//! [`ServiceError`] values, the driver-agnostic [`DatabaseError`] and its
//! classifier, and [`translate`], which maps any [`AppError`] onto the
//! `{ "error", "status" }` response body.
//!
//! The demo user domain and its repository contract live here as well so the
//! infrastructure layer has something real to fail on.

pub mod domain;
pub mod errors;
pub mod repositories;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;

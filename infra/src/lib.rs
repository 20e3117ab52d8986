//! # Infrastructure Layer
//!
//! Concrete persistence for the error handler workspace:
//!
//! - **Error mapping**: lowers `sqlx::Error` from Postgres, MySQL and SQLite
//!   into the driver-agnostic [`eh_core::DatabaseError`]
//! - **Connection pool**: SQLite pool used by the demo server
//! - **Repositories**: SQLite implementation of [`eh_core::UserRepository`]
//!
//! ## Features
//!
//! - `postgres`: recognize Postgres driver errors (default)
//! - `mysql`: recognize MySQL driver errors (default)
//! - `sqlite`: recognize SQLite driver errors, enable the pool and repository (default)

use thiserror::Error;

pub mod database;

/// Errors raised while setting up infrastructure
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

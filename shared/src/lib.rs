//! Shared configuration and wire types for the error handler workspace
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The error response body written by every HTTP adapter
//! - The response format selector used by the adapters

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, ConfigError, DatabaseConfig, Environment, ErrorHandlingConfig, LogFormat,
    LoggingConfig, ServerConfig,
};
pub use errors::{ErrorResponse, ResponseFormat};

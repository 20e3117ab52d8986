//! Error response configuration module

use serde::{Deserialize, Serialize};
use std::env;

use crate::errors::ResponseFormat;

/// Settings for the HTTP error adapters
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorHandlingConfig {
    /// Body format written for normalized errors
    #[serde(default)]
    pub format: ResponseFormat,

    /// Header carrying the request identifier
    #[serde(default = "default_request_id_header")]
    pub request_id_header: String,
}

impl Default for ErrorHandlingConfig {
    fn default() -> Self {
        Self {
            format: ResponseFormat::default(),
            request_id_header: default_request_id_header(),
        }
    }
}

impl ErrorHandlingConfig {
    /// Create from `ERROR_RESPONSE_FORMAT`; unknown values fall back to JSON
    pub fn from_env() -> Self {
        let format = env::var("ERROR_RESPONSE_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self {
            format,
            ..Default::default()
        }
    }
}

fn default_request_id_header() -> String {
    String::from("X-Request-ID")
}

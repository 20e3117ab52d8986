//! Shared error response structures

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error body written by every HTTP adapter
///
/// The HTTP status line always carries the same code as `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, status: u16) -> Self {
        Self {
            error: error.into(),
            status,
        }
    }

    /// Whether the status is in the 5xx range
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.error)
    }
}

/// How an adapter writes an [`ErrorResponse`] to the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `application/json` body with `error` and `status` fields
    #[default]
    Json,
    /// `text/plain` body holding only the message
    #[serde(rename = "text")]
    PlainText,
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseFormat::Json => write!(f, "json"),
            ResponseFormat::PlainText => write!(f, "text"),
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ResponseFormat::Json),
            "text" | "plain" | "plaintext" => Ok(ResponseFormat::PlainText),
            _ => Err(format!("Invalid response format: {}", s)),
        }
    }
}

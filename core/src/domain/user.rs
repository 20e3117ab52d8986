//! User entity used by the demo server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A stored user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique across all users
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Reject blank fields and emails without an `@`
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.email.trim().is_empty() {
            return Err(ServiceError::unprocessable_entity("Email is required"));
        }
        if !self.email.contains('@') {
            return Err(ServiceError::unprocessable_entity("Email is invalid"));
        }
        if self.name.trim().is_empty() {
            return Err(ServiceError::unprocessable_entity("Name is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_passes() {
        assert!(NewUser::new("ada@example.com", "Ada").validate().is_ok());
    }

    #[test]
    fn test_blank_fields_are_unprocessable() {
        let error = NewUser::new("  ", "Ada").validate().unwrap_err();
        assert_eq!(error.status(), 422);
        assert_eq!(error.message(), "Email is required");

        let error = NewUser::new("ada@example.com", "").validate().unwrap_err();
        assert_eq!(error.message(), "Name is required");

        let error = NewUser::new("ada.example.com", "Ada").validate().unwrap_err();
        assert_eq!(error.message(), "Email is invalid");
    }
}

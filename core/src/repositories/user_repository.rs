//! User repository trait
//!
//! Implementations lower driver errors into [`DatabaseError`] and leave
//! classification to the translator, so a duplicate email surfaces as a
//! 409 without the repository deciding on HTTP semantics.

use async_trait::async_trait;

use crate::domain::{NewUser, User};
use crate::errors::DatabaseError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. A taken email fails with the driver's unique violation.
    async fn create(&self, new_user: &NewUser) -> Result<User, DatabaseError>;

    /// Fetch a user by id. A missing row fails with [`DatabaseError::NoRows`].
    async fn find_by_id(&self, id: i64) -> Result<User, DatabaseError>;
}

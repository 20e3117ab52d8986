//! SQLite implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use eh_core::domain::{NewUser, User};
use eh_core::errors::DatabaseError;
use eh_core::repositories::UserRepository;

use crate::database::error_mapping::SqlxResultExt;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    created_at TEXT NOT NULL
)
"#;

/// SQLite implementation of UserRepository
pub struct SqliteUserRepository {
    /// Database connection pool
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_db_err()?;
        tracing::debug!("users table ready");
        Ok(())
    }

    fn row_to_user(row: &SqliteRow) -> Result<User, DatabaseError> {
        Ok(User {
            id: row.try_get("id").map_db_err()?,
            email: row.try_get("email").map_db_err()?,
            name: row.try_get("name").map_db_err()?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at").map_db_err()?,
        })
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn create(&self, new_user: &NewUser) -> Result<User, DatabaseError> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO users (email, name, created_at) VALUES (?, ?, ?)")
            .bind(&new_user.email)
            .bind(&new_user.name)
            .bind(created_at)
            .execute(&self.pool)
            .await
            .map_db_err()?;

        let user = User {
            id: result.last_insert_rowid(),
            email: new_user.email.clone(),
            name: new_user.name.clone(),
            created_at,
        };
        tracing::debug!(user_id = user.id, "user created");
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<User, DatabaseError> {
        let row = sqlx::query("SELECT id, email, name, created_at FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_db_err()?;

        Self::row_to_user(&row)
    }
}

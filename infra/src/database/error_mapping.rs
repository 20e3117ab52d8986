//! Lowering of `sqlx::Error` into [`DatabaseError`]
//!
//! Driver identity is recovered by downcasting the boxed database error to
//! each enabled backend's concrete type. Only the identity and the native
//! code are carried over; deciding what the code means is the classifier's
//! job in `eh_core`.

use eh_core::errors::{DatabaseError, Driver};
use sqlx::error::DatabaseError as SqlxDatabaseError;
use tracing::debug;

/// Map any SQLx error into a [`DatabaseError`]
pub fn map_sqlx_error(err: sqlx::Error) -> DatabaseError {
    match err {
        sqlx::Error::RowNotFound => DatabaseError::NoRows,
        sqlx::Error::Database(db) => {
            let mapped = driver_error(db.as_ref())
                .unwrap_or_else(|| DatabaseError::Other(db.message().to_string()));
            debug!(error = %mapped, "database operation failed");
            mapped
        }
        other => {
            debug!(
                error = %other,
                error_type = %std::any::type_name_of_val(&other),
                "database operation failed"
            );
            DatabaseError::Other(other.to_string())
        }
    }
}

/// `.map_db_err()` for SQLx results
pub trait SqlxResultExt<T> {
    fn map_db_err(self) -> Result<T, DatabaseError>;
}

impl<T> SqlxResultExt<T> for Result<T, sqlx::Error> {
    fn map_db_err(self) -> Result<T, DatabaseError> {
        self.map_err(map_sqlx_error)
    }
}

fn driver_error(db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    postgres_error(db)
        .or_else(|| mysql_error(db))
        .or_else(|| sqlite_error(db))
}

#[cfg(feature = "postgres")]
fn postgres_error(db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    db.try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
        .map(|pg| DatabaseError::driver(Driver::Postgres, pg.code(), pg.message()))
}

#[cfg(not(feature = "postgres"))]
fn postgres_error(_db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    None
}

#[cfg(feature = "mysql")]
fn mysql_error(db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    db.try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
        .map(|my| DatabaseError::driver(Driver::MySql, my.number().to_string(), my.message()))
}

#[cfg(not(feature = "mysql"))]
fn mysql_error(_db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    None
}

// SqliteError only exposes its extended result code through the trait.
#[cfg(feature = "sqlite")]
fn sqlite_error(db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    db.try_downcast_ref::<sqlx::sqlite::SqliteError>().map(|_| {
        let code = db.code().map(|c| c.into_owned()).unwrap_or_default();
        DatabaseError::driver(Driver::Sqlite, code, db.message())
    })
}

#[cfg(not(feature = "sqlite"))]
fn sqlite_error(_db: &dyn SqlxDatabaseError) -> Option<DatabaseError> {
    None
}

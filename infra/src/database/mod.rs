//! Database module - SQLx error mapping, pool and repositories

pub mod error_mapping;

#[cfg(feature = "sqlite")]
pub mod connection;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use error_mapping::{map_sqlx_error, SqlxResultExt};

#[cfg(feature = "sqlite")]
pub use connection::{DatabasePool, PoolStatistics};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteUserRepository;

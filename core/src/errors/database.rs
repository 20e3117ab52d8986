//! Driver-agnostic persistence errors and their classification
//!
//! The infrastructure layer lowers whatever its SQL driver produced into a
//! [`DatabaseError`]; [`classify`] then decides what kind of failure it was
//! without the caller knowing which backend was involved.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// SQL driver that produced a [`DatabaseError::Driver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    Postgres,
    MySql,
    Sqlite,
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Driver::Postgres => write!(f, "postgres"),
            Driver::MySql => write!(f, "mysql"),
            Driver::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// An opaque error from the persistence layer
#[derive(Error, Debug, Clone)]
pub enum DatabaseError {
    /// A query that expected a row returned none
    #[error("no rows returned by a query that expected to return at least one row")]
    NoRows,

    /// An error reported by the database server or engine
    ///
    /// `code` is the driver's native identifier: the SQLSTATE for Postgres,
    /// the server error number for MySQL, the (possibly extended) result code
    /// for SQLite.
    #[error("{driver} error {code}: {message}")]
    Driver {
        driver: Driver,
        code: String,
        message: String,
    },

    /// Pool, I/O, protocol or decoding failures
    #[error("database error: {0}")]
    Other(String),
}

impl DatabaseError {
    /// Build a driver error
    pub fn driver(driver: Driver, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Driver {
            driver,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Shorthand for `classify(self)`
    pub fn kind(&self) -> DatabaseErrorKind {
        classify(self)
    }
}

/// Canonical classification of a [`DatabaseError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseErrorKind {
    RecordNotFound,
    UniqueConstraintViolation,
    Unclassified,
}

/// Driver codes signalling a unique or primary-key constraint violation.
///
/// SQLite entries are primary result codes; see [`normalize_code`].
const UNIQUE_VIOLATION_CODES: &[(Driver, &str)] = &[
    // unique_violation SQLSTATE
    (Driver::Postgres, "23505"),
    // ER_DUP_ENTRY
    (Driver::MySql, "1062"),
    // SQLITE_CONSTRAINT
    (Driver::Sqlite, "19"),
];

/// Classify a persistence error. First match wins; never fails.
pub fn classify(err: &DatabaseError) -> DatabaseErrorKind {
    match err {
        DatabaseError::NoRows => DatabaseErrorKind::RecordNotFound,
        DatabaseError::Driver { driver, code, .. } if is_unique_violation(*driver, code) => {
            DatabaseErrorKind::UniqueConstraintViolation
        }
        DatabaseError::Driver { .. } | DatabaseError::Other(_) => DatabaseErrorKind::Unclassified,
    }
}

/// Whether `code` from `driver` is listed as a unique-constraint violation
pub fn is_unique_violation(driver: Driver, code: &str) -> bool {
    let code = normalize_code(driver, code);
    UNIQUE_VIOLATION_CODES
        .iter()
        .any(|(d, c)| *d == driver && *c == code.as_ref())
}

/// SQLite reports extended result codes (2067 for UNIQUE, 1555 for PRIMARY
/// KEY); the low byte is the primary code the table is keyed on.
fn normalize_code(driver: Driver, code: &str) -> Cow<'_, str> {
    let code = code.trim();
    match driver {
        Driver::Sqlite => match code.parse::<i32>() {
            Ok(extended) => Cow::Owned((extended & 0xff).to_string()),
            Err(_) => Cow::Borrowed(code),
        },
        Driver::Postgres | Driver::MySql => Cow::Borrowed(code),
    }
}

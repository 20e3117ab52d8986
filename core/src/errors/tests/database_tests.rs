//! Unit tests for database error classification

use crate::errors::{classify, is_unique_violation, DatabaseError, DatabaseErrorKind, Driver};

#[test]
fn test_no_rows_is_record_not_found() {
    assert_eq!(classify(&DatabaseError::NoRows), DatabaseErrorKind::RecordNotFound);
}

#[test]
fn test_unique_violation_per_driver() {
    let errors = [
        DatabaseError::driver(Driver::Postgres, "23505", "duplicate key value violates unique constraint"),
        DatabaseError::driver(Driver::MySql, "1062", "Duplicate entry 'a@b.c' for key 'email'"),
        DatabaseError::driver(Driver::Sqlite, "2067", "UNIQUE constraint failed: users.email"),
        DatabaseError::driver(Driver::Sqlite, "1555", "UNIQUE constraint failed: users.id"),
        DatabaseError::driver(Driver::Sqlite, "19", "constraint failed"),
    ];

    for error in &errors {
        assert_eq!(
            classify(error),
            DatabaseErrorKind::UniqueConstraintViolation,
            "expected a unique violation for {}",
            error
        );
    }
}

#[test]
fn test_codes_are_driver_specific() {
    // 1062 means nothing to Postgres, 23505 means nothing to MySQL
    assert!(!is_unique_violation(Driver::Postgres, "1062"));
    assert!(!is_unique_violation(Driver::MySql, "23505"));
    assert!(!is_unique_violation(Driver::Sqlite, "23505"));
}

#[test]
fn test_other_driver_codes_are_unclassified() {
    let errors = [
        // foreign_key_violation
        DatabaseError::driver(Driver::Postgres, "23503", "violates foreign key constraint"),
        // ER_LOCK_DEADLOCK
        DatabaseError::driver(Driver::MySql, "1213", "Deadlock found"),
        // SQLITE_BUSY
        DatabaseError::driver(Driver::Sqlite, "5", "database is locked"),
        DatabaseError::driver(Driver::Sqlite, "not-a-number", "odd"),
        DatabaseError::Other("pool timed out while waiting for an open connection".into()),
    ];

    for error in &errors {
        assert_eq!(classify(error), DatabaseErrorKind::Unclassified, "{}", error);
    }
}

#[test]
fn test_kind_matches_classify() {
    let error = DatabaseError::driver(Driver::Postgres, "23505", "dup");
    assert_eq!(error.kind(), classify(&error));
}

#[test]
fn test_driver_error_display() {
    let error = DatabaseError::driver(Driver::MySql, "1062", "Duplicate entry");
    assert_eq!(error.to_string(), "mysql error 1062: Duplicate entry");
}

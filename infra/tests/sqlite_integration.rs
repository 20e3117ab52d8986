//! Integration tests against a real in-memory SQLite database
//!
//! Run with: cargo test -p eh_infra --test sqlite_integration

use eh_core::domain::NewUser;
use eh_core::errors::{classify, translate, AppError, DatabaseError, DatabaseErrorKind, Driver};
use eh_core::repositories::UserRepository;
use eh_infra::database::{map_sqlx_error, DatabasePool, SqliteUserRepository};
use eh_shared::config::DatabaseConfig;

async fn create_repository() -> (DatabasePool, SqliteUserRepository) {
    let pool = DatabasePool::new(DatabaseConfig::in_memory())
        .await
        .expect("Failed to create in-memory pool");
    let repository = SqliteUserRepository::new(pool.get_pool().clone());
    repository.migrate().await.expect("Failed to create users table");
    (pool, repository)
}

#[tokio::test]
async fn test_health_check() {
    let (pool, _) = create_repository().await;
    assert!(pool.health_check().await.unwrap());
    assert_eq!(pool.get_statistics().max_connections, 1);
}

#[tokio::test]
async fn test_pool_with_statement_logging() {
    let pool = DatabasePool::new(DatabaseConfig::in_memory().with_logging(true))
        .await
        .expect("Failed to create in-memory pool");

    assert!(pool.config().enable_logging);
    assert!(pool.config().is_in_memory());
    assert!(pool.health_check().await.unwrap());
    pool.close().await;
}

#[tokio::test]
async fn test_create_and_find_user() {
    let (_pool, repository) = create_repository().await;

    let created = repository
        .create(&NewUser::new("ada@example.com", "Ada"))
        .await
        .unwrap();
    let found = repository.find_by_id(created.id).await.unwrap();

    assert_eq!(found.email, "ada@example.com");
    assert_eq!(found.name, "Ada");
    assert_eq!(found.id, created.id);
}

#[tokio::test]
async fn test_duplicate_email_is_unique_violation() {
    let (_pool, repository) = create_repository().await;
    let new_user = NewUser::new("grace@example.com", "Grace");

    repository.create(&new_user).await.unwrap();
    let error = repository.create(&new_user).await.unwrap_err();

    match &error {
        DatabaseError::Driver { driver, code, .. } => {
            assert_eq!(*driver, Driver::Sqlite);
            // SQLITE_CONSTRAINT_UNIQUE
            assert_eq!(code, "2067");
        }
        other => panic!("expected a driver error, got {:?}", other),
    }
    assert_eq!(classify(&error), DatabaseErrorKind::UniqueConstraintViolation);

    let response = translate(&AppError::from(error));
    assert_eq!(response.status, 409);
    assert_eq!(response.error, "Duplicate entry, unique constraint violated");
}

#[tokio::test]
async fn test_missing_user_is_record_not_found() {
    let (_pool, repository) = create_repository().await;

    let error = repository.find_by_id(4242).await.unwrap_err();
    assert!(matches!(error, DatabaseError::NoRows));

    let response = translate(&AppError::from(error));
    assert_eq!(response.status, 404);
    assert_eq!(response.error, "Database record not found");
}

#[tokio::test]
async fn test_syntax_error_is_unclassified() {
    let (pool, _) = create_repository().await;

    let error = sqlx::query("SELEC nonsense")
        .execute(pool.get_pool())
        .await
        .map_err(map_sqlx_error)
        .unwrap_err();

    assert!(matches!(error, DatabaseError::Driver { driver: Driver::Sqlite, .. }));
    assert_eq!(classify(&error), DatabaseErrorKind::Unclassified);
    assert_eq!(translate(&AppError::from(error)).status, 500);
}

//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod customer_repository;
pub mod order_repository;
pub mod product_repository;
pub mod repository_provider;

pub use customer_repository::SeaOrmCustomerRepository;
pub use order_repository::SeaOrmOrderRepository;
pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

/// Unique index violations become `Conflict`, everything else is a storage failure.
fn db_err_with_conflict(e: DbErr, conflict: impl FnOnce() -> String) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(conflict()),
        _ => db_err(e),
    }
}

/// Shared fixture: a fresh in-memory SQLite database with the schema applied.
#[cfg(test)]
pub(crate) async fn test_db() -> sea_orm::DatabaseConnection {
    use sea_orm_migration::MigratorTrait;

    use super::{init_database, migrator::Migrator, DatabaseConfig};

    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};

use crate::domain::{
    CustomerRepository, DomainResult, OrderRepository, ProductRepository, RepositoryProvider,
};

use super::customer_repository::SeaOrmCustomerRepository;
use super::db_err;
use super::order_repository::SeaOrmOrderRepository;
use super::product_repository::SeaOrmProductRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let customer = repos.customers().find_by_tax_id("11144477735").await?;
/// let queue = repos.orders().find_by_status(OrderStatus::Received).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    customers: Arc<SeaOrmCustomerRepository>,
    products: Arc<SeaOrmProductRepository>,
    orders: Arc<SeaOrmOrderRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            customers: Arc::new(SeaOrmCustomerRepository::new(db.clone())),
            products: Arc::new(SeaOrmProductRepository::new(db.clone())),
            orders: Arc::new(SeaOrmOrderRepository::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customers.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

//! Product repository interface

use async_trait::async_trait;

use super::model::{Category, Product};
use crate::domain::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> DomainResult<()>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>>;
    /// Ordered by name.
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    /// Ordered by name.
    async fn find_by_category(&self, category: Category) -> DomainResult<Vec<Product>>;
    async fn update(&self, product: &Product) -> DomainResult<()>;
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

//! Customer repository interface

use async_trait::async_trait;

use super::model::Customer;
use crate::domain::DomainResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Fails with `Conflict` when the CPF is already taken.
    async fn create(&self, customer: &Customer) -> DomainResult<()>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Customer>>;
    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>>;
    /// Ordered by name.
    async fn find_all(&self) -> DomainResult<Vec<Customer>>;
    /// Fails with `NotFound` when no row was updated.
    async fn update(&self, customer: &Customer) -> DomainResult<()>;
    /// Fails with `NotFound` when no row was deleted.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}

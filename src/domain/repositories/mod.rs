//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use std::sync::Arc;

use async_trait::async_trait;

use super::customer::CustomerRepository;
use super::order::OrderRepository;
use super::product::ProductRepository;
use crate::shared::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Services receive the handles they need at construction:
///
/// ```ignore
/// let orders = OrderService::new(repos.orders(), repos.products(), repos.customers());
/// ```
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    fn customers(&self) -> Arc<dyn CustomerRepository>;
    fn products(&self) -> Arc<dyn ProductRepository>;
    fn orders(&self) -> Arc<dyn OrderRepository>;

    /// Round-trips the backing store.
    async fn ping(&self) -> DomainResult<()>;
}

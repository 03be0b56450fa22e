//! Order repository interface

use async_trait::async_trait;

use super::model::{Order, OrderStatus};
use crate::domain::DomainResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes the order and its items atomically.
    async fn create(&self, order: &Order) -> DomainResult<()>;
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>>;
    /// Newest first.
    async fn find_all(&self) -> DomainResult<Vec<Order>>;
    /// Oldest first, the order the kitchen works through them.
    async fn find_by_status(&self, status: OrderStatus) -> DomainResult<Vec<Order>>;
    /// Newest first.
    async fn find_by_customer(&self, customer_id: &str) -> DomainResult<Vec<Order>>;
    /// Persists status and `updated_at`. Fails with `NotFound` when no row matched.
    async fn update_status(&self, order: &Order) -> DomainResult<()>;
}

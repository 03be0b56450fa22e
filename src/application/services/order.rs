//! Order service: checkout and kitchen status tracking

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::order::resolve_items;
use crate::domain::{
    CustomerRepository, DomainError, DomainResult, Order, OrderItemRequest, OrderRepository,
    OrderStatus, ProductRepository,
};

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    /// Prices every line from the catalog and stores the order with its items.
    ///
    /// Nothing is persisted unless every line resolves.
    pub async fn create(
        &self,
        customer_id: Option<String>,
        items: Vec<OrderItemRequest>,
    ) -> DomainResult<Order> {
        let customer_id = customer_id.filter(|id| !id.trim().is_empty());
        if let Some(id) = &customer_id {
            if self.customers.find_by_id(id).await?.is_none() {
                return Err(DomainError::not_found("Customer", "id", id));
            }
        }

        let resolved = resolve_items(self.products.as_ref(), items).await?;
        let order = Order::new(Uuid::new_v4().to_string(), customer_id, resolved)?;
        self.orders.create(&order).await?;

        metrics::counter!("orders_created_total").increment(1);
        info!(
            order_id = %order.id,
            items = order.items.len(),
            total = order.total,
            "Order received"
        );
        Ok(order)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Order", "id", id))
    }

    /// Newest first.
    pub async fn list(&self) -> DomainResult<Vec<Order>> {
        self.orders.find_all().await
    }

    /// Oldest first. `status` is the wire value, e.g. `"EM_PREPARACAO"`.
    pub async fn list_by_status(&self, status: &str) -> DomainResult<Vec<Order>> {
        let status = OrderStatus::from_str(status)?;
        self.orders.find_by_status(status).await
    }

    pub async fn list_by_customer(&self, customer_id: &str) -> DomainResult<Vec<Order>> {
        self.orders.find_by_customer(customer_id).await
    }

    /// Moves the order to `status`. Any status may follow any other.
    pub async fn update_status(&self, id: &str, status: &str) -> DomainResult<Order> {
        let status = OrderStatus::from_str(status)?;

        let mut order = self.get(id).await?;
        let previous = order.status;
        order.update_status(status);
        self.orders.update_status(&order).await?;

        metrics::counter!("order_status_changes_total", "status" => status.as_str()).increment(1);
        info!(order_id = %order.id, from = %previous, to = %status, "Order status changed");
        Ok(order)
    }
}

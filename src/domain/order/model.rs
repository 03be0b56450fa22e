//! Order domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Kitchen lifecycle of an order
///
/// Any status may be set from any other; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "RECEBIDO")]
    Received,
    #[serde(rename = "EM_PREPARACAO")]
    InPreparation,
    #[serde(rename = "PRONTO")]
    Ready,
    #[serde(rename = "FINALIZADO")]
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        Self::Received,
        Self::InPreparation,
        Self::Ready,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "RECEBIDO",
            Self::InPreparation => "EM_PREPARACAO",
            Self::Ready => "PRONTO",
            Self::Completed => "FINALIZADO",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Received
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("invalid status: {s}")))
    }
}

/// Line item with the catalog name and price captured at order time
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub note: Option<String>,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    /// `None` for anonymous orders
    pub customer_id: Option<String>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Builds a received order from already resolved items and computes its total.
    pub fn new(
        id: impl Into<String>,
        customer_id: Option<String>,
        items: Vec<OrderItem>,
    ) -> DomainResult<Self> {
        Self::validate_items(&items)?;

        let total = items.iter().map(OrderItem::subtotal).sum();
        let now = Utc::now();
        Ok(Self {
            id: id.into(),
            customer_id,
            items,
            total,
            status: OrderStatus::Received,
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_items(items: &[OrderItem]) -> DomainResult<()> {
        if items.is_empty() {
            return Err(DomainError::validation("order must contain at least one item"));
        }

        for item in items {
            if item.product_id.trim().is_empty() {
                return Err(DomainError::validation("product_id must not be empty"));
            }
            if item.quantity <= 0 {
                return Err(DomainError::validation("quantity must be greater than zero"));
            }
            if !(item.price > 0.0) {
                return Err(DomainError::validation("price must be greater than zero"));
            }
        }
        Ok(())
    }

    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: f64, quantity: i32) -> OrderItem {
        OrderItem {
            product_id: product_id.into(),
            name: format!("product {product_id}"),
            price,
            quantity,
            note: None,
        }
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let order = Order::new("o-1", None, vec![item("a", 10.0, 2), item("b", 5.5, 1)]).unwrap();
        assert_eq!(order.total, 25.5);
        assert_eq!(order.status, OrderStatus::Received);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn rejects_empty_and_malformed_items() {
        assert!(matches!(
            Order::new("o-1", None, vec![]),
            Err(DomainError::Validation(_))
        ));
        assert!(Order::new("o-1", None, vec![item("", 1.0, 1)]).is_err());
        assert!(Order::new("o-1", None, vec![item("a", 1.0, 0)]).is_err());
        assert!(Order::new("o-1", None, vec![item("a", 0.0, 1)]).is_err());
    }

    #[test]
    fn any_status_can_follow_any_other() {
        let mut order = Order::new("o-1", Some("c-1".into()), vec![item("a", 3.0, 1)]).unwrap();
        order.update_status(OrderStatus::Completed);
        order.update_status(OrderStatus::Received);
        assert_eq!(order.status, OrderStatus::Received);
        assert!(order.updated_at >= order.created_at);
    }

    #[test]
    fn status_wire_values() {
        assert_eq!(OrderStatus::from_str("EM_PREPARACAO").unwrap(), OrderStatus::InPreparation);
        assert_eq!(OrderStatus::Ready.to_string(), "PRONTO");
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).unwrap(),
            "\"FINALIZADO\""
        );
        assert!(matches!(
            OrderStatus::from_str("CANCELLED"),
            Err(DomainError::Validation(_))
        ));
    }
}

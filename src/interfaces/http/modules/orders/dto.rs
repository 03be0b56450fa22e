//! Order DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Order, OrderItem, OrderItemRequest};

/// Message returned alongside a freshly created order.
pub const CHECKOUT_MESSAGE: &str = "Pedido criado e enviado para fila com sucesso";

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemDto {
    #[serde(rename = "produto_id")]
    pub product_id: String,
    /// Product name at checkout time
    #[serde(rename = "nome")]
    pub name: String,
    /// Unit price at checkout time
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<OrderItem> for OrderItemDto {
    fn from(i: OrderItem) -> Self {
        Self {
            product_id: i.product_id,
            name: i.name,
            price: i.price,
            quantity: i.quantity,
            note: i.note,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderDto {
    pub id: String,
    #[serde(rename = "cliente_id")]
    pub customer_id: Option<String>,
    #[serde(rename = "itens")]
    pub items: Vec<OrderItemDto>,
    #[serde(rename = "valor_total")]
    pub total: f64,
    /// `RECEBIDO`, `EM_PREPARACAO`, `PRONTO` or `FINALIZADO`
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            items: o.items.into_iter().map(OrderItemDto::from).collect(),
            total: o.total,
            status: o.status.to_string(),
            created_at: o.created_at.to_rfc3339(),
            updated_at: o.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    #[serde(rename = "pedido")]
    pub order: OrderDto,
}

/// One requested line. Client-sent prices are ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OrderItemInput {
    #[serde(rename = "produto_id", default)]
    pub product_id: String,
    #[serde(rename = "quantidade", default)]
    pub quantity: i32,
    #[serde(rename = "observacao", default)]
    #[validate(length(max = 255))]
    pub note: Option<String>,
}

impl From<OrderItemInput> for OrderItemRequest {
    fn from(i: OrderItemInput) -> Self {
        Self {
            product_id: i.product_id,
            quantity: i.quantity,
            note: i.note.filter(|n| !n.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    /// Omit for an anonymous order
    #[serde(rename = "cliente_id", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "itens", default)]
    #[validate(nested)]
    pub items: Vec<OrderItemInput>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListOrdersParams {
    /// Takes precedence over `cliente_id`
    pub status: Option<String>,
    pub cliente_id: Option<String>,
}

//! Order entity for database
//!
//! Line items live in `order_items` and are loaded separately.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Order, OrderItem, OrderStatus};

/// Stored order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Status {
    #[sea_orm(string_value = "RECEBIDO")]
    Received,
    #[sea_orm(string_value = "EM_PREPARACAO")]
    InPreparation,
    #[sea_orm(string_value = "PRONTO")]
    Ready,
    #[sea_orm(string_value = "FINALIZADO")]
    Completed,
}

impl From<OrderStatus> for Status {
    fn from(s: OrderStatus) -> Self {
        match s {
            OrderStatus::Received => Self::Received,
            OrderStatus::InPreparation => Self::InPreparation,
            OrderStatus::Ready => Self::Ready,
            OrderStatus::Completed => Self::Completed,
        }
    }
}

impl From<Status> for OrderStatus {
    fn from(s: Status) -> Self {
        match s {
            Status::Received => Self::Received,
            Status::InPreparation => Self::InPreparation,
            Status::Ready => Self::Ready,
            Status::Completed => Self::Completed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// `None` for anonymous orders
    pub customer_id: Option<String>,

    pub total: f64,

    pub status: Status,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::Id",
        on_delete = "SetNull"
    )]
    Customer,

    #[sea_orm(has_many = "super::order_item::Entity")]
    Items,
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assembles the domain order from its header row and item rows.
    pub fn into_domain(self, items: Vec<super::order_item::Model>) -> Order {
        Order {
            id: self.id,
            customer_id: self.customer_id,
            items: items.into_iter().map(OrderItem::from).collect(),
            total: self.total,
            status: self.status.into(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&Order> for ActiveModel {
    fn from(o: &Order) -> Self {
        Self {
            id: Set(o.id.clone()),
            customer_id: Set(o.customer_id.clone()),
            total: Set(o.total),
            status: Set(o.status.into()),
            created_at: Set(o.created_at),
            updated_at: Set(o.updated_at),
        }
    }
}

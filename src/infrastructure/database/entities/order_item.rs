//! Order line item entity

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::OrderItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    /// Insertion order doubles as line order within an order
    #[sea_orm(primary_key)]
    pub id: i32,

    pub order_id: String,

    pub product_id: String,

    /// Product name at order time
    pub name: String,

    /// Unit price at order time
    pub price: f64,

    pub quantity: i32,

    #[sea_orm(nullable)]
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OrderItem {
    fn from(m: Model) -> Self {
        Self {
            product_id: m.product_id,
            name: m.name,
            price: m.price,
            quantity: m.quantity,
            note: m.note,
        }
    }
}

impl ActiveModel {
    pub fn for_order(order_id: &str, item: &OrderItem) -> Self {
        Self {
            id: NotSet,
            order_id: Set(order_id.to_string()),
            product_id: Set(item.product_id.clone()),
            name: Set(item.name.clone()),
            price: Set(item.price),
            quantity: Set(item.quantity),
            note: Set(item.note.clone()),
        }
    }
}

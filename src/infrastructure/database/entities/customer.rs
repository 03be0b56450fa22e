//! Customer entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::Customer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    /// CPF, digits only
    #[sea_orm(unique)]
    pub tax_id: String,

    pub email: String,

    pub phone: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            tax_id: m.tax_id,
            email: m.email,
            phone: m.phone,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&Customer> for ActiveModel {
    fn from(c: &Customer) -> Self {
        Self {
            id: Set(c.id.clone()),
            name: Set(c.name.clone()),
            tax_id: Set(c.tax_id.clone()),
            email: Set(c.email.clone()),
            phone: Set(c.phone.clone()),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        }
    }
}

//! Product entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Category, Product};

/// Stored product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ProductCategory {
    #[sea_orm(string_value = "LANCHE")]
    Snack,
    #[sea_orm(string_value = "ACOMPANHAMENTO")]
    Side,
    #[sea_orm(string_value = "BEBIDA")]
    Beverage,
    #[sea_orm(string_value = "SOBREMESA")]
    Dessert,
}

impl From<Category> for ProductCategory {
    fn from(c: Category) -> Self {
        match c {
            Category::Snack => Self::Snack,
            Category::Side => Self::Side,
            Category::Beverage => Self::Beverage,
            Category::Dessert => Self::Dessert,
        }
    }
}

impl From<ProductCategory> for Category {
    fn from(c: ProductCategory) -> Self {
        match c {
            ProductCategory::Snack => Self::Snack,
            ProductCategory::Side => Self::Side,
            ProductCategory::Beverage => Self::Beverage,
            ProductCategory::Dessert => Self::Dessert,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub price: f64,

    pub category: ProductCategory,

    pub available: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            category: m.category.into(),
            available: m.available,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<&Product> for ActiveModel {
    fn from(p: &Product) -> Self {
        Self {
            id: Set(p.id.clone()),
            name: Set(p.name.clone()),
            description: Set(p.description.clone()),
            price: Set(p.price),
            category: Set(p.category.into()),
            available: Set(p.available),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        }
    }
}

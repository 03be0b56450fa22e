//! Product DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{Product, ProductChanges};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "preco")]
    pub price: f64,
    /// `LANCHE`, `ACOMPANHAMENTO`, `BEBIDA` or `SOBREMESA`
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "disponivel")]
    pub available: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            category: p.category.to_string(),
            available: p.available,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Create and full-replace payload. `disponivel` is ignored on create.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(rename = "descricao", default)]
    #[validate(length(max = 1000))]
    pub description: String,
    #[serde(rename = "preco", default)]
    pub price: f64,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(rename = "disponivel", default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl From<ProductRequest> for ProductChanges {
    fn from(r: ProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            price: r.price,
            category: r.category,
            available: r.available,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListProductsParams {
    /// Only products of this category
    pub categoria: Option<String>,
}

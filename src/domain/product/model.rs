//! Product domain entity

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Menu section a product is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "LANCHE")]
    Snack,
    #[serde(rename = "ACOMPANHAMENTO")]
    Side,
    #[serde(rename = "BEBIDA")]
    Beverage,
    #[serde(rename = "SOBREMESA")]
    Dessert,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Snack, Self::Side, Self::Beverage, Self::Dessert];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Snack => "LANCHE",
            Self::Side => "ACOMPANHAMENTO",
            Self::Beverage => "BEBIDA",
            Self::Dessert => "SOBREMESA",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("invalid category: {s}")))
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price
    pub price: f64,
    pub category: Category,
    /// Unavailable products cannot be ordered
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement payload for an existing product
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

impl Product {
    /// Builds a new, available product. `category` is the wire value.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: &str,
    ) -> DomainResult<Self> {
        let name = name.into();
        let description = description.into();
        Self::check_text(&name, &description)?;
        let category = Category::from_str(category)?;
        Self::check_price(price)?;

        let now = Utc::now();
        Ok(Self {
            id: id.into(),
            name,
            description,
            price,
            category,
            available: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy with every editable field replaced, including availability.
    pub fn with_changes(&self, changes: ProductChanges) -> DomainResult<Self> {
        Self::check_text(&changes.name, &changes.description)?;
        let category = Category::from_str(&changes.category)?;
        Self::check_price(changes.price)?;

        Ok(Self {
            id: self.id.clone(),
            name: changes.name,
            description: changes.description,
            price: changes.price,
            category,
            available: changes.available,
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    fn check_text(name: &str, description: &str) -> DomainResult<()> {
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        if description.is_empty() {
            return Err(DomainError::validation("description must not be empty"));
        }
        Ok(())
    }

    fn check_price(price: f64) -> DomainResult<()> {
        // NaN fails this comparison too
        if !(price > 0.0) {
            return Err(DomainError::validation("price must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_values() {
        assert_eq!(Category::from_str("BEBIDA").unwrap(), Category::Beverage);
        assert_eq!(Category::Side.to_string(), "ACOMPANHAMENTO");
        assert_eq!(serde_json::to_string(&Category::Snack).unwrap(), "\"LANCHE\"");
        assert!(Category::from_str("bebida").is_err());
    }

    #[test]
    fn new_product_is_available() {
        let p = Product::new("p-1", "X-Burger", "Pão, carne e queijo", 18.5, "LANCHE").unwrap();
        assert!(p.available);
        assert_eq!(p.category, Category::Snack);
        assert_eq!(p.created_at, p.updated_at);
    }

    #[test]
    fn rule_order_is_emptiness_then_category_then_price() {
        let err = Product::new("p-1", "", "", -1.0, "PIZZA").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "name must not be empty"));

        let err = Product::new("p-1", "X", "", -1.0, "PIZZA").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m == "description must not be empty"));

        let err = Product::new("p-1", "X", "Y", -1.0, "PIZZA").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("category")));

        let err = Product::new("p-1", "X", "Y", 0.0, "LANCHE").unwrap_err();
        assert!(matches!(err, DomainError::Validation(ref m) if m.contains("price")));
    }

    #[test]
    fn whitespace_only_text_counts_as_present() {
        let p = Product::new("p-1", " ", " ", 3.0, "SOBREMESA").unwrap();
        assert_eq!(p.name, " ");
        assert_eq!(p.description, " ");
    }

    #[test]
    fn with_changes_replaces_availability() {
        let p = Product::new("p-1", "Suco", "Laranja", 7.0, "BEBIDA").unwrap();
        let updated = p
            .with_changes(ProductChanges {
                name: "Suco".into(),
                description: "Laranja 500ml".into(),
                price: 8.0,
                category: "BEBIDA".into(),
                available: false,
            })
            .unwrap();
        assert!(!updated.available);
        assert_eq!(updated.price, 8.0);
        assert_eq!(updated.created_at, p.created_at);
    }
}

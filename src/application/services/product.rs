//! Product catalog service

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::domain::{Category, DomainError, DomainResult, Product, ProductChanges, ProductRepository};

pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Adds a product to the catalog. `input.available` is ignored; new
    /// products always start available.
    pub async fn create(&self, input: ProductChanges) -> DomainResult<Product> {
        let product = Product::new(
            Uuid::new_v4().to_string(),
            input.name,
            input.description,
            input.price,
            &input.category,
        )?;
        self.repo.create(&product).await?;

        info!(product_id = %product.id, category = %product.category, "Product created");
        Ok(product)
    }

    pub async fn get(&self, id: &str) -> DomainResult<Product> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", "id", id))
    }

    pub async fn list(&self) -> DomainResult<Vec<Product>> {
        self.repo.find_all().await
    }

    /// `category` is the wire value, e.g. `"BEBIDA"`.
    pub async fn list_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        let category = Category::from_str(category)?;
        self.repo.find_by_category(category).await
    }

    pub async fn update(&self, id: &str, changes: ProductChanges) -> DomainResult<Product> {
        let existing = self.get(id).await?;
        let updated = existing.with_changes(changes)?;
        self.repo.update(&updated).await?;

        info!(product_id = %updated.id, available = updated.available, "Product updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryProductRepository;

    fn input(name: &str, price: f64, category: &str, available: bool) -> ProductChanges {
        ProductChanges {
            name: name.into(),
            description: format!("{name} da casa"),
            price,
            category: category.into(),
            available,
        }
    }

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::default()))
    }

    #[tokio::test]
    async fn create_forces_availability() {
        let svc = service();
        let p = svc.create(input("Brownie", 8.0, "SOBREMESA", false)).await.unwrap();
        assert!(p.available);
        assert_eq!(svc.get(&p.id).await.unwrap(), p);
    }

    #[tokio::test]
    async fn list_by_category_validates_the_category() {
        let svc = service();
        svc.create(input("Suco", 7.0, "BEBIDA", true)).await.unwrap();
        svc.create(input("X-Tudo", 25.0, "LANCHE", true)).await.unwrap();

        let drinks = svc.list_by_category("BEBIDA").await.unwrap();
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Suco");

        assert!(matches!(
            svc.list_by_category("PIZZA").await,
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let svc = service();
        let p = svc.create(input("Suco", 7.0, "BEBIDA", true)).await.unwrap();

        let updated = svc
            .update(&p.id, input("Suco de uva", 8.5, "BEBIDA", false))
            .await
            .unwrap();
        assert_eq!(updated.name, "Suco de uva");
        assert!(!updated.available);
        assert_eq!(svc.get(&p.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_rejects_missing_and_invalid() {
        let svc = service();
        assert!(matches!(
            svc.update("missing", input("Suco", 7.0, "BEBIDA", true)).await,
            Err(DomainError::NotFound { entity: "Product", .. })
        ));

        let p = svc.create(input("Suco", 7.0, "BEBIDA", true)).await.unwrap();
        assert!(matches!(
            svc.update(&p.id, input("Suco", -1.0, "BEBIDA", true)).await,
            Err(DomainError::Validation(_))
        ));
        assert_eq!(svc.get(&p.id).await.unwrap().price, 7.0);
    }
}

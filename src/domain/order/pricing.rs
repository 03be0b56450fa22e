//! Catalog price resolution for incoming order lines

use tracing::debug;

use super::model::OrderItem;
use crate::domain::product::ProductRepository;
use crate::domain::{DomainError, DomainResult};

/// Order line as requested by the client, before catalog lookup
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i32,
    pub note: Option<String>,
}

/// Resolves every requested line against the catalog.
///
/// Name and price always come from the stored product. The first unknown or
/// unavailable product aborts the whole resolution.
pub async fn resolve_items(
    catalog: &dyn ProductRepository,
    requests: Vec<OrderItemRequest>,
) -> DomainResult<Vec<OrderItem>> {
    let mut items = Vec::with_capacity(requests.len());

    for request in requests {
        let product = catalog
            .find_by_id(&request.product_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Product", "id", &request.product_id))?;

        if !product.available {
            return Err(DomainError::Unavailable(format!(
                "product {} is not available",
                product.name
            )));
        }

        debug!(product_id = %product.id, price = product.price, "Resolved order item");
        items.push(OrderItem {
            product_id: product.id,
            name: product.name,
            price: product.price,
            quantity: request.quantity,
            note: request.note,
        });
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::{Product, ProductChanges};
    use crate::infrastructure::storage::memory::InMemoryProductRepository;

    fn request(product_id: &str, quantity: i32) -> OrderItemRequest {
        OrderItemRequest {
            product_id: product_id.into(),
            quantity,
            note: None,
        }
    }

    async fn catalog() -> InMemoryProductRepository {
        let repo = InMemoryProductRepository::default();
        let burger = Product::new("burger", "X-Burger", "Carne e queijo", 10.0, "LANCHE").unwrap();
        let fries = Product::new("fries", "Batata", "Porção média", 5.5, "ACOMPANHAMENTO").unwrap();
        let soda = Product::new("soda", "Refrigerante", "Lata", 6.0, "BEBIDA")
            .unwrap()
            .with_changes(ProductChanges {
                name: "Refrigerante".into(),
                description: "Lata".into(),
                price: 6.0,
                category: "BEBIDA".into(),
                available: false,
            })
            .unwrap();
        for p in [burger, fries, soda] {
            repo.create(&p).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn prices_come_from_catalog() {
        let repo = catalog().await;
        let items = resolve_items(&repo, vec![request("burger", 2), request("fries", 1)])
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "X-Burger");
        assert_eq!(items[0].price, 10.0);
        assert_eq!(items[1].product_id, "fries");
        let total: f64 = items.iter().map(OrderItem::subtotal).sum();
        assert_eq!(total, 25.5);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let repo = catalog().await;
        let err = resolve_items(&repo, vec![request("burger", 1), request("pizza", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Product", .. }));
    }

    #[tokio::test]
    async fn unavailable_product_is_rejected() {
        let repo = catalog().await;
        let err = resolve_items(&repo, vec![request("soda", 1)]).await.unwrap_err();
        assert!(matches!(err, DomainError::Unavailable(_)));
    }
}

//! In-memory repositories for development and testing

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Category, Customer, CustomerRepository, DomainError, DomainResult, Order, OrderRepository,
    OrderStatus, Product, ProductRepository, RepositoryProvider,
};

#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: DashMap<String, Customer>,
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, customer: &Customer) -> DomainResult<()> {
        if self.customers.iter().any(|c| c.tax_id == customer.tax_id) {
            return Err(DomainError::Conflict(format!(
                "customer with CPF {}",
                customer.tax_id
            )));
        }
        self.customers.insert(customer.id.clone(), customer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Customer>> {
        Ok(self.customers.get(id).map(|c| c.clone()))
    }

    async fn find_by_tax_id(&self, tax_id: &str) -> DomainResult<Option<Customer>> {
        Ok(self
            .customers
            .iter()
            .find(|c| c.tax_id == tax_id)
            .map(|c| c.value().clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Customer>> {
        let mut all: Vec<Customer> = self.customers.iter().map(|c| c.value().clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn update(&self, customer: &Customer) -> DomainResult<()> {
        if self
            .customers
            .iter()
            .any(|c| c.id != customer.id && c.tax_id == customer.tax_id)
        {
            return Err(DomainError::Conflict(format!(
                "customer with CPF {}",
                customer.tax_id
            )));
        }
        match self.customers.get_mut(&customer.id) {
            Some(mut existing) => {
                *existing = customer.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Customer", "id", &customer.id)),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.customers
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Customer", "id", id))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    products: DashMap<String, Product>,
}

impl InMemoryProductRepository {
    fn sorted(&self, filter: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| filter(p.value()))
            .map(|p| p.value().clone())
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: &Product) -> DomainResult<()> {
        self.products.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Product>> {
        Ok(self.products.get(id).map(|p| p.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.sorted(|_| true))
    }

    async fn find_by_category(&self, category: Category) -> DomainResult<Vec<Product>> {
        Ok(self.sorted(|p| p.category == category))
    }

    async fn update(&self, product: &Product) -> DomainResult<()> {
        match self.products.get_mut(&product.id) {
            Some(mut existing) => {
                *existing = product.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Product", "id", &product.id)),
        }
    }

    async fn delete(&self, id: &str) -> DomainResult<()> {
        self.products
            .remove(id)
            .ok_or_else(|| DomainError::not_found("Product", "id", id))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: DashMap<String, Order>,
}

impl InMemoryOrderRepository {
    fn collect(&self, filter: impl Fn(&Order) -> bool, newest_first: bool) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| filter(o.value()))
            .map(|o| o.value().clone())
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        if newest_first {
            orders.reverse();
        }
        orders
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: &Order) -> DomainResult<()> {
        self.orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Order>> {
        Ok(self.orders.get(id).map(|o| o.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        Ok(self.collect(|_| true, true))
    }

    async fn find_by_status(&self, status: OrderStatus) -> DomainResult<Vec<Order>> {
        Ok(self.collect(|o| o.status == status, false))
    }

    async fn find_by_customer(&self, customer_id: &str) -> DomainResult<Vec<Order>> {
        Ok(self.collect(|o| o.customer_id.as_deref() == Some(customer_id), true))
    }

    async fn update_status(&self, order: &Order) -> DomainResult<()> {
        match self.orders.get_mut(&order.id) {
            Some(mut existing) => {
                existing.status = order.status;
                existing.updated_at = order.updated_at;
                Ok(())
            }
            None => Err(DomainError::not_found("Order", "id", &order.id)),
        }
    }
}

/// Bundles the in-memory repositories behind [`RepositoryProvider`]
#[derive(Clone, Default)]
pub struct InMemoryRepositoryProvider {
    customers: Arc<InMemoryCustomerRepository>,
    products: Arc<InMemoryProductRepository>,
    orders: Arc<InMemoryOrderRepository>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositoryProvider for InMemoryRepositoryProvider {
    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customers.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_tax_id_conflicts() {
        let repo = InMemoryCustomerRepository::default();
        let a = Customer::new("a", "Ana", "11144477735", "ana@example.com", "11").unwrap();
        let b = Customer::new("b", "Bia", "111.444.777-35", "bia@example.com", "22").unwrap();
        repo.create(&a).await.unwrap();
        assert!(matches!(repo.create(&b).await, Err(DomainError::Conflict(_))));
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let repo = InMemoryProductRepository::default();
        assert!(matches!(
            repo.delete("nope").await,
            Err(DomainError::NotFound { entity: "Product", .. })
        ));
    }
}

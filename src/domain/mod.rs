//! Domain layer: entities, validation rules and repository contracts

pub mod customer;
pub mod order;
pub mod product;
pub mod repositories;
pub mod validation;

pub use customer::{Customer, CustomerChanges, CustomerRepository};
pub use order::{Order, OrderItem, OrderItemRequest, OrderRepository, OrderStatus};
pub use product::{Category, Product, ProductChanges, ProductRepository};
pub use repositories::{DomainResult, RepositoryProvider};

pub use crate::shared::DomainError;

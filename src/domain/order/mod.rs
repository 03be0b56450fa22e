//! Order aggregate
//!
//! Orders, their line items, catalog price resolution and the status lifecycle.

pub mod model;
pub mod pricing;
pub mod repository;

pub use model::{Order, OrderItem, OrderStatus};
pub use pricing::{resolve_items, OrderItemRequest};
pub use repository::OrderRepository;

//! Application services

mod customer;
mod order;
mod product;

pub use customer::CustomerService;
pub use order::OrderService;
pub use product::ProductService;

//! Application layer: use-case orchestration on top of the domain repositories

pub mod services;

pub use services::{CustomerService, OrderService, ProductService};

//! REST resources, one module per aggregate, plus cross-cutting middleware

pub mod customers;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod products;
pub mod request_id;

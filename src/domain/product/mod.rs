//! Product aggregate
//!
//! Catalog entries that orders are priced against.

pub mod model;
pub mod repository;

pub use model::{Category, Product, ProductChanges};
pub use repository::ProductRepository;

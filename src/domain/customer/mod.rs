//! Customer aggregate
//!
//! Contains the Customer entity, its validation rules, and repository interface.

pub mod model;
pub mod repository;

pub use model::{Customer, CustomerChanges};
pub use repository::CustomerRepository;

//! # Snack Bar API
//!
//! Self-service ordering backend for a fast-food counter: customer
//! registration by CPF, a product catalog, and orders priced from the
//! catalog that move through the kitchen status board.
//!
//! ## Architecture
//!
//! - **domain**: entities, validation rules and repository contracts
//! - **application**: services implementing the use cases
//! - **infrastructure**: SeaORM persistence and in-memory repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: process wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, InMemoryRepositoryProvider, SeaOrmRepositoryProvider};

pub use interfaces::{create_api_router, AppState, RouterOptions};

pub use shared::{DomainError, InfraError};

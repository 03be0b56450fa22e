//! Customer module: registration and lookup by id or CPF

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

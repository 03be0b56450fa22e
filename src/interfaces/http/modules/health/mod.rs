//! Liveness and database probe

pub mod handlers;

pub use handlers::*;

//! Product module: catalog maintenance

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

//! Order module: fake checkout and kitchen status board

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

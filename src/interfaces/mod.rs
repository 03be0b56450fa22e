//! Interface layer - external entry points

pub mod http;

pub use http::{create_api_router, AppState, RouterOptions};

//! HTTP REST API
//!
//! - `common`: error mapping and the validating JSON extractor
//! - `modules`: one module per resource, plus request-id and metrics middleware
//! - `router`: route table, OpenAPI document and layers

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState, RouterOptions, API_PREFIX};

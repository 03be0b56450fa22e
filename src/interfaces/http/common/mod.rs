//! Shared HTTP plumbing: error responses and the validating JSON extractor

pub mod api_error;
pub mod validated_json;

pub use api_error::{ApiError, ErrorBody};
pub use validated_json::ValidatedJson;

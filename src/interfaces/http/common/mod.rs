//! Shared HTTP building blocks: response envelope, error mapping, extractors

pub mod api_query;
pub mod error;
pub mod list_params;
pub mod response;
pub mod validated_json;

pub use api_query::ApiQuery;
pub use error::{ApiError, ErrorCode};
pub use list_params::ListParams;
pub use response::ApiResponse;
pub use validated_json::ValidatedJson;

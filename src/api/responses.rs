use serde::Serialize;
use utoipa::ToSchema;

/// Error payload returned by the API surface
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// src/api/schemas.rs
//
// Documentation-only shapes for the `ApiResponse` envelope.
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `SLUG_ALREADY_EXISTS`, `UNAUTHORIZED`
    #[schema(example = "PROJECT_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Project not found")]
    pub message: String,
}

/// Payload of a successful delete.
#[derive(Serialize, ToSchema)]
pub struct DeletedAck {
    #[schema(example = true)]
    pub deleted: bool,
}

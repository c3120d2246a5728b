use actix_web::{get, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminSessionResponse {
    #[schema(example = "admin")]
    pub username: String,

    /// Unix timestamp (seconds) at which the token stops being accepted
    pub expires_at: i64,
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/admin/session",
    tag = "admin",
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<AdminSessionResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/admin/session")]
pub async fn admin_session_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(AdminSessionResponse {
        username: session.username,
        expires_at: session.expires_at,
    })
}

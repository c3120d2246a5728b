use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::use_cases::login_admin::{
    LoginAdminError, LoginAdminRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin login request
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginAdminRequestDto {
    #[schema(example = "admin")]
    pub username: String,

    #[schema(example = "correct horse battery staple")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginAdminResponseDto {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    #[schema(example = "Bearer")]
    pub token_type: String,

    /// Token lifetime in seconds
    #[schema(example = 1800)]
    pub expires_in: i64,
}

/// Admin login
///
/// Exchanges the configured admin credentials for a session token used on
/// every mutation endpoint.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "admin",
    request_body = LoginAdminRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginAdminResponseDto>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    req: web::Json<LoginAdminRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    if req.username.trim().is_empty() || req.password.is_empty() {
        return ApiResponse::bad_request("VALIDATION_ERROR", "username and password are required");
    }

    let request = LoginAdminRequest {
        username: req.username,
        password: req.password,
    };

    match data.login_admin.execute(request).await {
        Ok(res) => {
            info!("Admin logged in");
            ApiResponse::success(LoginAdminResponseDto {
                access_token: res.access_token,
                token_type: "Bearer".to_string(),
                expires_in: res.expires_in,
            })
        }
        Err(LoginAdminError::InvalidCredentials) => ApiResponse::unauthorized(),
        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::resume::application::ports::incoming::use_cases::GetResumeError;
use crate::modules::resume::domain::entities::Resume;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the resume
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Resume", body = inline(SuccessResponse<Resume>)),
        (status = 404, description = "No resume stored yet", body = ErrorResponse),
        (status = 400, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.resume.get.execute().await {
        Ok(resume) => ApiResponse::success(resume),

        Err(GetResumeError::NotFound) => {
            ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found")
        }

        Err(GetResumeError::RepositoryError(msg)) => {
            error!("Failed to load resume: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

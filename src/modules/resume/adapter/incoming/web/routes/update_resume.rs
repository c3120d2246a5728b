use actix_web::{put, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::resume::application::ports::incoming::use_cases::UpdateResumeError;
use crate::modules::resume::domain::entities::Resume;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replace the resume document, creating it if absent
#[utoipa::path(
    put,
    path = "/api/resume",
    tag = "resume",
    request_body = Resume,
    responses(
        (status = 200, description = "Stored resume", body = inline(SuccessResponse<Resume>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[put("/api/resume")]
pub async fn update_resume_handler(
    admin: AdminSession,
    req: web::Json<Resume>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.update.execute(req.into_inner()).await {
        Ok(resume) => {
            info!(admin = %admin.username, "Resume updated");
            data.site.expire_all();
            ApiResponse::success(resume)
        }

        Err(UpdateResumeError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(UpdateResumeError::RepositoryError(msg)) => {
            error!("Failed to store resume: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

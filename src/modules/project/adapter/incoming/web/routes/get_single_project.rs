use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<ProjectRecord>)),
        (status = 404, description = "No such project", body = ErrorResponse),
        (status = 400, description = "Store error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::RepositoryError(msg)) => {
            error!(%project_id, "Failed to load project: {}", msg);
            ApiResponse::store_error(&msg)
        }
    }
}

use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::adapter::incoming::web::extractors::AdminSession;
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
use crate::modules::project::domain::entities::ProjectRecord;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full project body, shared by create (POST) and replace (PUT).
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    #[schema(example = "rust-portfolio")]
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

impl From<ProjectRequest> for ProjectData {
    fn from(req: ProjectRequest) -> Self {
        ProjectData {
            slug: req.slug,
            title: req.title,
            description: req.description,
            tags: req.tags,
            link: req.link,
            github: req.github,
            image: req.image,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Create a project
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectRecord>)),
        (status = 400, description = "Validation or store error", body = ErrorResponse),
        (status = 401, description = "Not signed in", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _admin: AdminSession,
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner().into()).await {
        Ok(created) => {
            info!(slug = %created.slug, "Project created");
            data.site.expire_all();
            ApiResponse::created(created)
        }

        Err(CreateProjectError::Validation(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(CreateProjectError::SlugAlreadyExists) => {
            ApiResponse::bad_request("SLUG_ALREADY_EXISTS", "Project slug already exists")
        }

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::store_error(&e)
        }
    }
}
